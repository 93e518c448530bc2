//! Two-resolution spatial bucket keys.
//!
//! Every variant carries two pre-computed index keys, one per bucket
//! width, so range queries can pick the coarse bucket for wide windows
//! (fewer buckets to scan) or the fine one for narrow windows (less
//! over-fetch). Keys are a pure function of (chromosome, start),
//! independent of the alleles, so all variants at one locus share bucket
//! membership. They are recomputed by every writer, never trusted from
//! caller data.

use crate::models::VariantAt;

pub const CHUNK_SIZE_SMALL: u64 = 1000;
pub const CHUNK_SIZE_BIG: u64 = 10_000;

pub const CHUNK_LABEL_SMALL: &str = "1k";
pub const CHUNK_LABEL_BIG: &str = "10k";

/// Derive the `_at` index key pair for one locus.
///
/// Bucket indices are `start / width` (floor division); each key is
/// formatted `{chromosome}_{index}_{label}`.
pub fn at_field(chromosome: &str, start: u64) -> VariantAt {
    let chunk_small = format!(
        "{}_{}_{}",
        chromosome,
        start / CHUNK_SIZE_SMALL,
        CHUNK_LABEL_SMALL
    );
    let chunk_big = format!(
        "{}_{}_{}",
        chromosome,
        start / CHUNK_SIZE_BIG,
        CHUNK_LABEL_BIG
    );
    VariantAt::new(chunk_small, chunk_big)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("1", 1500, "1_1_1k", "1_0_10k")]
    #[case("1", 0, "1_0_1k", "1_0_10k")]
    #[case("1", 999, "1_0_1k", "1_0_10k")]
    #[case("1", 1000, "1_1_1k", "1_0_10k")]
    #[case("1", 10_000, "1_10_1k", "1_1_10k")]
    #[case("X", 155_270_560, "X_155270_1k", "X_15527_10k")]
    fn test_at_field(
        #[case] chromosome: &str,
        #[case] start: u64,
        #[case] small: &str,
        #[case] big: &str,
    ) {
        let at = at_field(chromosome, start);
        assert_eq!(at.chunk_small(), small);
        assert_eq!(at.chunk_big(), big);
    }

    #[test]
    fn test_at_field_ignores_alleles_by_construction() {
        // Same locus, different variants: identical bucket membership.
        let a = at_field("7", 55_249_071);
        let b = at_field("7", 55_249_071);
        assert_eq!(a, b);
    }
}
