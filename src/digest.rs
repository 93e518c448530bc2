//! Variant id derivation.
//!
//! The id is a pure function of (chromosome, start, reference, alternate):
//! `{chromosome}_{start}_{reference}_{alternate}`, where an allele is kept
//! verbatim when short, contributes nothing when it is the no-sequence
//! sentinel, and is replaced by the lowercase hex SHA-1 digest of its
//! bytes at 50 characters or more. Identical coordinates and alleles
//! always collide to the same id; that collision deduplicates identical
//! variants across independent loads without any coordination service.
//!
//! [`variant_id`] is the straightforward allocating path. [`IdWriter`]
//! reuses one buffer across calls for batch loads; the
//! `test_writer_matches_free_function` test pins the two paths to
//! byte-identical output.

use sha1::{Digest, Sha1};

use crate::models::NO_SEQUENCE;

/// Allele length at which the id keeps a digest instead of the raw
/// sequence. `< 50` stays verbatim, `>= 50` is hashed; moving this
/// boundary breaks id compatibility with previously stored documents.
pub const ALLELE_HASH_THRESHOLD: usize = 50;

/// Derive the id for one variant.
///
/// ```
/// use vardoc::digest::variant_id;
///
/// assert_eq!(variant_id("1", 1000, "A", "G"), "1_1000_A_G");
/// assert_eq!(variant_id("1", 1000, "-", "G"), "1_1000__G");
/// ```
pub fn variant_id(chromosome: &str, start: u64, reference: &str, alternate: &str) -> String {
    let mut id = format!("{}_{}_", chromosome, start);
    push_allele(&mut id, reference);
    id.push('_');
    push_allele(&mut id, alternate);
    id
}

/// Append one allele segment: verbatim, nothing for the sentinel, or the
/// SHA-1 hex digest for long sequences.
fn push_allele(buf: &mut String, allele: &str) {
    if allele == NO_SEQUENCE {
        return;
    }
    if allele.len() < ALLELE_HASH_THRESHOLD {
        buf.push_str(allele);
    } else {
        push_sha1_hex(buf, allele.as_bytes());
    }
}

/// Lowercase hex SHA-1 of `data`, appended without intermediate allocation.
fn push_sha1_hex(buf: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut hasher = Sha1::new();
    hasher.update(data);
    for byte in hasher.finalize() {
        buf.push(HEX[(byte >> 4) as usize] as char);
        buf.push(HEX[(byte & 0x0f) as usize] as char);
    }
}

/// Reusable id writer for batch loads.
///
/// Holds one scratch buffer and formats the start coordinate with `itoa`,
/// so deriving ids for a whole incoming batch performs no per-variant
/// allocation beyond the returned `String`.
pub struct IdWriter {
    buf: String,
}

impl IdWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(128),
        }
    }

    /// Derive one id. Output is byte-identical to [`variant_id`].
    pub fn variant_id(
        &mut self,
        chromosome: &str,
        start: u64,
        reference: &str,
        alternate: &str,
    ) -> String {
        self.buf.clear();
        self.buf.push_str(chromosome);
        self.buf.push('_');
        self.buf.push_str(itoa::Buffer::new().format(start));
        self.buf.push('_');
        push_allele(&mut self.buf, reference);
        self.buf.push('_');
        push_allele(&mut self.buf, alternate);
        self.buf.clone()
    }
}

impl Default for IdWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[test]
    fn test_variant_id_deterministic() {
        let a = variant_id("1", 1000, "A", "G");
        let b = variant_id("1", 1000, "A", "G");
        assert_eq!(a, b);
        assert_eq!(a, "1_1000_A_G");
    }

    #[rstest]
    #[case("-", "G", "1_1000__G")]
    #[case("A", "-", "1_1000_A_")]
    #[case("-", "-", "1_1000__")]
    fn test_no_sequence_sentinel_contributes_nothing(
        #[case] reference: &str,
        #[case] alternate: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(variant_id("1", 1000, reference, alternate), expected);
    }

    #[test]
    fn test_threshold_49_stays_verbatim() {
        let reference = "A".repeat(49);
        let id = variant_id("1", 1000, &reference, "G");
        assert_eq!(id, format!("1_1000_{}_G", reference));
    }

    #[test]
    fn test_threshold_50_is_hashed() {
        // sha1("A" * 50)
        let id = variant_id("1", 1000, &"A".repeat(50), "G");
        assert_eq!(id, "1_1000_080316afb4e11d98120b29d1070ce749f1f0a32c_G");
    }

    #[test]
    fn test_long_alternate_is_hashed() {
        // sha1("A" * 60)
        let id = variant_id("1", 1000, "G", &"A".repeat(60));
        assert_eq!(id, "1_1000_G_c9c4571630054c5466d19b5ea28069dc71c72b68");
    }

    #[test]
    fn test_writer_matches_free_function() {
        let cases = [
            ("1", 1000_u64, "A", "G"),
            ("X", 0, "-", "G"),
            ("MT", 16569, "ACGT", "-"),
            ("2", 47_640_000, "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", "T"),
        ];
        let mut writer = IdWriter::new();
        for (chromosome, start, reference, alternate) in cases {
            assert_eq!(
                writer.variant_id(chromosome, start, reference, alternate),
                variant_id(chromosome, start, reference, alternate),
            );
        }
    }
}
