//! Id and bucket derivation compliance tests.
//!
//! These vectors are a compatibility surface: ids and bucket keys must
//! match the values already persisted by existing deployments, so every
//! expected string here is pinned, not computed.

use vardoc::bucket::at_field;
use vardoc::digest::{variant_id, IdWriter, ALLELE_HASH_THRESHOLD};

// ============================================================================
// Variant id: short-allele (verbatim) form
// ============================================================================

#[test]
fn test_id_snv() {
    assert_eq!(variant_id("1", 1000, "A", "G"), "1_1000_A_G");
}

#[test]
fn test_id_mnv() {
    assert_eq!(variant_id("22", 16050075, "AC", "GT"), "22_16050075_AC_GT");
}

#[test]
fn test_id_non_numeric_chromosome() {
    assert_eq!(variant_id("X", 155270560, "C", "T"), "X_155270560_C_T");
    assert_eq!(variant_id("MT", 152, "T", "C"), "MT_152_T_C");
}

// ============================================================================
// Variant id: no-sequence sentinel form (indels align with the
// locus-only form other tools expect)
// ============================================================================

#[test]
fn test_id_insertion_sentinel_reference() {
    assert_eq!(variant_id("1", 1000, "-", "G"), "1_1000__G");
}

#[test]
fn test_id_deletion_sentinel_alternate() {
    assert_eq!(variant_id("1", 1000, "G", "-"), "1_1000_G_");
}

// ============================================================================
// Variant id: hashed long-allele form. The boundary is exact: 49 stays
// verbatim, 50 hashes. Digests are pinned lowercase hex SHA-1 values.
// ============================================================================

#[test]
fn test_id_threshold_is_50() {
    assert_eq!(ALLELE_HASH_THRESHOLD, 50);

    let at_boundary = "A".repeat(50);
    let below_boundary = "A".repeat(49);

    assert_eq!(
        variant_id("1", 1000, &below_boundary, "G"),
        format!("1_1000_{}_G", below_boundary)
    );
    // sha1 of fifty 'A' bytes
    assert_eq!(
        variant_id("1", 1000, &at_boundary, "G"),
        "1_1000_080316afb4e11d98120b29d1070ce749f1f0a32c_G"
    );
}

#[test]
fn test_id_sixty_base_reference_hashes() {
    // sha1 of sixty 'A' bytes
    assert_eq!(
        variant_id("1", 1000, &"A".repeat(60), "G"),
        "1_1000_c9c4571630054c5466d19b5ea28069dc71c72b68_G"
    );
}

#[test]
fn test_id_sixty_base_alternate_hashes() {
    // sha1 of "ACGT" repeated fifteen times
    assert_eq!(
        variant_id("5", 70895, "T", &"ACGT".repeat(15)),
        "5_70895_T_da21a3bcac6709dca7cae729e5ece89869d7acd3"
    );
}

#[test]
fn test_id_both_alleles_long() {
    let id = variant_id("1", 1000, &"A".repeat(50), &"A".repeat(60));
    assert_eq!(
        id,
        "1_1000_080316afb4e11d98120b29d1070ce749f1f0a32c_c9c4571630054c5466d19b5ea28069dc71c72b68"
    );
}

// ============================================================================
// Batch writer path must match the free function byte for byte
// ============================================================================

#[test]
fn test_id_writer_matches_free_function_across_forms() {
    let mut writer = IdWriter::new();
    let long = "A".repeat(72);
    let cases: Vec<(&str, u64, &str, &str)> = vec![
        ("1", 1000, "A", "G"),
        ("1", 1000, "-", "G"),
        ("1", 1000, "G", "-"),
        ("X", 155270560, "C", "T"),
        ("1", 1000, long.as_str(), "G"),
    ];
    for (chromosome, start, reference, alternate) in cases {
        assert_eq!(
            writer.variant_id(chromosome, start, reference, alternate),
            variant_id(chromosome, start, reference, alternate)
        );
    }
}

// ============================================================================
// Spatial bucket keys
// ============================================================================

#[test]
fn test_at_field_mid_chunk() {
    let at = at_field("1", 1500);
    assert_eq!(at.chunk_small(), "1_1_1k");
    assert_eq!(at.chunk_big(), "1_0_10k");
}

#[test]
fn test_at_field_floor_division() {
    let at = at_field("2", 19999);
    assert_eq!(at.chunk_small(), "2_19_1k");
    assert_eq!(at.chunk_big(), "2_1_10k");
}

#[test]
fn test_at_field_independent_of_alleles() {
    // The key pair is a function of (chromosome, start) only: variants
    // with different alleles at one locus share bucket membership.
    let snv_locus = at_field("7", 140453136);
    let indel_locus = at_field("7", 140453136);
    assert_eq!(snv_locus, indel_locus);
}
