//! Annotation document join keys.
//!
//! Annotation payloads live in a separate store; a variant document keeps
//! only [`crate::models::AnnotationIndex`] pointers. The id of the
//! annotation document is never stored redundantly; it is rebuilt from
//! the variant coordinates plus the annotator version pair.

use crate::digest::variant_id;

/// Derive the id of the annotation document for one (variant, annotator
/// version, annotator cache version) combination: the variant id extended
/// with `_{annotator_version}_{cache_version}`.
pub fn annotation_id(
    chromosome: &str,
    start: u64,
    reference: &str,
    alternate: &str,
    annotator_version: &str,
    cache_version: &str,
) -> String {
    format!(
        "{}_{}_{}",
        variant_id(chromosome, start, reference, alternate),
        annotator_version,
        cache_version
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_annotation_id_extends_variant_id() {
        assert_eq!(
            annotation_id("1", 1000, "A", "G", "82", "82"),
            "1_1000_A_G_82_82"
        );
    }

    #[test]
    fn test_annotation_id_keeps_sentinel_form() {
        assert_eq!(
            annotation_id("1", 1000, "-", "G", "90", "89"),
            "1_1000__G_90_89"
        );
    }
}
