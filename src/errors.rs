use thiserror::Error;

/// Errors raised while projecting a source variant into a [`VariantDocument`].
///
/// Conversion is all-or-nothing: an error means no document was produced.
///
/// [`VariantDocument`]: crate::models::VariantDocument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A required coordinate or allele field was absent on the source.
    ///
    /// Absent means missing entirely; the `"-"` no-sequence sentinel is a
    /// valid allele value, not a missing one. `field` is the persisted key
    /// of the offending field (see [`crate::schema`]).
    #[error("required field is missing on the source variant: {field}")]
    MissingField { field: &'static str },

    /// No variant type was supplied and none could be derived from the alleles.
    #[error("cannot classify variant type from alleles {reference:?} / {alternate:?}")]
    UnclassifiableType {
        reference: String,
        alternate: String,
    },
}

/// Errors raised while merging two documents that share a derived id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Two documents with the same id disagree on a scalar field.
    ///
    /// Scalar fields are never overwritten by a merge; a mismatch means a
    /// hash collision or corrupted upstream data and is surfaced instead
    /// of being resolved.
    #[error("documents with id {id} disagree on {field}: {existing:?} != {incoming:?}")]
    ScalarMismatch {
        id: String,
        field: &'static str,
        existing: String,
        incoming: String,
    },
}
