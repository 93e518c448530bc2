//! Union merge of documents sharing a derived id.
//!
//! Two concurrent loaders can produce documents for the same variant; the
//! persistence layer resolves that by merging, never by last-writer-wins.
//! The merge is pure, idempotent, and order-independent: set fields union
//! by value equality, scalar fields must already agree. A scalar mismatch
//! under the same id means an id collision or corrupted upstream data and
//! is surfaced as a data-integrity error.

use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::MergeError;
use crate::models::VariantDocument;
use crate::schema;

/// Merge `incoming` into `existing`, producing the combined document.
///
/// Applying the same incoming document twice leaves the result unchanged;
/// set members deduplicate by value equality, not insertion count.
pub fn merge_into(
    existing: &VariantDocument,
    incoming: &VariantDocument,
) -> Result<VariantDocument, MergeError> {
    let id = existing.id();
    ensure_eq(id, schema::ID_FIELD, &existing.id(), &incoming.id())?;
    ensure_eq(
        id,
        schema::TYPE_FIELD,
        &existing.variant_type(),
        &incoming.variant_type(),
    )?;
    ensure_eq(
        id,
        schema::CHROMOSOME_FIELD,
        &existing.chromosome(),
        &incoming.chromosome(),
    )?;
    ensure_eq(id, schema::START_FIELD, &existing.start(), &incoming.start())?;
    ensure_eq(id, schema::END_FIELD, &existing.end(), &incoming.end())?;
    ensure_eq(
        id,
        schema::LENGTH_FIELD,
        &existing.length(),
        &incoming.length(),
    )?;
    ensure_eq(
        id,
        schema::REFERENCE_FIELD,
        &existing.reference(),
        &incoming.reference(),
    )?;
    ensure_eq(
        id,
        schema::ALTERNATE_FIELD,
        &existing.alternate(),
        &incoming.alternate(),
    )?;

    Ok(VariantDocument::from_parts(
        existing.variant_type(),
        existing.chromosome().to_string(),
        existing.start(),
        existing.end(),
        existing.length(),
        existing.reference().to_string(),
        existing.alternate().to_string(),
        union(existing.hgvs(), incoming.hgvs()),
        union(existing.ids(), incoming.ids()),
        union(existing.source_entries(), incoming.source_entries()),
        union(existing.statistics(), incoming.statistics()),
        union(existing.annotation_indices(), incoming.annotation_indices()),
    ))
}

fn union<T: Clone + Eq + Hash>(
    existing: &std::collections::HashSet<T>,
    incoming: &std::collections::HashSet<T>,
) -> std::collections::HashSet<T> {
    existing.union(incoming).cloned().collect()
}

fn ensure_eq<T: PartialEq + Debug>(
    id: &str,
    field: &'static str,
    existing: &T,
    incoming: &T,
) -> Result<(), MergeError> {
    if existing == incoming {
        Ok(())
    } else {
        Err(MergeError::ScalarMismatch {
            id: id.to_string(),
            field,
            existing: format!("{:?}", existing),
            incoming: format!("{:?}", incoming),
        })
    }
}
