//! # Variant storage documents
//!
//! This crate defines the storage-document representation of a genomic
//! variant record and the deterministic derivation rules that make it
//! cheap to store, index, and deduplicate in a document database. It
//! provides:
//!
//! - The persisted document model ([`VariantDocument`] and its embedded
//!   subdocuments), with wire field names fixed for compatibility with
//!   existing stored data ([`schema`])
//! - Content-derived id computation ([`digest`]): identical coordinates
//!   and alleles collide to the same id across independent loads
//! - Two-resolution spatial bucket keys for range queries ([`bucket`])
//! - Projection between the in-memory variant snapshot and the flattened
//!   document shape ([`convert`])
//! - Union merge for concurrent loads of the same variant ([`merge`])
//! - Join-key derivation to the separate annotation store ([`annotation`])
//!
//! Everything here is pure and stateless: no I/O, no shared mutable
//! state, safe to call from any number of worker threads without
//! coordination.

pub mod annotation;
pub mod bucket;
pub mod convert;
pub mod digest;
pub mod errors;
pub mod merge;
pub mod models;
pub mod schema;

pub use annotation::annotation_id;
pub use bucket::{at_field, CHUNK_SIZE_BIG, CHUNK_SIZE_SMALL};
pub use convert::{
    to_document, to_source, ConvertOptions, SourceInclusion, StatsInclusion, VariantSource,
};
pub use digest::{variant_id, IdWriter, ALLELE_HASH_THRESHOLD};
pub use errors::{ConvertError, MergeError};
pub use merge::merge_into;
pub use models::{
    AnnotationIndex, HgvsEntry, SourceEntry, VariantAt, VariantDocument, VariantStats,
    VariantType, NO_SEQUENCE,
};
