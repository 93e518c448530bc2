//! Declared wire schema for the persisted document.
//!
//! The persisted key of every field is fixed for compatibility with
//! existing stored data. The serializer (serde, via `rename` attributes on
//! the model structs) must agree with this table; `test_schema_conformance`
//! in `tests/test_document_e2e.rs` asserts that the serialized form of a
//! document uses exactly the keys declared here.

pub const ID_FIELD: &str = "_id";
pub const TYPE_FIELD: &str = "type";
pub const CHROMOSOME_FIELD: &str = "chr";
pub const START_FIELD: &str = "start";
pub const END_FIELD: &str = "end";
pub const LENGTH_FIELD: &str = "len";
pub const REFERENCE_FIELD: &str = "ref";
pub const ALTERNATE_FIELD: &str = "alt";
pub const AT_FIELD: &str = "_at";
pub const HGVS_FIELD: &str = "hgvs";
pub const IDS_FIELD: &str = "ids";
pub const FILES_FIELD: &str = "files";
pub const STATS_FIELD: &str = "st";
pub const ANNOTATION_FIELD: &str = "annot";

// _at subdocument
pub const AT_CHUNK_SMALL_FIELD: &str = "chunkSmall";
pub const AT_CHUNK_BIG_FIELD: &str = "chunkBig";

// hgvs subdocument
pub const HGVS_TYPE_FIELD: &str = "type";
pub const HGVS_NAME_FIELD: &str = "name";

// source entry subdocument
pub const FILE_ID_FIELD: &str = "fid";
pub const STUDY_ID_FIELD: &str = "sid";
pub const ALTERNATES_FIELD: &str = "alts";
pub const ATTRIBUTES_FIELD: &str = "attrs";
pub const FORMAT_FIELD: &str = "fm";
pub const SAMPLES_FIELD: &str = "samp";

// statistics subdocument
pub const COHORT_ID_FIELD: &str = "cid";
pub const MAF_FIELD: &str = "maf";
pub const MGF_FIELD: &str = "mgf";
pub const MAF_ALLELE_FIELD: &str = "mafAl";
pub const MGF_GENOTYPE_FIELD: &str = "mgfGt";
pub const MISSING_ALLELES_FIELD: &str = "missAl";
pub const MISSING_GENOTYPES_FIELD: &str = "missGt";
pub const NUM_GT_FIELD: &str = "numGt";

// annotation index subdocument
pub const ANNOTATOR_VERSION_FIELD: &str = "vepv";
pub const ANNOTATOR_CACHE_VERSION_FIELD: &str = "cachev";

/// How a top-level field serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single string or integer value.
    Scalar,
    /// A nested single-valued subdocument.
    Subdocument,
    /// An unordered set of values or subdocuments.
    Set,
}

/// One row of the document schema: rust field, persisted key, shape.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: &'static str,
    pub key: &'static str,
    pub kind: FieldKind,
}

/// Top-level schema of [`crate::models::VariantDocument`].
pub const DOCUMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec { field: "id", key: ID_FIELD, kind: FieldKind::Scalar },
    FieldSpec { field: "variant_type", key: TYPE_FIELD, kind: FieldKind::Scalar },
    FieldSpec { field: "chromosome", key: CHROMOSOME_FIELD, kind: FieldKind::Scalar },
    FieldSpec { field: "start", key: START_FIELD, kind: FieldKind::Scalar },
    FieldSpec { field: "end", key: END_FIELD, kind: FieldKind::Scalar },
    FieldSpec { field: "length", key: LENGTH_FIELD, kind: FieldKind::Scalar },
    FieldSpec { field: "reference", key: REFERENCE_FIELD, kind: FieldKind::Scalar },
    FieldSpec { field: "alternate", key: ALTERNATE_FIELD, kind: FieldKind::Scalar },
    FieldSpec { field: "at", key: AT_FIELD, kind: FieldKind::Subdocument },
    FieldSpec { field: "hgvs", key: HGVS_FIELD, kind: FieldKind::Set },
    FieldSpec { field: "ids", key: IDS_FIELD, kind: FieldKind::Set },
    FieldSpec { field: "source_entries", key: FILES_FIELD, kind: FieldKind::Set },
    FieldSpec { field: "statistics", key: STATS_FIELD, kind: FieldKind::Set },
    FieldSpec { field: "annotation_indices", key: ANNOTATION_FIELD, kind: FieldKind::Set },
];
