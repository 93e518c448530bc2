//! Persisted document model for genomic variant records.
//!
//! [`VariantDocument`] is the unit written to and read from the document
//! store. Its identity (`_id`) and spatial index key (`_at`) are derived,
//! never caller-supplied, and its embedded sets are built once at
//! construction. Growing an existing document goes through
//! [`crate::merge::merge_into`], not mutation.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::annotation::annotation_id;
use crate::bucket::at_field;
use crate::digest::{ALLELE_HASH_THRESHOLD, variant_id};
use crate::errors::ConvertError;

/// Sentinel allele meaning "no sequence" (pure insertion or deletion).
///
/// Distinct from a missing allele: callers must pass the sentinel rather
/// than leaving the field absent.
pub const NO_SEQUENCE: &str = "-";

/// Span above which an unbalanced allele change is structural rather than
/// an indel. Shares its value with the allele-hashing threshold of the id
/// derivation.
const SV_THRESHOLD: u64 = ALLELE_HASH_THRESHOLD as u64;

/// Variant class, persisted as an uppercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariantType {
    Snv,
    Mnv,
    Indel,
    Sv,
    NoVariation,
}

impl VariantType {
    /// Derive the variant class from the alleles and declared span.
    ///
    /// Equal-length alleles (neither the [`NO_SEQUENCE`] sentinel) are a
    /// substitution: SNV at length 1, MNV above. Unbalanced changes are
    /// indels up to the structural threshold and SVs above it. Identical
    /// alleles carry no variation.
    pub fn classify(
        reference: &str,
        alternate: &str,
        length: u64,
    ) -> Result<VariantType, ConvertError> {
        if reference.is_empty() || alternate.is_empty() {
            return Err(ConvertError::UnclassifiableType {
                reference: reference.to_string(),
                alternate: alternate.to_string(),
            });
        }
        if reference == alternate {
            return Ok(VariantType::NoVariation);
        }
        if reference != NO_SEQUENCE
            && alternate != NO_SEQUENCE
            && reference.len() == alternate.len()
        {
            if reference.len() == 1 {
                Ok(VariantType::Snv)
            } else {
                Ok(VariantType::Mnv)
            }
        } else if length <= SV_THRESHOLD {
            Ok(VariantType::Indel)
        } else {
            Ok(VariantType::Sv)
        }
    }
}

/// One HGVS nomenclature entry: a type (e.g. "genomic") and a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HgvsEntry {
    #[serde(rename = "type")]
    pub hgvs_type: String,
    #[serde(rename = "name")]
    pub name: String,
}

impl HgvsEntry {
    pub fn new(hgvs_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hgvs_type: hgvs_type.into(),
            name: name.into(),
        }
    }
}

/// Per-file/per-study data about a variant, including the per-sample
/// genotype payload. Opaque to this crate beyond inclusion and the raw
/// source-line trimming policy applied at conversion time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceEntry {
    #[serde(rename = "fid")]
    pub file_id: String,
    #[serde(rename = "sid")]
    pub study_id: String,
    /// Secondary alternate alleles seen in the same source record.
    #[serde(rename = "alts", default)]
    pub alternates: Vec<String>,
    /// INFO-style attributes, including the raw source line under `src`.
    #[serde(rename = "attrs", default)]
    pub attributes: BTreeMap<String, String>,
    /// Genotype format, e.g. "GT:DP".
    #[serde(rename = "fm", default)]
    pub format: String,
    /// Per-sample data keyed by sample name, then by format key.
    #[serde(rename = "samp", default)]
    pub samples: BTreeMap<String, BTreeMap<String, String>>,
}

/// Aggregate statistics for one study/file/cohort. Opaque payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantStats {
    #[serde(rename = "sid")]
    pub study_id: String,
    #[serde(rename = "fid")]
    pub file_id: String,
    #[serde(rename = "cid")]
    pub cohort_id: String,
    /// Minor allele frequency.
    #[serde(rename = "maf")]
    pub maf: f64,
    /// Minor genotype frequency.
    #[serde(rename = "mgf")]
    pub mgf: f64,
    #[serde(rename = "mafAl")]
    pub maf_allele: String,
    #[serde(rename = "mgfGt")]
    pub mgf_genotype: String,
    #[serde(rename = "missAl")]
    pub missing_alleles: u64,
    #[serde(rename = "missGt")]
    pub missing_genotypes: u64,
    /// Genotype counts keyed by genotype string, e.g. "0/1".
    #[serde(rename = "numGt", default)]
    pub num_gt: BTreeMap<String, u64>,
}

// Set membership is value equality; frequencies compare bitwise so that
// statistics can live in hashed sets.
impl PartialEq for VariantStats {
    fn eq(&self, other: &Self) -> bool {
        self.study_id == other.study_id
            && self.file_id == other.file_id
            && self.cohort_id == other.cohort_id
            && self.maf.to_bits() == other.maf.to_bits()
            && self.mgf.to_bits() == other.mgf.to_bits()
            && self.maf_allele == other.maf_allele
            && self.mgf_genotype == other.mgf_genotype
            && self.missing_alleles == other.missing_alleles
            && self.missing_genotypes == other.missing_genotypes
            && self.num_gt == other.num_gt
    }
}

impl Eq for VariantStats {}

impl Hash for VariantStats {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.study_id.hash(state);
        self.file_id.hash(state);
        self.cohort_id.hash(state);
        self.maf.to_bits().hash(state);
        self.mgf.to_bits().hash(state);
        self.maf_allele.hash(state);
        self.mgf_genotype.hash(state);
        self.missing_alleles.hash(state);
        self.missing_genotypes.hash(state);
        self.num_gt.hash(state);
    }
}

/// Pointer to a separately stored annotation document: the annotator
/// version pair is enough to rebuild the annotation id (see
/// [`crate::annotation::annotation_id`]). Never the annotation payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationIndex {
    #[serde(rename = "vepv")]
    pub annotator_version: String,
    #[serde(rename = "cachev")]
    pub cache_version: String,
}

impl AnnotationIndex {
    pub fn new(annotator_version: impl Into<String>, cache_version: impl Into<String>) -> Self {
        Self {
            annotator_version: annotator_version.into(),
            cache_version: cache_version.into(),
        }
    }
}

/// Two-resolution spatial index key. Derived from (chromosome, start) by
/// [`crate::bucket::at_field`]; never caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantAt {
    #[serde(rename = "chunkSmall")]
    chunk_small: String,
    #[serde(rename = "chunkBig")]
    chunk_big: String,
}

impl VariantAt {
    pub(crate) fn new(chunk_small: String, chunk_big: String) -> Self {
        Self {
            chunk_small,
            chunk_big,
        }
    }

    /// Bucket key at width 1000.
    pub fn chunk_small(&self) -> &str {
        &self.chunk_small
    }

    /// Bucket key at width 10000.
    pub fn chunk_big(&self) -> &str {
        &self.chunk_big
    }
}

/// The persisted representation of one genomic variant.
///
/// Construction always derives `id` and `at` from the coordinates and
/// alleles; every set field is present (possibly empty), never null.
/// Fields are read-only after construction. Two documents built from the
/// same (chromosome, start, reference, alternate) collide to the same id;
/// that collision is the deduplication mechanism across independent
/// data loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "type")]
    variant_type: VariantType,
    #[serde(rename = "chr")]
    chromosome: String,
    #[serde(rename = "start")]
    start: u64,
    #[serde(rename = "end")]
    end: u64,
    #[serde(rename = "len")]
    length: u64,
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "alt")]
    alternate: String,
    #[serde(rename = "_at")]
    at: VariantAt,
    #[serde(rename = "hgvs", default)]
    hgvs: HashSet<HgvsEntry>,
    #[serde(rename = "ids", default)]
    ids: HashSet<String>,
    #[serde(rename = "files", default)]
    source_entries: HashSet<SourceEntry>,
    #[serde(rename = "st", default)]
    statistics: HashSet<VariantStats>,
    #[serde(rename = "annot", default)]
    annotation_indices: HashSet<AnnotationIndex>,
}

impl VariantDocument {
    /// Build a document with no optional data. All set fields are empty.
    pub fn new(
        variant_type: VariantType,
        chromosome: impl Into<String>,
        start: u64,
        end: u64,
        length: u64,
        reference: impl Into<String>,
        alternate: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            variant_type,
            chromosome.into(),
            start,
            end,
            length,
            reference.into(),
            alternate.into(),
            HashSet::new(),
            HashSet::new(),
            HashSet::new(),
            HashSet::new(),
            HashSet::new(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        variant_type: VariantType,
        chromosome: String,
        start: u64,
        end: u64,
        length: u64,
        reference: String,
        alternate: String,
        hgvs: HashSet<HgvsEntry>,
        ids: HashSet<String>,
        source_entries: HashSet<SourceEntry>,
        statistics: HashSet<VariantStats>,
        annotation_indices: HashSet<AnnotationIndex>,
    ) -> Self {
        let id = variant_id(&chromosome, start, &reference, &alternate);
        let at = at_field(&chromosome, start);
        Self {
            id,
            variant_type,
            chromosome,
            start,
            end,
            length,
            reference,
            alternate,
            at,
            hgvs,
            ids,
            source_entries,
            statistics,
            annotation_indices,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn variant_type(&self) -> VariantType {
        self.variant_type
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn alternate(&self) -> &str {
        &self.alternate
    }

    pub fn at(&self) -> &VariantAt {
        &self.at
    }

    pub fn hgvs(&self) -> &HashSet<HgvsEntry> {
        &self.hgvs
    }

    /// HGVS entries grouped by nomenclature type. Persistence is a flat
    /// set; reads are grouped.
    pub fn hgvs_by_type(&self) -> HashMap<&str, HashSet<&str>> {
        let mut map: HashMap<&str, HashSet<&str>> = HashMap::new();
        for entry in &self.hgvs {
            map.entry(entry.hgvs_type.as_str())
                .or_default()
                .insert(entry.name.as_str());
        }
        map
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    pub fn source_entries(&self) -> &HashSet<SourceEntry> {
        &self.source_entries
    }

    pub fn statistics(&self) -> &HashSet<VariantStats> {
        &self.statistics
    }

    pub fn annotation_indices(&self) -> &HashSet<AnnotationIndex> {
        &self.annotation_indices
    }

    /// Resolve the ids of the externally stored annotation documents for
    /// every indexed annotation. This is the only join path from a
    /// variant document to the annotation store.
    pub fn annotation_ids(&self) -> HashSet<String> {
        self.annotation_indices
            .iter()
            .map(|index| {
                annotation_id(
                    &self.chromosome,
                    self.start,
                    &self.reference,
                    &self.alternate,
                    &index.annotator_version,
                    &index.cache_version,
                )
            })
            .collect()
    }
}

impl Display for VariantDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{} {}/{}",
            self.chromosome, self.start, self.end, self.reference, self.alternate
        )
    }
}
