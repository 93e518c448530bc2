//! Projection between the in-memory variant snapshot and the persisted
//! document.
//!
//! [`VariantSource`] is a plain data snapshot of the rich domain variant:
//! composition over the domain type, not an extension of it. The
//! forward projection ([`to_document`]) derives the document's id and
//! index keys and flattens the nested annotation/per-sample structures
//! into the embedded-set shapes; the partial inverse ([`to_source`])
//! rebuilds the snapshot from a persisted document and is lossy exactly
//! where the forward projection is.
//!
//! Both directions are pure: no I/O, no mutation of the input, and an
//! error means nothing was produced.

use std::collections::{HashMap, HashSet};

use crate::errors::ConvertError;
use crate::models::{HgvsEntry, SourceEntry, VariantDocument, VariantStats, VariantType};
use crate::schema;

/// Attribute key of a source entry holding the raw source line.
pub const RAW_SOURCE_ATTRIBUTE: &str = "src";

/// Column count retained by [`SourceInclusion::FirstEightColumns`]: the
/// fixed (non-genotype) columns of a variant call line.
const RAW_SOURCE_COLUMNS: usize = 8;

/// How much per-sample source data the document retains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceInclusion {
    /// Keep source entries verbatim, including the full raw source line.
    #[default]
    Full,
    /// Keep source entries, truncating the raw source line to its first
    /// eight tab-separated columns.
    FirstEightColumns,
    /// Drop source entries entirely.
    Excluded,
}

/// Whether the document retains aggregate statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsInclusion {
    #[default]
    Full,
    Excluded,
}

/// Conversion configuration. The source-entry and statistics
/// sub-converters are independent: either can be restricted without
/// affecting the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub source_entries: SourceInclusion,
    pub statistics: StatsInclusion,
}

/// Plain data snapshot of an in-memory variant, as handed over by the
/// loader. Required coordinate and allele fields are `Option` because the
/// upstream data may lack them; conversion fails fast on `None`. The
/// `"-"` no-sequence sentinel is a value, not an absence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantSource {
    pub chromosome: Option<String>,
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub length: Option<u64>,
    pub reference: Option<String>,
    pub alternate: Option<String>,
    /// Pre-classified variant type, if the source carries one. Derived
    /// from the alleles otherwise.
    pub variant_type: Option<VariantType>,
    pub ids: HashSet<String>,
    /// HGVS names keyed by nomenclature type.
    pub hgvs: HashMap<String, HashSet<String>>,
    pub source_entries: Vec<SourceEntry>,
    pub statistics: Vec<VariantStats>,
}

/// Project a source snapshot into one [`VariantDocument`].
///
/// Fields absent on the source map to empty sets, never null. Missing
/// required fields fail with the persisted key of the offending field.
pub fn to_document(
    source: &VariantSource,
    options: &ConvertOptions,
) -> Result<VariantDocument, ConvertError> {
    let chromosome = required(&source.chromosome, schema::CHROMOSOME_FIELD)?.clone();
    let start = *required(&source.start, schema::START_FIELD)?;
    let end = *required(&source.end, schema::END_FIELD)?;
    let length = *required(&source.length, schema::LENGTH_FIELD)?;
    let reference = required(&source.reference, schema::REFERENCE_FIELD)?.clone();
    let alternate = required(&source.alternate, schema::ALTERNATE_FIELD)?.clone();

    let variant_type = match source.variant_type {
        Some(variant_type) => variant_type,
        None => VariantType::classify(&reference, &alternate, length)?,
    };

    let hgvs: HashSet<HgvsEntry> = source
        .hgvs
        .iter()
        .flat_map(|(hgvs_type, names)| {
            names
                .iter()
                .map(move |name| HgvsEntry::new(hgvs_type.clone(), name.clone()))
        })
        .collect();

    let source_entries: HashSet<SourceEntry> = match options.source_entries {
        SourceInclusion::Excluded => HashSet::new(),
        SourceInclusion::Full => source.source_entries.iter().cloned().collect(),
        SourceInclusion::FirstEightColumns => source
            .source_entries
            .iter()
            .map(trim_raw_source)
            .collect(),
    };

    let statistics: HashSet<VariantStats> = match options.statistics {
        StatsInclusion::Excluded => HashSet::new(),
        StatsInclusion::Full => source.statistics.iter().cloned().collect(),
    };

    Ok(VariantDocument::from_parts(
        variant_type,
        chromosome,
        start,
        end,
        length,
        reference,
        alternate,
        hgvs,
        source.ids.clone(),
        source_entries,
        statistics,
        HashSet::new(),
    ))
}

/// Rebuild a source snapshot from a persisted document.
///
/// Lossy where the forward projection is: annotation index references
/// stay behind (they are attached by the annotation loader, not part of
/// the source contract), and any raw source data trimmed at conversion
/// time is gone.
pub fn to_source(document: &VariantDocument) -> VariantSource {
    let mut hgvs: HashMap<String, HashSet<String>> = HashMap::new();
    for entry in document.hgvs() {
        hgvs.entry(entry.hgvs_type.clone())
            .or_default()
            .insert(entry.name.clone());
    }

    VariantSource {
        chromosome: Some(document.chromosome().to_string()),
        start: Some(document.start()),
        end: Some(document.end()),
        length: Some(document.length()),
        reference: Some(document.reference().to_string()),
        alternate: Some(document.alternate().to_string()),
        variant_type: Some(document.variant_type()),
        ids: document.ids().clone(),
        hgvs,
        source_entries: document.source_entries().iter().cloned().collect(),
        statistics: document.statistics().iter().cloned().collect(),
    }
}

fn required<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T, ConvertError> {
    value
        .as_ref()
        .ok_or(ConvertError::MissingField { field })
}

fn trim_raw_source(entry: &SourceEntry) -> SourceEntry {
    let mut entry = entry.clone();
    if let Some(raw) = entry.attributes.get_mut(RAW_SOURCE_ATTRIBUTE) {
        *raw = first_columns(raw, RAW_SOURCE_COLUMNS);
    }
    entry
}

fn first_columns(line: &str, count: usize) -> String {
    line.split('\t').take(count).collect::<Vec<_>>().join("\t")
}
