//! Similarity analysis over a batch of validated stems.
//!
//! Pure, synchronous derivations: per-facet descriptive statistics, the
//! combined similarity histogram, and per-facet threshold compliance.
//! None of them mutate their input.

pub mod handlers;
pub mod histogram;
pub mod stats;

use serde::Serialize;
use thiserror::Error;

use crate::models::stem::StemRecord;

pub use histogram::{similarity_histogram, HistogramBin};
pub use stats::{compute_facet_stats, threshold_compliance, FacetStats, ThresholdCompliance};

/// Threshold used when the caller does not supply one.
pub const DEFAULT_THRESHOLD: f64 = 0.75;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("record {index} (facet '{facet}') has non-finite cosine_similarity {value}")]
    NonFiniteSimilarity {
        index: usize,
        facet: String,
        value: f64,
    },

    #[error("value {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },
}

/// Everything the chart views need for one batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityReport {
    pub threshold: f64,
    pub total: usize,
    pub facets: Vec<FacetStats>,
    pub histogram: Vec<HistogramBin>,
    pub compliance: Vec<ThresholdCompliance>,
}

/// Builds the full report for a batch of records.
pub fn build_report(records: &[StemRecord], threshold: f64) -> Result<SimilarityReport, StatsError> {
    let facets = compute_facet_stats(records, threshold)?;
    let histogram = similarity_histogram(records)?;
    let compliance = threshold_compliance(&facets);

    Ok(SimilarityReport {
        threshold,
        total: records.len(),
        facets,
        histogram,
        compliance,
    })
}

#[cfg(test)]
pub(crate) fn record(facet: &str, similarity: f64) -> StemRecord {
    StemRecord {
        facet: facet.to_string(),
        anchor: format!("anchor for {facet}"),
        stem_text: format!("stem for {facet}"),
        cosine_similarity: similarity,
        drift_flag: similarity < DEFAULT_THRESHOLD,
        length_flag: false,
    }
}
