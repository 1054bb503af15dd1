//! Per-facet descriptive statistics over cosine similarity.
//!
//! Conventions the chart views depend on:
//! - facets appear in first-seen order, members in input order
//! - median is the element at `floor(n / 2)` of the sorted values (upper
//!   middle for even `n`, never an average)
//! - mean and stddev are population statistics
//! - mode uses exact float equality; ties go to the value that reaches
//!   the top count first in input order
//! - a value equal to the threshold counts as above

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::StatsError;
use crate::models::stem::StemRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetStats {
    pub facet: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mean: f64,
    pub stddev: f64,
    pub mode: f64,
    #[serde(rename = "belowThreshold")]
    pub below_threshold: usize,
    #[serde(rename = "aboveThreshold")]
    pub above_threshold: usize,
}

/// Share of a facet's stems at or above the threshold, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCompliance {
    pub facet: String,
    pub above_pct: f64,
}

/// Groups `records` by facet and summarises each group's similarities.
///
/// An empty input yields an empty result. Fails on the first record whose
/// similarity is NaN or infinite.
pub fn compute_facet_stats(
    records: &[StemRecord],
    threshold: f64,
) -> Result<Vec<FacetStats>, StatsError> {
    let groups = group_by_facet(records)?;

    Ok(groups
        .into_iter()
        .map(|(facet, values)| summarize(facet, &values, threshold))
        .collect())
}

/// Percentage above threshold for each facet, in the same order as `stats`.
pub fn threshold_compliance(stats: &[FacetStats]) -> Vec<ThresholdCompliance> {
    stats
        .iter()
        .map(|s| ThresholdCompliance {
            facet: s.facet.clone(),
            above_pct: s.above_threshold as f64 / s.count as f64 * 100.0,
        })
        .collect()
}

fn group_by_facet(records: &[StemRecord]) -> Result<Vec<(&str, Vec<f64>)>, StatsError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let value = record.cosine_similarity;
        if !value.is_finite() {
            return Err(StatsError::NonFiniteSimilarity {
                index: i,
                facet: record.facet.clone(),
                value,
            });
        }

        let slot = *index.entry(record.facet.as_str()).or_insert_with(|| {
            groups.push((record.facet.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(value);
    }

    Ok(groups)
}

fn summarize(facet: &str, values: &[f64], threshold: f64) -> FacetStats {
    let n = values.len();
    let count = n as f64;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = sorted[n / 2];

    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;

    let below_threshold = values.iter().filter(|&&v| v < threshold).count();

    FacetStats {
        facet: facet.to_string(),
        count: n,
        min,
        max,
        median,
        mean,
        stddev: variance.sqrt(),
        mode: mode(values),
        below_threshold,
        above_threshold: n - below_threshold,
    }
}

/// Most frequent exact value. Scans in order and switches only on a strictly
/// greater count, so a tie goes to the value that reached the count first.
fn mode(values: &[f64]) -> f64 {
    let mut frequency: HashMap<u64, usize> = HashMap::new();
    let mut max_freq = 0;
    let mut mode = values[0];

    for &v in values {
        // 0.0 and -0.0 are the same value
        let key = if v == 0.0 { 0 } else { v.to_bits() };
        let count = frequency.entry(key).or_insert(0);
        *count += 1;
        if *count > max_freq {
            max_freq = *count;
            mode = v;
        }
    }

    mode
}
