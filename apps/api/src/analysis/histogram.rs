//! Fixed-width similarity histogram over [0, 1].

use serde::{Deserialize, Serialize};

use crate::analysis::StatsError;
use crate::models::stem::StemRecord;

/// Buckets of width 0.05.
pub const BUCKET_COUNT: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub bucket_start: f64,
    pub count: usize,
}

/// Buckets `values` into `[start, start + 0.05)` intervals; the last bucket
/// also takes 1.0. Values outside [0, 1] fall outside every bucket and are
/// not counted.
pub fn histogram(values: &[f64]) -> Result<Vec<HistogramBin>, StatsError> {
    let mut counts = [0usize; BUCKET_COUNT];

    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(StatsError::NonFiniteValue { index, value });
        }
        if let Some(bucket) = bucket_index(value) {
            counts[bucket] += 1;
        }
    }

    Ok(counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBin {
            bucket_start: i as f64 / BUCKET_COUNT as f64,
            count,
        })
        .collect())
}

/// Histogram of every record's similarity, ignoring facet.
pub fn similarity_histogram(records: &[StemRecord]) -> Result<Vec<HistogramBin>, StatsError> {
    let values: Vec<f64> = records.iter().map(|r| r.cosine_similarity).collect();
    histogram(&values).map_err(|e| match e {
        StatsError::NonFiniteValue { index, value } => StatsError::NonFiniteSimilarity {
            index,
            facet: records[index].facet.clone(),
            value,
        },
        other => other,
    })
}

fn bucket_index(value: f64) -> Option<usize> {
    if !(0.0..=1.0).contains(&value) {
        return None;
    }
    // scaling by the bucket count keeps boundaries like 0.15 exact
    let bucket = (value * BUCKET_COUNT as f64).floor() as usize;
    Some(bucket.min(BUCKET_COUNT - 1))
}
