//! Axum route handlers for similarity analysis.

use axum::Json;
use serde::Deserialize;

use crate::analysis::{build_report, SimilarityReport, DEFAULT_THRESHOLD};
use crate::errors::AppError;
use crate::models::stem::StemRecord;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub records: Vec<StemRecord>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// POST /analyze
///
/// Per-facet statistics, histogram and threshold compliance for a batch of
/// records previously returned by `/generate-sample`.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SimilarityReport>, AppError> {
    let report = build_report(&request.records, request.threshold)?;
    Ok(Json(report))
}
