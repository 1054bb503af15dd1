//! Axum route handlers for stem generation.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::stem::{StemGenerationRequest, StemRecord};
use crate::state::AppState;
use crate::stems::export::{output_path, write_csv};
use crate::stems::facets::{all_facets, Facet};
use crate::stems::generator::generate_validated;

#[derive(Debug, Serialize)]
pub struct GenerateFileResponse {
    pub status: String,
    pub output_file: String,
    pub batch_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub rows: usize,
}

/// GET /facets
pub async fn handle_list_facets() -> Json<&'static [Facet]> {
    Json(all_facets())
}

/// POST /generate-sample
///
/// Generates stems for every facet and returns the validated records.
/// Any upstream failure yields a single error response with no partial batch.
pub async fn handle_generate_sample(
    State(state): State<AppState>,
    Json(request): Json<StemGenerationRequest>,
) -> Result<Json<Vec<StemRecord>>, AppError> {
    let records = generate_validated(
        state.stem_source.as_ref(),
        state.embedder.as_ref(),
        &request,
    )
    .await?;

    Ok(Json(records))
}

/// POST /generate
///
/// Same pipeline as `/generate-sample`, but writes the batch to a CSV file
/// under the configured output directory.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<StemGenerationRequest>,
) -> Result<Json<GenerateFileResponse>, AppError> {
    let path = output_path(&state.config.output_dir, &request.output_filename)?;

    let records = generate_validated(
        state.stem_source.as_ref(),
        state.embedder.as_ref(),
        &request,
    )
    .await?;
    let rows = records.len();

    let write_path = path.clone();
    tokio::task::spawn_blocking(move || write_csv(&write_path, &records))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV export task failed: {e}")))??;

    let batch_id = Uuid::new_v4();
    info!("Wrote batch {} ({} rows) to {}", batch_id, rows, path.display());

    Ok(Json(GenerateFileResponse {
        status: "success".to_string(),
        output_file: path.display().to_string(),
        batch_id,
        generated_at: Utc::now(),
        rows,
    }))
}
