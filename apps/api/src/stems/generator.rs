//! Stem Generation — one chat completion per facet, then embedding validation.
//!
//! Flow: validate request → for each facet: build prompt → complete → parse
//!       → validate_stems (embed + flag) → return records.
//!
//! A failed completion for any facet fails the whole batch; callers never see
//! a partial set of facets.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{ChatOptions, LlmClient};
use crate::models::stem::{GeneratedItem, StemGenerationRequest, StemRecord};
use crate::stems::facets::all_facets;
use crate::stems::prompts::{build_prompt, GENERATION_SYSTEM};
use crate::stems::validator::{validate_stems, Embedder};

/// Anything that can turn a generation prompt into raw completion text.
///
/// `LlmClient` is the production implementation; handlers hold an
/// `Arc<dyn StemSource>` so tests can substitute a canned source.
#[async_trait]
pub trait StemSource: Send + Sync {
    async fn complete(
        &self,
        request: &StemGenerationRequest,
        prompt: &str,
    ) -> Result<String, AppError>;
}

#[async_trait]
impl StemSource for LlmClient {
    async fn complete(
        &self,
        request: &StemGenerationRequest,
        prompt: &str,
    ) -> Result<String, AppError> {
        let options = ChatOptions {
            model: &request.model,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };
        self.chat_text(options, GENERATION_SYSTEM, prompt)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))
    }
}

/// Splits a completion into stems: one per non-blank line, with list dashes
/// and surrounding spaces removed.
pub fn parse_stems(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches(|c| c == '-' || c == ' ').to_string())
        .filter(|stem| !stem.is_empty())
        .collect()
}

/// Generates raw stems for every facet in catalogue order.
pub async fn generate_items(
    source: &dyn StemSource,
    request: &StemGenerationRequest,
) -> Result<Vec<GeneratedItem>, AppError> {
    let mut items = Vec::new();

    for facet in all_facets() {
        let prompt = build_prompt(facet.anchor, request);

        let text = match source.complete(request, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Generation failed for facet '{}': {e}", facet.facet);
                return Err(e);
            }
        };

        let stems = parse_stems(&text);
        if stems.is_empty() {
            warn!("Facet '{}' produced no stems", facet.facet);
        }

        items.extend(stems.into_iter().map(|stem| GeneratedItem {
            facet: facet.facet.to_string(),
            anchor: facet.anchor.to_string(),
            stem,
        }));
    }

    Ok(items)
}

/// Full pipeline behind `/generate-sample` and `/generate`.
pub async fn generate_validated(
    source: &dyn StemSource,
    embedder: &dyn Embedder,
    request: &StemGenerationRequest,
) -> Result<Vec<StemRecord>, AppError> {
    request.validate()?;

    info!(
        "Generating {} stems per facet with model {}",
        request.item_number_per_stem, request.model
    );
    let items = generate_items(source, request).await?;
    info!("Generated {} stems across {} facets", items.len(), all_facets().len());

    let records = validate_stems(embedder, items, request.threshold).await?;
    let drifted = records.iter().filter(|r| r.drift_flag).count();
    info!(
        "Validated {} stems: {} drifted below threshold {}",
        records.len(),
        drifted,
        request.threshold
    );

    Ok(records)
}
