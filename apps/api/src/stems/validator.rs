//! Stem validation — embeds stems and anchors, scores their cosine
//! similarity, and raises the drift and length flags.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::stem::{GeneratedItem, StemRecord};

/// Stems longer than this many words get `length_flag`.
pub const MAX_STEM_WORDS: usize = 15;

/// Embedding backend. Carried in `AppState` as `Arc<dyn Embedder>`.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Returns one vector per input, in input order.
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, AppError>;
}

/// Embeddings through the provider's `/embeddings` endpoint.
pub struct OpenAiEmbedder {
    llm: LlmClient,
    model: String,
}

impl OpenAiEmbedder {
    pub fn new(llm: LlmClient, model: String) -> Self {
        Self { llm, model }
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
        self.llm
            .embed(&self.model, inputs)
            .await
            .map_err(|e| AppError::Embedding(e.to_string()))
    }
}

/// Cosine similarity between two vectors.
/// Returns 0.0 for empty, mismatched, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Words as counted for the length rule: pieces between single spaces.
pub fn word_count(stem: &str) -> usize {
    stem.split(' ').count()
}

/// Scores each item against its anchor. Output order equals input order.
pub async fn validate_stems(
    embedder: &dyn Embedder,
    items: Vec<GeneratedItem>,
    threshold: f64,
) -> Result<Vec<StemRecord>, AppError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let stems: Vec<String> = items.iter().map(|i| i.stem.clone()).collect();
    let anchors: Vec<String> = items.iter().map(|i| i.anchor.clone()).collect();

    let stem_vectors = embedder.embed(&stems).await?;
    let anchor_vectors = embedder.embed(&anchors).await?;

    if stem_vectors.len() != items.len() || anchor_vectors.len() != items.len() {
        return Err(AppError::Embedding(format!(
            "expected {} embeddings, got {} stems and {} anchors",
            items.len(),
            stem_vectors.len(),
            anchor_vectors.len()
        )));
    }

    Ok(items
        .into_iter()
        .zip(stem_vectors.iter().zip(anchor_vectors.iter()))
        .map(|(item, (stem_vec, anchor_vec))| {
            let similarity = cosine_similarity(stem_vec, anchor_vec);
            let length_flag = word_count(&item.stem) > MAX_STEM_WORDS;
            StemRecord {
                facet: item.facet,
                anchor: item.anchor,
                stem_text: item.stem,
                cosine_similarity: similarity,
                drift_flag: similarity < threshold,
                length_flag,
            }
        })
        .collect())
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Embeds text as `[1, words / 10]`, so stems near the anchor's length
    /// score close to 1.0.
    #[derive(Default)]
    pub struct LengthEmbedder {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl Embedder for LengthEmbedder {
        async fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(inputs
                .iter()
                .map(|t| vec![1.0, word_count(t) as f32 / 10.0])
                .collect())
        }
    }

    /// Always returns a single vector, whatever the input size.
    pub struct ShortEmbedder;

    #[async_trait]
    impl Embedder for ShortEmbedder {
        async fn embed(&self, _inputs: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
            Ok(vec![vec![1.0, 0.0]])
        }
    }
}
