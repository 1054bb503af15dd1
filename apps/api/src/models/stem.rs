use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A validated stem as returned by `/generate-sample` and consumed by `/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemRecord {
    pub facet: String,
    pub anchor: String,
    #[serde(alias = "stem")]
    pub stem_text: String,
    pub cosine_similarity: f64,
    pub drift_flag: bool,
    pub length_flag: bool,
}

/// A raw stem straight out of the LLM, before embedding and flagging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub facet: String,
    pub anchor: String,
    pub stem: String,
}

/// Generation parameters. Every field has a default so the UI may send a partial body.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StemGenerationRequest {
    pub item_number_per_stem: u32,
    pub temperature: f32,
    pub max_tokens: u32,
    pub model: String,
    pub constraints: String,
    pub threshold: f64,
    pub output_filename: String,
}

impl Default for StemGenerationRequest {
    fn default() -> Self {
        Self {
            item_number_per_stem: 5,
            temperature: 0.7,
            max_tokens: 800,
            model: "gpt-4o".to_string(),
            constraints: String::new(),
            threshold: 0.75,
            output_filename: "validated_stems.csv".to_string(),
        }
    }
}

impl StemGenerationRequest {
    /// Rejects parameters outside the ranges the review UI allows.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::Validation(
                "temperature must be between 0 and 2".to_string(),
            ));
        }
        if !(100..=4000).contains(&self.max_tokens) {
            return Err(AppError::Validation(
                "max_tokens must be between 100 and 4000".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::Validation("model is required".to_string()));
        }
        if !(1..=50).contains(&self.item_number_per_stem) {
            return Err(AppError::Validation(
                "item_number_per_stem must be between 1 and 50".to_string(),
            ));
        }
        if !self.threshold.is_finite() {
            return Err(AppError::Validation(
                "threshold must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults_from_empty_body() {
        let request: StemGenerationRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.item_number_per_stem, 5);
        assert_eq!(request.max_tokens, 800);
        assert_eq!(request.model, "gpt-4o");
        assert!((request.threshold - 0.75).abs() < f64::EPSILON);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_ignores_ui_only_fields() {
        let request: StemGenerationRequest = serde_json::from_value(json!({
            "temperature": 1.2,
            "max_tokens": 1000,
            "model": "gpt-4o-mini",
            "additional_constraints": "",
            "constraints": "Default Constraints:\nNone",
            "bulk": true
        }))
        .unwrap();
        assert_eq!(request.model, "gpt-4o-mini");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_out_of_range_temperature() {
        let request = StemGenerationRequest {
            temperature: 2.5,
            ..Default::default()
        };
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_request_rejects_small_token_budget() {
        let request = StemGenerationRequest {
            max_tokens: 50,
            ..Default::default()
        };
        assert!(matches!(request.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_request_rejects_blank_model() {
        let request = StemGenerationRequest {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_stem_record_accepts_backend_field_name() {
        let record: StemRecord = serde_json::from_value(json!({
            "facet": "Curiosity",
            "anchor": "I enjoy exploring new ideas.",
            "stem": "I like discovering new ideas.",
            "cosine_similarity": 0.82,
            "drift_flag": false,
            "length_flag": false
        }))
        .unwrap();
        assert_eq!(record.stem_text, "I like discovering new ideas.");
    }

    #[test]
    fn test_stem_record_requires_similarity() {
        let result: Result<StemRecord, _> = serde_json::from_value(json!({
            "facet": "Curiosity",
            "anchor": "I enjoy exploring new ideas.",
            "stem_text": "I like discovering new ideas.",
            "drift_flag": false,
            "length_flag": false
        }));
        assert!(result.is_err());
    }
}
