// Prompt text for stem generation.

use crate::models::stem::StemGenerationRequest;

pub const GENERATION_SYSTEM: &str =
    "You are a helpful assistant that writes CEFR-B1 questionnaire items.";

/// Constraints every generated stem must satisfy, one per line.
pub const BASE_CONSTRAINTS: &str = "\
- Be written in the first person
- Be present-tense, affirmative (no negation)
- Be ≤15 words
- Use neutral, CEFR-B1 language
- Vary in context or wording but keep the core meaning
- Do not number each stem. Delimit only by newlines";

/// Generation prompt template. Replace: {count}, {anchor}, {constraints}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Generate {count} questionnaire stems that express the same meaning as:
"{anchor}"
Each stem must:
{constraints}
Output each stem as a separate line."#;

/// Base constraints, followed by caller-supplied ones on a new line when present.
pub fn build_constraints(additional: &str) -> String {
    if additional.trim().is_empty() {
        BASE_CONSTRAINTS.to_string()
    } else {
        format!("{BASE_CONSTRAINTS}\n{additional}")
    }
}

pub fn build_prompt(anchor: &str, request: &StemGenerationRequest) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{count}", &request.item_number_per_stem.to_string())
        .replace("{anchor}", anchor)
        .replace("{constraints}", &build_constraints(&request.constraints))
}
