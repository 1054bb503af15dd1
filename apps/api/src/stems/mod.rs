// Stem generation backend: facet catalogue, prompting, LLM completion,
// embedding validation, CSV export.
// All provider calls go through llm_client.

pub mod export;
pub mod facets;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod validator;
