mod analysis_service;
mod prompt_builder;
mod response_sanitizer;

pub use analysis_service::{AnalysisError, AnalysisService, ErrorKind};
pub use prompt_builder::build_dropout_prompt;
pub use response_sanitizer::sanitize_model_output;
