use regex::Regex;
use std::sync::LazyLock;

use crate::domain::PredictionResult;

// Strips every `json` token, not only fence headers.
static FENCE_NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"json|```").unwrap());

/// Removes code-fence markup from raw model output and parses the rest as JSON.
pub fn sanitize_model_output(raw: &str) -> Result<PredictionResult, serde_json::Error> {
    let cleaned = FENCE_NOISE.replace_all(raw, "");
    let value = serde_json::from_str(cleaned.trim())?;
    Ok(PredictionResult::new(value))
}
