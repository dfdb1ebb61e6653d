use serde::Serialize;
use serde_json::Value;

/// Parsed model output. The shape is not enforced; unknown or missing
/// fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionResult(Value);

impl PredictionResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn at_risk_count(&self) -> Option<usize> {
        self.0
            .get("at_risk_students")
            .and_then(Value::as_array)
            .map(Vec::len)
    }

    pub fn success_probability(&self) -> Option<f64> {
        self.0.get("success_probability").and_then(Value::as_f64)
    }
}
