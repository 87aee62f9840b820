use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire format of the prediction request body.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub pose_features: &'a [f64],
}

/// Decoded prediction response. Only the `predictions` field is interpreted;
/// its shape is defined by the model server and passed through opaquely.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub predictions: Option<serde_json::Value>,
}

/// One entry of the predictions map when the server returns the clinical
/// screening shape: symptom name mapped to a label and a confidence in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomOutcome {
    pub prediction: String,
    pub confidence: f64,
}

/// Typed view over an opaque predictions value, for rendering. Returns None
/// when the value does not have the symptom-map shape.
pub fn as_screening_report(value: &serde_json::Value) -> Option<BTreeMap<String, SymptomOutcome>> {
    serde_json::from_value(value.clone()).ok()
}

/// Decoded `/health` body.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model: Option<String>,
}
