use serde::{Deserialize, Serialize};
use serde_json::Value;

// lat/long are kept as raw JSON values here because callers send them both as
// numbers and as quoted strings; coercion happens in one place, below
#[derive(Deserialize)]
pub struct SaveLocationRequest {
    pub lat: Option<Value>,
    pub long: Option<Value>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonLocation {
    pub ip: String,
    pub lat: f64,
    pub long: f64,
    pub time: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Coerce a submitted coordinate to a finite float. Accepts a JSON number or
/// a numeric string; anything else (including NaN and infinities) is rejected
/// rather than silently stored.
pub fn parse_coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|coordinate| coordinate.is_finite())
}
