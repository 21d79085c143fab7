use serde_json::{Map, Value};
use wine_colours::profile::{normalize, Dimension, SensoryProfile};

/// Turns a `json!` object literal into a raw attribute map.
pub fn raw(value: Value) -> Map<String, Value> {
    value
        .as_object()
        .cloned()
        .expect("fixture must be a JSON object")
}

pub fn normalize_json(value: Value) -> SensoryProfile {
    normalize(&raw(value), None)
}

/// Every scalar dimension set to `value`, starting from the empty-input profile.
pub fn uniform_profile(value: f64) -> SensoryProfile {
    Dimension::ALL
        .iter()
        .fold(SensoryProfile::default(), |profile, &dimension| {
            profile.with(dimension, value)
        })
}
