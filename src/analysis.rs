//! Response shape of the external wine analysis service.
//!
//! Only the attribute map feeds the normalizer; sources and notes are carried
//! along for display.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::profile::{keys, normalize, SensoryProfile};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub wine_name: Option<String>,
    /// Raw attribute map; older responses call it `viz` and may send `null`.
    #[serde(default, alias = "viz")]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub sources: Vec<SourceRecord>,
    #[serde(default)]
    pub notes: Vec<String>,
    /// Color determined by the service, preferred over any color in `attributes`.
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(default)]
    pub combined_summary: Option<String>,
}

impl AnalysisResponse {
    /// Parses a service response. A JSON object without an `attributes`/`viz`
    /// member is taken to be a bare attribute map.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).context("Analysis response is not valid JSON")?;
        let Value::Object(map) = value else {
            bail!("Analysis response must be a JSON object");
        };
        if map.contains_key("attributes") || map.contains_key("viz") {
            serde_json::from_value(Value::Object(map)).context("Malformed analysis response")
        } else {
            Ok(Self {
                attributes: Some(map),
                ..Self::default()
            })
        }
    }

    /// Normalizes the attribute map. `combined_summary` fills in a missing
    /// `summary`, and `hex` is passed as the explicit color.
    pub fn profile(&self) -> SensoryProfile {
        let mut raw = self.attributes.clone().unwrap_or_default();
        if let Some(summary) = &self.combined_summary {
            if !raw.contains_key(keys::SUMMARY) {
                raw.insert(keys::SUMMARY.to_string(), Value::String(summary.clone()));
            }
        }
        normalize(&raw, self.hex.as_deref())
    }
}
