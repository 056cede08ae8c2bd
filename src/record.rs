//! Inspection record type.
//!
//! Records arrive from an externally produced JSON file whose fields are not
//! validated one by one. Every field is optional, and a field holding an
//! unexpected JSON type decodes as absent instead of failing the document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One inspection entry for a single establishment.
///
/// Records have no identity of their own; they are positional within the
/// loaded dataset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InspectionRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    /// Free-form category such as "Pass", "Fail" or "Unknown".
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_inspection_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_violations")]
    pub violations: Option<Vec<String>>,
}

impl InspectionRecord {
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn address_or_empty(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }

    pub fn city_or_empty(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }

    pub fn status_or_empty(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// Score used for ordering; a missing score sorts as zero.
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    /// Violations, empty when the field is absent.
    pub fn violations(&self) -> &[String] {
        self.violations.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
impl InspectionRecord {
    /// Create a record with only a name set.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }
}

/// Stringify scalars, treat everything else as absent.
fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let score = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(score.filter(|s| s.is_finite()))
}

fn lenient_violations<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items.into_iter().filter_map(value_to_string).collect(),
        )),
        Value::String(s) => Ok(Some(vec![s])),
        _ => Ok(None),
    }
}
