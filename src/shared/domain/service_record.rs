use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::shared::errors::{AppError, AppResult};

/// Keys a record must carry before it can be added to the catalogue one at a time
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "provider", "features"];

/// One premium service as described by a provider
///
/// The well-known fields keep track of *presence*: `Some(Value::Null)` means the
/// provider sent the key with a null value, `None` means the key was absent.
/// Values are kept verbatim; any other key lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub provider: Option<Value>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub features: Option<Value>,

    /// Provider-specific extras
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A key that shows up in the payload is present, even when its value is null
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ServiceRecord {
    pub fn new<F, S>(name: &str, provider: &str, features: F) -> Self
    where
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            name: Some(Value::String(name.to_string())),
            provider: Some(Value::String(provider.to_string())),
            features: Some(Value::Array(
                features
                    .into_iter()
                    .map(|f| Value::String(f.into()))
                    .collect(),
            )),
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Value::String(id.into()));
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Build a record from an arbitrary JSON value; only objects are accepted
    pub fn from_value(value: Value) -> AppResult<Self> {
        if !value.is_object() {
            return Err(AppError::SerializationError(format!(
                "Service record must be a JSON object, got: {}",
                value
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Whether the record carries `key`, whatever its value
    pub fn has_field(&self, key: &str) -> bool {
        match key {
            "id" => self.id.is_some(),
            "name" => self.name.is_some(),
            "provider" => self.provider.is_some(),
            "features" => self.features.is_some(),
            other => self.extra.contains_key(other),
        }
    }

    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.has_field(field))
            .collect()
    }

    pub fn has_required_fields(&self) -> bool {
        self.missing_required_fields().is_empty()
    }

    /// Identifier as text; numeric ids are rendered in decimal
    pub fn id_str(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn matches_id(&self, service_id: &str) -> bool {
        self.id_str().as_deref() == Some(service_id)
    }

    pub fn name_str(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    pub fn provider_str(&self) -> Option<&str> {
        self.provider.as_ref().and_then(Value::as_str)
    }

    pub fn feature_list(&self) -> Option<&Vec<Value>> {
        self.features.as_ref().and_then(Value::as_array)
    }

    /// Name suitable for log lines
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "<unnamed>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_null_fields_are_distinguished() {
        let record = ServiceRecord::from_value(json!({"name": null, "provider": "P"})).unwrap();

        assert_eq!(record.name, Some(Value::Null));
        assert!(record.has_field("name"));
        assert!(!record.has_field("features"));
        assert_eq!(record.missing_required_fields(), vec!["features"]);
    }

    #[test]
    fn test_unknown_keys_are_kept_in_extra() {
        let record = ServiceRecord::from_value(json!({
            "name": "X",
            "provider": "P",
            "features": [],
            "tier": "gold",
            "price": 12.5
        }))
        .unwrap();

        assert_eq!(record.extra.get("tier"), Some(&json!("gold")));
        assert!(record.has_field("price"));
        assert!(record.has_required_fields());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["tier"], "gold");
        assert!(back.get("id").is_none());
    }

    #[test]
    fn test_wrong_types_still_count_as_present() {
        let record =
            ServiceRecord::from_value(json!({"name": 7, "provider": [], "features": "none"}))
                .unwrap();

        assert!(record.has_required_fields());
        assert_eq!(record.name_str(), None);
        assert_eq!(record.feature_list(), None);
        assert_eq!(record.display_name(), "7");
    }

    #[test]
    fn test_numeric_ids_match_their_decimal_text() {
        let record = ServiceRecord::from_value(json!({"id": 42})).unwrap();
        assert!(record.matches_id("42"));
        assert!(!record.matches_id("4"));

        let record = ServiceRecord::new("X", "P", ["f1"]).with_id("a");
        assert!(record.matches_id("a"));
        assert_eq!(record.feature_list().map(Vec::len), Some(1));
    }

    #[test]
    fn test_non_object_values_are_rejected() {
        let err = ServiceRecord::from_value(json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
