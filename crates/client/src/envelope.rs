//! Response envelope normalization.
//!
//! The backend usually answers `{ "data": ..., "message": ..., "status": ... }`
//! but some endpoints return the bare payload. The gateway classifies every
//! body once and hands services a single [`Payload`] shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status reported inside the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvelopeStatus {
    Success,
    Failed,
}

impl EnvelopeStatus {
    fn parse(value: &Value) -> Option<Self> {
        let raw = value.as_str()?.trim();
        if raw.eq_ignore_ascii_case("SUCCESS") {
            Some(EnvelopeStatus::Success)
        } else if raw.eq_ignore_ascii_case("FAILED") {
            Some(EnvelopeStatus::Failed)
        } else {
            None
        }
    }
}

/// A response body, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{ data, message, status }`
    Wrapped {
        data: Value,
        message: Option<String>,
        status: Option<EnvelopeStatus>,
    },
    /// Anything else: the body is the payload.
    Bare(Value),
}

/// Keys a body may carry without carrying an entity.
const ENVELOPE_ONLY_KEYS: [&str; 2] = ["status", "message"];

impl Envelope {
    /// An object carrying `data` is an envelope, as is a bare
    /// `{ status, message }` acknowledgement. Any other object is the payload
    /// itself, even when it has a `status` field of its own.
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Object(mut map)
                if map.contains_key("data")
                    || (map.contains_key("status")
                        && map.keys().all(|k| ENVELOPE_ONLY_KEYS.contains(&k.as_str()))) =>
            {
                let data = map.remove("data").unwrap_or(Value::Null);
                Envelope::Wrapped {
                    data,
                    message: message_of(&map),
                    status: map.get("status").and_then(EnvelopeStatus::parse),
                }
            }
            other => Envelope::Bare(other),
        }
    }

    pub fn normalize(self) -> Payload {
        match self {
            Envelope::Wrapped {
                data,
                message,
                status,
            } => Payload {
                data,
                message,
                status,
            },
            Envelope::Bare(data) => {
                let (message, status) = match &data {
                    Value::Object(map) => (
                        message_of(map),
                        map.get("status").and_then(EnvelopeStatus::parse),
                    ),
                    _ => (None, None),
                };
                Payload {
                    data,
                    message,
                    status,
                }
            }
        }
    }
}

fn message_of(map: &serde_json::Map<String, Value>) -> Option<String> {
    map.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// The single shape services consume.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payload {
    pub data: Value,
    pub message: Option<String>,
    pub status: Option<EnvelopeStatus>,
}

impl Payload {
    pub fn from_body(body: Value) -> Self {
        Envelope::classify(body).normalize()
    }

    /// Body that was not JSON: keep any text as the message.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        Self {
            data: Value::Null,
            message: (!text.is_empty()).then(|| text.to_string()),
            status: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == Some(EnvelopeStatus::Failed)
    }

    /// Decode a collection. Never fails: anything but an array is empty, and
    /// elements that do not decode are skipped.
    pub fn into_list<T: DeserializeOwned>(self) -> Vec<T> {
        self.warn_if_failed();
        match self.data {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match serde_json::from_value(item) {
                    Ok(decoded) => Some(decoded),
                    Err(err) => {
                        tracing::warn!(error = %err, "skipping undecodable list element");
                        None
                    }
                })
                .collect(),
            Value::Null => Vec::new(),
            other => {
                tracing::warn!(kind = json_kind(&other), "expected a list payload; using an empty list");
                Vec::new()
            }
        }
    }

    /// Decode a single object; absent or undecodable data is `None`.
    pub fn into_object<T: DeserializeOwned>(self) -> Option<T> {
        self.warn_if_failed();
        if self.data.is_null() {
            return None;
        }
        serde_json::from_value(self.data)
            .inspect_err(|err| tracing::warn!(error = %err, "undecodable object payload"))
            .ok()
    }

    fn warn_if_failed(&self) {
        if self.is_failed() {
            tracing::warn!(
                server_message = self.message.as_deref().unwrap_or_default(),
                "server reported FAILED status on a successful response"
            );
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn classifies_envelope_and_bare_bodies() {
        let wrapped = Envelope::classify(json!({"data": [1], "message": "ok", "status": "SUCCESS"}));
        assert_eq!(
            wrapped,
            Envelope::Wrapped {
                data: json!([1]),
                message: Some("ok".to_string()),
                status: Some(EnvelopeStatus::Success),
            }
        );

        assert_eq!(Envelope::classify(json!([1, 2])), Envelope::Bare(json!([1, 2])));
        assert_eq!(
            Envelope::classify(json!({"id": 1})),
            Envelope::Bare(json!({"id": 1}))
        );
    }

    #[test]
    fn failed_status_with_null_data_is_an_empty_list() {
        let payload = Payload::from_body(json!({"status": "FAILED", "data": null, "message": "boom"}));
        assert!(payload.is_failed());
        assert_eq!(payload.message.as_deref(), Some("boom"));
        assert!(payload.into_list::<Item>().is_empty());
    }

    #[test]
    fn bare_array_decodes_and_skips_bad_elements() {
        let payload = Payload::from_body(json!([{"id": 1}, {"oops": true}, {"id": 3}]));
        assert_eq!(payload.into_list::<Item>(), vec![Item { id: 1 }, Item { id: 3 }]);
    }

    #[test]
    fn object_where_list_expected_is_empty() {
        let payload = Payload::from_body(json!({"data": {"id": 1}}));
        assert!(payload.into_list::<Item>().is_empty());
    }

    #[test]
    fn into_object_handles_bare_wrapped_and_missing() {
        assert_eq!(
            Payload::from_body(json!({"id": 4})).into_object::<Item>(),
            Some(Item { id: 4 })
        );
        assert_eq!(
            Payload::from_body(json!({"data": {"id": 5}, "status": "success"})).into_object::<Item>(),
            Some(Item { id: 5 })
        );
        assert_eq!(Payload::from_body(json!({"data": null})).into_object::<Item>(), None);
        assert_eq!(Payload::from_body(json!({"data": "x"})).into_object::<Item>(), None);
    }

    #[test]
    fn entity_with_its_own_status_field_is_kept_whole() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Product {
            id: i64,
            name: String,
            status: String,
        }

        let body = json!({"id": 4, "name": "Bread", "unit": "loaf", "status": "ACTIVE"});
        assert_eq!(Envelope::classify(body.clone()), Envelope::Bare(body.clone()));

        let payload = Payload::from_body(body);
        assert_eq!(payload.status, None);
        assert_eq!(
            payload.into_object::<Product>(),
            Some(Product {
                id: 4,
                name: "Bread".to_string(),
                status: "ACTIVE".to_string(),
            })
        );
    }

    #[test]
    fn status_only_acknowledgement_carries_no_entity() {
        let payload = Payload::from_body(json!({"status": "FAILED", "message": "boom"}));
        assert!(payload.is_failed());
        assert_eq!(payload.message.as_deref(), Some("boom"));
        assert_eq!(payload.into_object::<Item>(), None);
    }

    #[test]
    fn plain_text_body_becomes_message() {
        let payload = Payload::from_text(" Saved successfully \n");
        assert_eq!(payload.message.as_deref(), Some("Saved successfully"));
        assert_eq!(payload.data, Value::Null);
    }
}
