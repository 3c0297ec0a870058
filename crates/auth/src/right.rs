use serde::{Deserialize, Serialize};

use backoffice_core::{Entity, RightId};

/// An atomic named permission grantable to a role.
///
/// Right names are opaque strings owned by the server (e.g. "Raw Material").
/// Uniqueness of `name` is assumed, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Right {
    pub id: RightId,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<i64>,
}

impl Right {
    pub fn new(id: RightId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            module_id: None,
        }
    }

    /// The name as used for matching: surrounding whitespace removed.
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}

impl Entity for Right {
    type Id = RightId;

    fn id(&self) -> Option<RightId> {
        Some(self.id)
    }
}

impl core::fmt::Display for Right {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.trimmed_name())
    }
}

/// Normalize a right name for comparison (trimmed, lower-cased).
pub fn normalize_right_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let right: Right = serde_json::from_str(r#"{"id": 3, "name": " Stock "}"#).unwrap();
        assert_eq!(right.id, RightId::new(3));
        assert_eq!(right.trimmed_name(), "Stock");
        assert_eq!(right.module_id, None);
    }

    #[test]
    fn normalization_ignores_case_and_padding() {
        assert_eq!(normalize_right_name("  Ready Item\t"), "ready item");
    }
}
