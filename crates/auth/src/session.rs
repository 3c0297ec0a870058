use serde::{Deserialize, Serialize};
use thiserror::Error;

use backoffice_core::UserId;

use crate::Role;

/// Cached user profile written at login and read at every mount.
///
/// The console never owns this object; it only reads what the login flow
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no session present")]
    Missing,

    #[error("malformed session: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SessionUser {
    pub fn new(id: UserId, roles: Vec<Role>) -> Self {
        Self {
            id: Some(id),
            username: None,
            roles,
        }
    }

    /// Parse the persisted profile.
    ///
    /// A JSON `null` (what a cleared store may hold) counts as missing.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if value.is_null() {
            return Err(SessionError::Missing);
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_profile_with_roles() {
        let user = SessionUser::from_json(
            r#"{"id": 4, "username": "asha", "roles": [{"id": 1, "name": "Clerk"}]}"#,
        )
        .unwrap();
        assert_eq!(user.id, Some(UserId::new(4)));
        assert_eq!(user.roles.len(), 1);
    }

    #[test]
    fn null_profile_is_missing() {
        assert!(matches!(
            SessionUser::from_json("null"),
            Err(SessionError::Missing)
        ));
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            SessionUser::from_json("{not json"),
            Err(SessionError::Malformed(_))
        ));
    }
}
