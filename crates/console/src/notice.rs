//! Dismissible success / error banner.

use serde::Serialize;

use backoffice_client::ClientError;
use backoffice_core::DomainError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<&ClientError> for Notice {
    fn from(err: &ClientError) -> Self {
        Notice::error(err.user_message())
    }
}

impl From<&DomainError> for Notice {
    fn from(err: &DomainError) -> Self {
        Notice::error(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_use_the_best_available_message() {
        let err = ClientError::Status {
            status: 400,
            message: Some("Right is mandatory".to_string()),
        };
        assert_eq!(Notice::from(&err), Notice::error("Right is mandatory"));
    }

    #[test]
    fn domain_errors_drop_the_prefix() {
        let notice = Notice::from(&DomainError::validation("Name is required"));
        assert!(notice.is_error());
        assert_eq!(notice.message, "Name is required");
    }
}
