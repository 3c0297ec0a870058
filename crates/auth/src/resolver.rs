use std::collections::{BTreeSet, HashSet};

use crate::right::normalize_right_name;
use crate::{SessionError, SessionUser};

/// Role-name fragment that marks a system administrator.
pub const SYSTEM_ADMIN_MARKER: &str = "system_admin";

/// True iff any role name contains `system_admin`, ignoring case.
pub fn is_system_admin(user: &SessionUser) -> bool {
    user.roles
        .iter()
        .any(|role| role.name.to_lowercase().contains(SYSTEM_ADMIN_MARKER))
}

/// Flatten every right granted across the user's roles.
///
/// Names are trimmed, blank names dropped, exact duplicates removed. Case is
/// preserved; matching against the set is case-insensitive (see
/// [`AuthContext::has_right`]).
pub fn extract_rights(user: &SessionUser) -> BTreeSet<String> {
    user.roles
        .iter()
        .flat_map(|role| role.rights())
        .map(|right| right.trimmed_name())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Authorization facts derived once from the cached session.
///
/// - No IO
/// - No panics
/// - Never fails: an absent or unreadable session is an anonymous context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    system_admin: bool,
    rights: BTreeSet<String>,
    normalized: HashSet<String>,
}

impl AuthContext {
    /// No rights, not an administrator.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_user(user: &SessionUser) -> Self {
        let rights = extract_rights(user);
        let normalized = rights.iter().map(|r| normalize_right_name(r)).collect();
        Self {
            system_admin: is_system_admin(user),
            rights,
            normalized,
        }
    }

    /// Build from the raw persisted profile.
    pub fn from_session_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            tracing::debug!("no cached session; treating user as anonymous");
            return Self::anonymous();
        };

        match SessionUser::from_json(raw) {
            Ok(user) => Self::from_user(&user),
            Err(SessionError::Missing) => {
                tracing::debug!("cached session is empty; treating user as anonymous");
                Self::anonymous()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read cached session; treating user as anonymous");
                Self::anonymous()
            }
        }
    }

    pub fn is_system_admin(&self) -> bool {
        self.system_admin
    }

    /// Granted right names (trimmed, case preserved).
    pub fn rights(&self) -> &BTreeSet<String> {
        &self.rights
    }

    /// Case- and whitespace-insensitive membership check.
    pub fn has_right(&self, name: &str) -> bool {
        let wanted = normalize_right_name(name);
        !wanted.is_empty() && self.normalized.contains(&wanted)
    }
}
