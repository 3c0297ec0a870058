use serde::{Deserialize, Serialize};

use backoffice_core::{Entity, RoleId};

use crate::Right;

/// Legacy join record: `roleRights: [{ right: {...} }]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRightLink {
    #[serde(default)]
    pub right: Option<Right>,
}

/// How a role carries its rights.
///
/// The backend has shipped two shapes over time. Resolution order on read:
/// a non-empty `rights` array wins, otherwise `roleRights[].right`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoleGrants {
    Direct(Vec<Right>),
    Legacy(Vec<RoleRightLink>),
    #[default]
    Empty,
}

impl RoleGrants {
    /// Rights reachable through whichever shape is present.
    pub fn rights(&self) -> impl Iterator<Item = &Right> {
        let (direct, legacy): (&[Right], &[RoleRightLink]) = match self {
            RoleGrants::Direct(rights) => (rights, &[]),
            RoleGrants::Legacy(links) => (&[], links),
            RoleGrants::Empty => (&[], &[]),
        };
        direct
            .iter()
            .chain(legacy.iter().filter_map(|link| link.right.as_ref()))
    }
}

/// A named bundle of rights assigned to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoleWire", into = "RoleWire")]
pub struct Role {
    pub id: Option<RoleId>,
    pub name: String,
    pub description: Option<String>,
    pub grants: RoleGrants,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            grants: RoleGrants::Empty,
        }
    }

    pub fn with_id(mut self, id: RoleId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_rights(mut self, rights: Vec<Right>) -> Self {
        self.grants = RoleGrants::Direct(rights);
        self
    }

    pub fn with_legacy_rights(mut self, rights: Vec<Right>) -> Self {
        self.grants = RoleGrants::Legacy(
            rights
                .into_iter()
                .map(|right| RoleRightLink { right: Some(right) })
                .collect(),
        );
        self
    }

    pub fn rights(&self) -> impl Iterator<Item = &Right> {
        self.grants.rights()
    }
}

impl Entity for Role {
    type Id = RoleId;

    fn id(&self) -> Option<RoleId> {
        self.id
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Wire shape carrying both historical right layouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<RoleId>,
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rights: Option<Vec<Right>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role_rights: Option<Vec<RoleRightLink>>,
}

impl From<RoleWire> for Role {
    fn from(wire: RoleWire) -> Self {
        let grants = match (wire.rights, wire.role_rights) {
            (Some(rights), _) if !rights.is_empty() => RoleGrants::Direct(rights),
            (_, Some(links)) if !links.is_empty() => RoleGrants::Legacy(links),
            _ => RoleGrants::Empty,
        };
        Self {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            grants,
        }
    }
}

impl From<Role> for RoleWire {
    fn from(role: Role) -> Self {
        let (rights, role_rights) = match role.grants {
            RoleGrants::Direct(rights) => (Some(rights), None),
            RoleGrants::Legacy(links) => (None, Some(links)),
            RoleGrants::Empty => (None, None),
        };
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            rights,
            role_rights,
        }
    }
}
