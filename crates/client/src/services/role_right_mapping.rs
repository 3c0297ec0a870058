//! Role → rights permission matrix, submitted as one batch per role.

use serde::{Deserialize, Serialize};

use backoffice_core::{RightId, RoleId};

use crate::{ClientResult, Gateway};

const GET_FOR_ROLE: &str = "/org/role-right-mapping/role";
const SAVE: &str = "/org/role-right-mapping/save";

/// One of the ten per-right permission flags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionFlag {
    Map,
    View,
    Create,
    Update,
    Delete,
    Export,
    Print,
    Approve,
    Reject,
    Cancel,
}

impl PermissionFlag {
    pub const ALL: [PermissionFlag; 10] = [
        PermissionFlag::Map,
        PermissionFlag::View,
        PermissionFlag::Create,
        PermissionFlag::Update,
        PermissionFlag::Delete,
        PermissionFlag::Export,
        PermissionFlag::Print,
        PermissionFlag::Approve,
        PermissionFlag::Reject,
        PermissionFlag::Cancel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionFlag::Map => "map",
            PermissionFlag::View => "view",
            PermissionFlag::Create => "create",
            PermissionFlag::Update => "update",
            PermissionFlag::Delete => "delete",
            PermissionFlag::Export => "export",
            PermissionFlag::Print => "print",
            PermissionFlag::Approve => "approve",
            PermissionFlag::Reject => "reject",
            PermissionFlag::Cancel => "cancel",
        }
    }
}

/// Permissions granted to a role for one right. All flags default to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRow {
    #[serde(default)]
    pub right_id: Option<RightId>,
    #[serde(default)]
    pub map: bool,
    #[serde(default)]
    pub view: bool,
    #[serde(default)]
    pub create: bool,
    #[serde(default)]
    pub update: bool,
    #[serde(default)]
    pub delete: bool,
    #[serde(default)]
    pub export: bool,
    #[serde(default)]
    pub print: bool,
    #[serde(default)]
    pub approve: bool,
    #[serde(default)]
    pub reject: bool,
    #[serde(default)]
    pub cancel: bool,
}

impl PermissionRow {
    /// A row for `right_id` with every flag off.
    pub fn for_right(right_id: RightId) -> Self {
        Self {
            right_id: Some(right_id),
            ..Self::default()
        }
    }

    pub fn flag(&self, flag: PermissionFlag) -> bool {
        match flag {
            PermissionFlag::Map => self.map,
            PermissionFlag::View => self.view,
            PermissionFlag::Create => self.create,
            PermissionFlag::Update => self.update,
            PermissionFlag::Delete => self.delete,
            PermissionFlag::Export => self.export,
            PermissionFlag::Print => self.print,
            PermissionFlag::Approve => self.approve,
            PermissionFlag::Reject => self.reject,
            PermissionFlag::Cancel => self.cancel,
        }
    }

    pub fn set_flag(&mut self, flag: PermissionFlag, value: bool) {
        let slot = match flag {
            PermissionFlag::Map => &mut self.map,
            PermissionFlag::View => &mut self.view,
            PermissionFlag::Create => &mut self.create,
            PermissionFlag::Update => &mut self.update,
            PermissionFlag::Delete => &mut self.delete,
            PermissionFlag::Export => &mut self.export,
            PermissionFlag::Print => &mut self.print,
            PermissionFlag::Approve => &mut self.approve,
            PermissionFlag::Reject => &mut self.reject,
            PermissionFlag::Cancel => &mut self.cancel,
        };
        *slot = value;
    }

    pub fn clear_flags(&mut self) {
        *self = Self {
            right_id: self.right_id,
            ..Self::default()
        };
    }

    pub fn any_flag(&self) -> bool {
        PermissionFlag::ALL.iter().any(|f| self.flag(*f))
    }
}

/// The atomic batch: the complete permission set of one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRightMappingRequest {
    pub role_id: RoleId,
    pub rights: Vec<PermissionRow>,
}

/// Existing mapping as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleRightMapping {
    pub role_id: Option<RoleId>,
    pub rows: Vec<PermissionRow>,
}

/// The server answers either `{ roleId, rights: [...] }` or the bare rows.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MappingWire {
    Mapping {
        #[serde(rename = "roleId", default)]
        role_id: Option<RoleId>,
        #[serde(default)]
        rights: Vec<PermissionRow>,
    },
    Rows(Vec<PermissionRow>),
}

impl From<MappingWire> for RoleRightMapping {
    fn from(wire: MappingWire) -> Self {
        match wire {
            MappingWire::Mapping { role_id, rights } => Self {
                role_id,
                rows: rights,
            },
            MappingWire::Rows(rows) => Self {
                role_id: None,
                rows,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct RoleRightMappingService {
    gateway: Gateway,
}

impl RoleRightMappingService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Existing mapping of a role; empty when the server has none.
    pub async fn get_for_role(&self, role_id: RoleId) -> ClientResult<RoleRightMapping> {
        let payload = self
            .gateway
            .get(&format!("{GET_FOR_ROLE}/{role_id}"))
            .await
            .inspect_err(|err| tracing::error!(%role_id, error = %err, "failed to fetch role right mapping"))?;

        Ok(payload
            .into_object::<MappingWire>()
            .map(RoleRightMapping::from)
            .unwrap_or_default())
    }

    pub async fn save_mapping(&self, request: &RoleRightMappingRequest) -> ClientResult<()> {
        self.gateway
            .post(SAVE, request)
            .await
            .inspect_err(|err| {
                tracing::error!(role_id = %request.role_id, error = %err, "failed to save role right mapping")
            })?;
        tracing::info!(role_id = %request.role_id, rows = request.rights.len(), "role right mapping saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_serializes_every_flag_in_order() {
        let mut row = PermissionRow::for_right(RightId::new(1));
        row.set_flag(PermissionFlag::View, true);
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"rightId":1,"map":false,"view":true,"create":false,"update":false,"delete":false,"export":false,"print":false,"approve":false,"reject":false,"cancel":false}"#
        );
    }

    #[test]
    fn clear_flags_keeps_the_right() {
        let mut row = PermissionRow::for_right(RightId::new(2));
        for flag in PermissionFlag::ALL {
            row.set_flag(flag, true);
        }
        assert!(PermissionFlag::ALL.iter().all(|f| row.flag(*f)));

        row.clear_flags();
        assert_eq!(row, PermissionRow::for_right(RightId::new(2)));
        assert!(!row.any_flag());
    }

    #[test]
    fn mapping_accepts_object_and_bare_rows() {
        let from_object: MappingWire =
            serde_json::from_value(json!({"roleId": 5, "rights": [{"rightId": 7, "view": true}]})).unwrap();
        let mapping = RoleRightMapping::from(from_object);
        assert_eq!(mapping.role_id, Some(RoleId::new(5)));
        assert!(mapping.rows[0].view);
        assert!(!mapping.rows[0].create);

        let from_rows: MappingWire = serde_json::from_value(json!([{"rightId": 7}])).unwrap();
        assert_eq!(RoleRightMapping::from(from_rows).rows.len(), 1);
    }
}
