use serde::{Deserialize, Serialize};

use backoffice_core::{RoleId, UserId};

use crate::{CrudService, Resource, Routes};

/// A console user as managed by administrators.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Only sent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub role_ids: Vec<RoleId>,
}

entity_with_optional_id!(User, UserId);

impl Resource for User {
    const NAME: &'static str = "user";

    const ROUTES: Routes = Routes {
        list: "/org/user/all",
        by_id: "/org/user",
        save: "/org/user/save",
        delete: "/org/user/delete",
    };
}

pub type UserService = CrudService<User>;
