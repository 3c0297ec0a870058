use serde::{Deserialize, Serialize};

use backoffice_core::OrganizationId;

use crate::{CrudService, Resource, Routes};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrganizationId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

entity_with_optional_id!(Organization, OrganizationId);

impl Resource for Organization {
    const NAME: &'static str = "organization";

    const ROUTES: Routes = Routes {
        list: "/org/organization/all",
        by_id: "/org/organization",
        save: "/org/organization/save",
        delete: "/org/organization/delete",
    };
}

pub type OrganizationService = CrudService<Organization>;
