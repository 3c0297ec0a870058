use serde::{Deserialize, Serialize};

use backoffice_core::{CompanyId, OrganizationId};

use crate::{ClientResult, CrudService, Resource, Routes};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CompanyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<OrganizationId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

entity_with_optional_id!(Company, CompanyId);

impl Resource for Company {
    const NAME: &'static str = "company";

    const ROUTES: Routes = Routes {
        list: "/org/company/all",
        by_id: "/org/company",
        save: "/org/company/save",
        delete: "/org/company/delete",
    };
}

pub type CompanyService = CrudService<Company>;

impl CrudService<Company> {
    pub async fn get_by_organization(&self, organization_id: OrganizationId) -> ClientResult<Vec<Company>> {
        self.list_at(&format!("/org/company/organization/{organization_id}"))
            .await
    }
}
