use serde::{Deserialize, Serialize};

use backoffice_core::CustomerId;

use crate::{CrudService, Resource, Routes};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
}

entity_with_optional_id!(Customer, CustomerId);

impl Resource for Customer {
    const NAME: &'static str = "customer";

    const ROUTES: Routes = Routes::rest("/api/customers");
}

pub type CustomerService = CrudService<Customer>;
