use serde::{Deserialize, Serialize};

use backoffice_core::ReadyItemId;

use crate::{CrudService, Resource, Routes};

/// A finished product built from raw materials.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReadyItemId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

entity_with_optional_id!(ReadyItem, ReadyItemId);

impl Resource for ReadyItem {
    const NAME: &'static str = "ready_item";

    const ROUTES: Routes = Routes::rest("/api/ready-items");
}

pub type ReadyItemService = CrudService<ReadyItem>;
