use serde::{Deserialize, Serialize};

use backoffice_core::RawMaterialId;

use crate::{CrudService, Resource, Routes};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawMaterialId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

entity_with_optional_id!(RawMaterial, RawMaterialId);

impl Resource for RawMaterial {
    const NAME: &'static str = "raw_material";

    const ROUTES: Routes = Routes::rest("/api/raw-materials");
}

pub type RawMaterialService = CrudService<RawMaterial>;
