use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_core::{ProductionId, ReadyItemId};

use crate::{CrudService, Resource, Routes};

/// A production run of one ready item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Production {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductionId>,
    pub ready_item_id: ReadyItemId,
    #[serde(default)]
    pub quantity: f64,
    pub production_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

entity_with_optional_id!(Production, ProductionId);

impl Resource for Production {
    const NAME: &'static str = "production";

    const ROUTES: Routes = Routes::rest("/billing/api/productions");
}

pub type ProductionService = CrudService<Production>;
