use serde::{Deserialize, Serialize};

use backoffice_core::StockId;

use crate::{ClientResult, CrudService, Resource, Routes};

/// What a stock entry counts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockItemType {
    RawMaterial,
    ReadyItem,
}

impl StockItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            StockItemType::RawMaterial => "RAW_MATERIAL",
            StockItemType::ReadyItem => "READY_ITEM",
        }
    }
}

/// On-hand quantity of one raw material or ready item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StockId>,
    pub item_type: StockItemType,
    pub item_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

entity_with_optional_id!(StockEntry, StockId);

impl Resource for StockEntry {
    const NAME: &'static str = "stock";

    const ROUTES: Routes = Routes::rest("/billing/api/stock");
}

pub type StockService = CrudService<StockEntry>;

impl CrudService<StockEntry> {
    /// Stock entries of a single item.
    pub async fn get_by_item(&self, item_type: StockItemType, item_id: i64) -> ClientResult<Vec<StockEntry>> {
        self.list_with_query(
            StockEntry::ROUTES.list,
            &[
                ("itemType", item_type.as_str().to_string()),
                ("itemId", item_id.to_string()),
            ],
        )
        .await
    }
}
