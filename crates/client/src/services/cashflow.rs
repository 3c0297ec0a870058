use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_core::CashflowId;

use crate::{CrudService, Resource, Routes};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashflowType {
    Inflow,
    Outflow,
}

impl CashflowType {
    pub fn as_str(self) -> &'static str {
        match self {
            CashflowType::Inflow => "INFLOW",
            CashflowType::Outflow => "OUTFLOW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cashflow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CashflowId>,
    #[serde(rename = "type")]
    pub flow_type: CashflowType,
    #[serde(default)]
    pub amount: f64,
    pub entry_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

entity_with_optional_id!(Cashflow, CashflowId);

impl Resource for Cashflow {
    const NAME: &'static str = "cashflow";

    const ROUTES: Routes = Routes::rest("/billing/api/cashflow");
}

pub type CashflowService = CrudService<Cashflow>;
