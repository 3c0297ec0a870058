//! Propositions: bill-of-materials percentages of a ready item.

use serde::{Deserialize, Serialize};

use backoffice_core::{PropositionId, RawMaterialId, ReadyItemId};

use crate::{ClientResult, CrudService, Resource, Routes};

const BY_READY_ITEM: &str = "/billing/api/propositions/ready-item";
const BATCH: &str = "/billing/api/propositions/batch";

/// Share of one raw material in a ready item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropositionId>,
    pub ready_item_id: ReadyItemId,
    pub raw_material_id: RawMaterialId,
    #[serde(default)]
    pub percentage: f64,
}

entity_with_optional_id!(Proposition, PropositionId);

impl Resource for Proposition {
    const NAME: &'static str = "proposition";

    const ROUTES: Routes = Routes::rest("/billing/api/propositions");
}

/// One line of a batch entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropositionLine {
    pub raw_material_id: RawMaterialId,
    pub percentage: f64,
}

/// Complete composition of one ready item, replaced atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropositionBatchRequest {
    pub ready_item_id: ReadyItemId,
    pub propositions: Vec<PropositionLine>,
}

pub type PropositionService = CrudService<Proposition>;

impl CrudService<Proposition> {
    pub async fn get_by_ready_item(&self, ready_item_id: ReadyItemId) -> ClientResult<Vec<Proposition>> {
        self.list_at(&format!("{BY_READY_ITEM}/{ready_item_id}")).await
    }

    pub async fn save_batch(&self, request: &PropositionBatchRequest) -> ClientResult<()> {
        self.gateway()
            .post(BATCH, request)
            .await
            .inspect_err(|err| {
                tracing::error!(ready_item_id = %request.ready_item_id, error = %err, "failed to save propositions")
            })?;
        tracing::info!(
            ready_item_id = %request.ready_item_id,
            lines = request.propositions.len(),
            "propositions saved"
        );
        Ok(())
    }
}
