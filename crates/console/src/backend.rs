//! Seams between the batch editors and the REST services.

use async_trait::async_trait;

use backoffice_auth::{Right, Role};
use backoffice_client::services::{
    Proposition, PropositionBatchRequest, RawMaterial, ReadyItem, RoleRightMapping,
    RoleRightMappingRequest,
};
use backoffice_client::{ApiClient, ClientResult};
use backoffice_core::{ReadyItemId, RoleId};

/// What the role → right matrix editor needs from the backend.
#[async_trait]
pub trait MappingBackend: Send + Sync {
    async fn list_roles(&self) -> ClientResult<Vec<Role>>;

    async fn list_rights(&self) -> ClientResult<Vec<Right>>;

    async fn fetch_mapping(&self, role_id: RoleId) -> ClientResult<RoleRightMapping>;

    async fn save_mapping(&self, request: &RoleRightMappingRequest) -> ClientResult<()>;
}

/// What the proposition batch editor needs from the backend.
#[async_trait]
pub trait PropositionBackend: Send + Sync {
    async fn list_ready_items(&self) -> ClientResult<Vec<ReadyItem>>;

    async fn list_raw_materials(&self) -> ClientResult<Vec<RawMaterial>>;

    async fn fetch_propositions(&self, ready_item_id: ReadyItemId) -> ClientResult<Vec<Proposition>>;

    async fn save_propositions(&self, request: &PropositionBatchRequest) -> ClientResult<()>;
}

#[async_trait]
impl MappingBackend for ApiClient {
    async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        self.roles().get_all().await
    }

    async fn list_rights(&self) -> ClientResult<Vec<Right>> {
        self.rights().get_all().await
    }

    async fn fetch_mapping(&self, role_id: RoleId) -> ClientResult<RoleRightMapping> {
        self.role_right_mapping().get_for_role(role_id).await
    }

    async fn save_mapping(&self, request: &RoleRightMappingRequest) -> ClientResult<()> {
        self.role_right_mapping().save_mapping(request).await
    }
}

#[async_trait]
impl PropositionBackend for ApiClient {
    async fn list_ready_items(&self) -> ClientResult<Vec<ReadyItem>> {
        self.ready_items().get_all().await
    }

    async fn list_raw_materials(&self) -> ClientResult<Vec<RawMaterial>> {
        self.raw_materials().get_all().await
    }

    async fn fetch_propositions(&self, ready_item_id: ReadyItemId) -> ClientResult<Vec<Proposition>> {
        self.propositions().get_by_ready_item(ready_item_id).await
    }

    async fn save_propositions(&self, request: &PropositionBatchRequest) -> ClientResult<()> {
        self.propositions().save_batch(request).await
    }
}
