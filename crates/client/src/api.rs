//! Facade handing out one service per entity over a shared gateway.

use std::sync::Arc;

use backoffice_auth::AuthContext;

use crate::services::{
    CashflowService, CompanyService, CustomerService, OrganizationService, PaymentService,
    ProductionService, PropositionService, RawMaterialService, ReadyItemService, RightService,
    RoleRightMappingService, RoleService, StockService, UserService,
};
use crate::{ClientConfig, ClientResult, CrudService, FileSessionStore, Gateway, MemorySessionStore, SessionStore};

#[derive(Debug, Clone)]
pub struct ApiClient {
    gateway: Gateway,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        Ok(Self::from_gateway(Gateway::new(config, session)?))
    }

    /// Client whose session lives where the configuration says: a file when
    /// `session_path` is set, memory otherwise.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let session: Arc<dyn SessionStore> = match &config.session_path {
            Some(path) => Arc::new(FileSessionStore::new(path)),
            None => Arc::new(MemorySessionStore::new()),
        };
        Self::new(config, session)
    }

    pub fn from_gateway(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Authorization facts of the cached user. Never fails.
    pub fn auth_context(&self) -> AuthContext {
        self.gateway.session().auth_context()
    }

    pub fn organizations(&self) -> OrganizationService {
        CrudService::new(self.gateway.clone())
    }

    pub fn companies(&self) -> CompanyService {
        CrudService::new(self.gateway.clone())
    }

    pub fn roles(&self) -> RoleService {
        CrudService::new(self.gateway.clone())
    }

    pub fn rights(&self) -> RightService {
        CrudService::new(self.gateway.clone())
    }

    pub fn role_right_mapping(&self) -> RoleRightMappingService {
        RoleRightMappingService::new(self.gateway.clone())
    }

    pub fn users(&self) -> UserService {
        CrudService::new(self.gateway.clone())
    }

    pub fn customers(&self) -> CustomerService {
        CrudService::new(self.gateway.clone())
    }

    pub fn raw_materials(&self) -> RawMaterialService {
        CrudService::new(self.gateway.clone())
    }

    pub fn ready_items(&self) -> ReadyItemService {
        CrudService::new(self.gateway.clone())
    }

    pub fn productions(&self) -> ProductionService {
        CrudService::new(self.gateway.clone())
    }

    pub fn propositions(&self) -> PropositionService {
        CrudService::new(self.gateway.clone())
    }

    pub fn stock(&self) -> StockService {
        CrudService::new(self.gateway.clone())
    }

    pub fn payments(&self) -> PaymentService {
        CrudService::new(self.gateway.clone())
    }

    pub fn cashflow(&self) -> CashflowService {
        CrudService::new(self.gateway.clone())
    }
}
