//! Domain service modules, one per entity.

/// Implements [`Entity`](backoffice_core::Entity) for a DTO with an optional
/// `id` field.
macro_rules! entity_with_optional_id {
    ($t:ty, $id:ty) => {
        impl backoffice_core::Entity for $t {
            type Id = $id;

            fn id(&self) -> Option<$id> {
                self.id
            }
        }
    };
}

pub mod cashflow;
pub mod companies;
pub mod customers;
pub mod organizations;
pub mod payments;
pub mod productions;
pub mod propositions;
pub mod raw_materials;
pub mod ready_items;
pub mod rights;
pub mod role_right_mapping;
pub mod roles;
pub mod stock;
pub mod users;

pub use cashflow::{Cashflow, CashflowService, CashflowType};
pub use companies::{Company, CompanyService};
pub use customers::{Customer, CustomerService};
pub use organizations::{Organization, OrganizationService};
pub use payments::{Payment, PaymentMode, PaymentService};
pub use productions::{Production, ProductionService};
pub use propositions::{Proposition, PropositionBatchRequest, PropositionLine, PropositionService};
pub use raw_materials::{RawMaterial, RawMaterialService};
pub use ready_items::{ReadyItem, ReadyItemService};
pub use rights::RightService;
pub use role_right_mapping::{
    PermissionFlag, PermissionRow, RoleRightMapping, RoleRightMappingRequest, RoleRightMappingService,
};
pub use roles::RoleService;
pub use stock::{StockEntry, StockItemType, StockService};
pub use users::{User, UserService};
