//! Navigation menu model: which sidebar sections a user may see.
//!
//! Visibility here is a UX convenience. The backend enforces the same rights
//! independently on every call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::AuthContext;

/// A single navigable entry below a section header.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MenuLink {
    pub label: &'static str,
    pub route: &'static str,
}

impl MenuLink {
    pub const fn new(label: &'static str, route: &'static str) -> Self {
        Self { label, route }
    }
}

macro_rules! links {
    ($(($label:literal, $route:expr)),* $(,)?) => {
        const { &[$(MenuLink::new($label, $route)),*] }
    };
}

macro_rules! crud_links {
    ($base:literal) => {
        links![("Create", concat!($base, "/create")), ("List", concat!($base, "/list"))]
    };
}

/// Internal identifier of a navigable section.
///
/// Distinct from the section's display label and from the right name it
/// requires.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuKey {
    Dashboard,
    Organization,
    Company,
    Role,
    Branch,
    Department,
    User,
    Customer,
    RawMaterial,
    ReadyItem,
    SalesOrder,
    PurchaseOrder,
    Production,
    MaterialConsumption,
    ProductionRecipe,
    Proposition,
    Stock,
    Payment,
    Cashflow,
    CustomerAccount,
}

impl MenuKey {
    /// Every key, in sidebar order.
    pub const ALL: [MenuKey; 20] = [
        MenuKey::Dashboard,
        MenuKey::Organization,
        MenuKey::Company,
        MenuKey::Role,
        MenuKey::Branch,
        MenuKey::Department,
        MenuKey::User,
        MenuKey::Customer,
        MenuKey::RawMaterial,
        MenuKey::ReadyItem,
        MenuKey::SalesOrder,
        MenuKey::PurchaseOrder,
        MenuKey::Production,
        MenuKey::MaterialConsumption,
        MenuKey::ProductionRecipe,
        MenuKey::Proposition,
        MenuKey::Stock,
        MenuKey::Payment,
        MenuKey::Cashflow,
        MenuKey::CustomerAccount,
    ];

    /// Right name the server uses for this section.
    pub fn default_right(self) -> &'static str {
        match self {
            MenuKey::Dashboard => "Dashboard",
            MenuKey::Organization => "Organization",
            MenuKey::Company => "Company",
            MenuKey::Role => "Role",
            MenuKey::Branch => "Branch",
            MenuKey::Department => "Department",
            MenuKey::User => "User",
            MenuKey::Customer => "Customer",
            MenuKey::RawMaterial => "Raw Material",
            MenuKey::ReadyItem => "Ready Item",
            MenuKey::SalesOrder => "Sales Order",
            MenuKey::PurchaseOrder => "Purchase Order",
            MenuKey::Production => "Production",
            MenuKey::MaterialConsumption => "Material Consumption",
            MenuKey::ProductionRecipe => "Production Recipe",
            MenuKey::Proposition => "Proposition",
            MenuKey::Stock => "Stock",
            MenuKey::Payment => "Payment",
            MenuKey::Cashflow => "Cashflow",
            MenuKey::CustomerAccount => "Customer Account",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            MenuKey::Dashboard => "Dashboard",
            MenuKey::Organization => "Organizations",
            MenuKey::Company => "Companies",
            MenuKey::Role => "Roles & Rights",
            MenuKey::Branch => "Branches",
            MenuKey::Department => "Departments",
            MenuKey::User => "Users",
            MenuKey::Customer => "Customers",
            MenuKey::RawMaterial => "Raw Materials",
            MenuKey::ReadyItem => "Ready Items",
            MenuKey::SalesOrder => "Sales Orders",
            MenuKey::PurchaseOrder => "Purchase Orders",
            MenuKey::Production => "Production",
            MenuKey::MaterialConsumption => "Material Consumption",
            MenuKey::ProductionRecipe => "Production Recipes",
            MenuKey::Proposition => "Propositions",
            MenuKey::Stock => "Stock",
            MenuKey::Payment => "Payments",
            MenuKey::Cashflow => "Cashflow",
            MenuKey::CustomerAccount => "Customer Accounts",
        }
    }

    /// Links shown when the section is expanded.
    pub fn links(self) -> &'static [MenuLink] {
        match self {
            MenuKey::Dashboard => links![("Overview", "/dashboard")],
            MenuKey::Organization => crud_links!("/organization"),
            MenuKey::Company => crud_links!("/company"),
            MenuKey::Role => links![
                ("Create Role", "/role/create"),
                ("Role List", "/role/list"),
                ("Create Right", "/right/create"),
                ("Right List", "/right/list"),
                ("Role Right Mapping", "/role-right-mapping"),
            ],
            MenuKey::Branch => crud_links!("/branch"),
            MenuKey::Department => crud_links!("/department"),
            MenuKey::User => crud_links!("/user"),
            MenuKey::Customer => crud_links!("/customer"),
            MenuKey::RawMaterial => crud_links!("/raw-material"),
            MenuKey::ReadyItem => crud_links!("/ready-item"),
            MenuKey::SalesOrder => crud_links!("/sales-order"),
            MenuKey::PurchaseOrder => crud_links!("/purchase-order"),
            MenuKey::Production => crud_links!("/production"),
            MenuKey::MaterialConsumption => crud_links!("/material-consumption"),
            MenuKey::ProductionRecipe => crud_links!("/production-recipe"),
            MenuKey::Proposition => links![
                ("Batch Entry", "/proposition/batch"),
                ("List", "/proposition/list"),
            ],
            MenuKey::Stock => links![("Stock Overview", "/stock")],
            MenuKey::Payment => crud_links!("/payment"),
            MenuKey::Cashflow => crud_links!("/cashflow"),
            MenuKey::CustomerAccount => links![("Statements", "/customer-account")],
        }
    }
}

/// Outcome of a visibility check, kept for debug logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuDecision {
    /// Shown because the user is a system administrator.
    Admin,
    /// Shown because the user holds the required right.
    Granted(String),
    /// Hidden: the required right is not held.
    MissingRight(String),
    /// Hidden: no right is mapped to the key (fail closed).
    Unmapped,
}

impl MenuDecision {
    pub fn is_visible(&self) -> bool {
        matches!(self, MenuDecision::Admin | MenuDecision::Granted(_))
    }
}

/// MenuKey → right-name table plus the visibility rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationModel {
    rights: HashMap<MenuKey, String>,
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::from_mapping(MenuKey::ALL.iter().map(|k| (*k, k.default_right().to_string())))
    }
}

impl NavigationModel {
    /// Build from an explicit (possibly partial) mapping.
    pub fn from_mapping(mapping: impl IntoIterator<Item = (MenuKey, String)>) -> Self {
        Self {
            rights: mapping.into_iter().collect(),
        }
    }

    pub fn required_right(&self, key: MenuKey) -> Option<&str> {
        self.rights.get(&key).map(String::as_str)
    }

    pub fn decide(&self, ctx: &AuthContext, key: MenuKey) -> MenuDecision {
        if ctx.is_system_admin() {
            return MenuDecision::Admin;
        }
        match self.required_right(key) {
            Some(right) if ctx.has_right(right) => MenuDecision::Granted(right.to_string()),
            Some(right) => MenuDecision::MissingRight(right.to_string()),
            None => MenuDecision::Unmapped,
        }
    }

    /// Admins see everything; everyone else needs the mapped right.
    pub fn should_show_menu(&self, ctx: &AuthContext, key: MenuKey) -> bool {
        let decision = self.decide(ctx, key);
        tracing::trace!(?key, ?decision, "menu visibility");
        decision.is_visible()
    }

    /// Visible sections in sidebar order.
    pub fn visible_sections(&self, ctx: &AuthContext) -> Vec<MenuKey> {
        MenuKey::ALL
            .into_iter()
            .filter(|key| self.should_show_menu(ctx, *key))
            .collect()
    }
}
