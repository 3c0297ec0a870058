//! Strongly-typed identifiers used across the domain.
//!
//! The backend keys every entity with a numeric id; these newtypes keep a
//! role id from being passed where a right id is expected.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(i64);

        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

numeric_id!(
    /// Identifier of a role.
    RoleId, "RoleId"
);
numeric_id!(
    /// Identifier of a right (atomic permission).
    RightId, "RightId"
);
numeric_id!(UserId, "UserId");
numeric_id!(OrganizationId, "OrganizationId");
numeric_id!(CompanyId, "CompanyId");
numeric_id!(CustomerId, "CustomerId");
numeric_id!(RawMaterialId, "RawMaterialId");
numeric_id!(ReadyItemId, "ReadyItemId");
numeric_id!(ProductionId, "ProductionId");
numeric_id!(PropositionId, "PropositionId");
numeric_id!(StockId, "StockId");
numeric_id!(PaymentId, "PaymentId");
numeric_id!(CashflowId, "CashflowId");
