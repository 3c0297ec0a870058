use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_core::{CustomerId, PaymentId};

use crate::{ClientResult, CrudService, Resource, Routes};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMode {
    #[default]
    Cash,
    Bank,
    Upi,
    Cheque,
}

impl PaymentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMode::Cash => "CASH",
            PaymentMode::Bank => "BANK",
            PaymentMode::Upi => "UPI",
            PaymentMode::Cheque => "CHEQUE",
        }
    }
}

/// Money received from a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PaymentId>,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub amount: f64,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub mode: PaymentMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

entity_with_optional_id!(Payment, PaymentId);

impl Resource for Payment {
    const NAME: &'static str = "payment";

    const ROUTES: Routes = Routes::rest("/billing/api/payments");
}

pub type PaymentService = CrudService<Payment>;

impl CrudService<Payment> {
    pub async fn get_by_customer(&self, customer_id: CustomerId) -> ClientResult<Vec<Payment>> {
        self.list_at(&format!("/billing/api/payments/customer/{customer_id}"))
            .await
    }
}
