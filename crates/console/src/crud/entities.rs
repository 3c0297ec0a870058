//! Search columns and local validation of every entity screen.

use std::borrow::Cow;
use std::fmt::Display;

use backoffice_auth::{Right, Role};
use backoffice_client::services::{
    Cashflow, Company, Customer, Organization, Payment, Production, Proposition, RawMaterial,
    ReadyItem, StockEntry, User,
};
use backoffice_core::{DomainError, DomainResult};

use super::{Searchable, Validate, require, require_positive};

fn present<'a, const N: usize>(fields: [Option<&'a str>; N]) -> Vec<Cow<'a, str>> {
    fields.into_iter().flatten().map(Cow::Borrowed).collect()
}

fn shown(value: impl Display) -> Cow<'static, str> {
    Cow::Owned(value.to_string())
}

fn check_email(email: Option<&str>) -> DomainResult<()> {
    match email.map(str::trim) {
        Some(email) if !email.is_empty() && !email.contains('@') => {
            Err(DomainError::validation("Email is not valid"))
        }
        _ => Ok(()),
    }
}

fn check_price(price: Option<f64>) -> DomainResult<()> {
    match price {
        Some(price) if price < 0.0 => Err(DomainError::validation("Price cannot be negative")),
        _ => Ok(()),
    }
}

impl Searchable for Organization {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        present([
            Some(self.name.as_str()),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.address.as_deref(),
        ])
    }
}

impl Validate for Organization {
    fn validate(&self) -> DomainResult<()> {
        require(&self.name, "Name")?;
        check_email(self.email.as_deref())
    }
}

impl Searchable for Company {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        present([
            Some(self.name.as_str()),
            self.gst_number.as_deref(),
            self.address.as_deref(),
        ])
    }
}

impl Validate for Company {
    fn validate(&self) -> DomainResult<()> {
        require(&self.name, "Name")?;
        if self.organization_id.is_none() {
            return Err(DomainError::validation("Organization is required"));
        }
        Ok(())
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        present([
            Some(self.username.as_str()),
            self.full_name.as_deref(),
            self.email.as_deref(),
        ])
    }
}

impl Validate for User {
    fn validate(&self) -> DomainResult<()> {
        require(&self.username, "Username")?;
        if self.id.is_none() {
            require(self.password.as_deref().unwrap_or_default(), "Password")?;
        }
        check_email(self.email.as_deref())
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        present([
            Some(self.name.as_str()),
            self.phone.as_deref(),
            self.email.as_deref(),
            self.gst_number.as_deref(),
        ])
    }
}

impl Validate for Customer {
    fn validate(&self) -> DomainResult<()> {
        require(&self.name, "Name")?;
        check_email(self.email.as_deref())
    }
}

impl Searchable for RawMaterial {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        present([Some(self.name.as_str()), Some(self.unit.as_str())])
    }
}

impl Validate for RawMaterial {
    fn validate(&self) -> DomainResult<()> {
        require(&self.name, "Name")?;
        require(&self.unit, "Unit")?;
        check_price(self.price)
    }
}

impl Searchable for ReadyItem {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        present([Some(self.name.as_str()), Some(self.unit.as_str())])
    }
}

impl Validate for ReadyItem {
    fn validate(&self) -> DomainResult<()> {
        require(&self.name, "Name")?;
        require(&self.unit, "Unit")?;
        check_price(self.price)
    }
}

impl Searchable for Production {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![shown(self.ready_item_id), shown(self.production_date)];
        fields.extend(present([self.remarks.as_deref()]));
        fields
    }
}

impl Validate for Production {
    fn validate(&self) -> DomainResult<()> {
        require_positive(self.quantity, "Quantity")
    }
}

impl Searchable for Proposition {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![shown(self.ready_item_id), shown(self.raw_material_id)]
    }
}

impl Validate for Proposition {
    fn validate(&self) -> DomainResult<()> {
        if self.percentage > 0.0 && self.percentage <= 100.0 {
            Ok(())
        } else {
            Err(DomainError::validation(
                "Percentage must be greater than 0 and at most 100",
            ))
        }
    }
}

impl Searchable for StockEntry {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![shown(self.item_id)];
        fields.extend(present([self.item_name.as_deref(), self.unit.as_deref()]));
        fields
    }
}

impl Validate for StockEntry {
    fn validate(&self) -> DomainResult<()> {
        if self.item_id <= 0 {
            return Err(DomainError::validation("Item is required"));
        }
        if self.quantity < 0.0 {
            return Err(DomainError::validation("Quantity cannot be negative"));
        }
        Ok(())
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![shown(self.customer_id), shown(self.payment_date)];
        fields.extend(present([self.reference.as_deref()]));
        fields
    }
}

impl Validate for Payment {
    fn validate(&self) -> DomainResult<()> {
        require_positive(self.amount, "Amount")
    }
}

impl Searchable for Cashflow {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![shown(self.entry_date)];
        fields.extend(present([self.description.as_deref()]));
        fields
    }
}

impl Validate for Cashflow {
    fn validate(&self) -> DomainResult<()> {
        require_positive(self.amount, "Amount")
    }
}

impl Searchable for Role {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        present([Some(self.name.as_str()), self.description.as_deref()])
    }
}

impl Validate for Role {
    fn validate(&self) -> DomainResult<()> {
        require(&self.name, "Role name")
    }
}

impl Searchable for Right {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        present([Some(self.name.as_str()), self.description.as_deref()])
    }
}

impl Validate for Right {
    fn validate(&self) -> DomainResult<()> {
        require(&self.name, "Right name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::{CustomerId, OrganizationId, RawMaterialId, ReadyItemId};
    use chrono::NaiveDate;

    #[test]
    fn customer_search_covers_contact_fields() {
        let customer = Customer {
            name: "Acme".to_string(),
            phone: Some("98450 12345".to_string()),
            ..Customer::default()
        };
        assert!(customer.matches("ACME"));
        assert!(customer.matches("12345"));
        assert!(!customer.matches("globex"));
    }

    #[test]
    fn company_needs_an_organization() {
        let mut company = Company {
            name: "Acme Steel".to_string(),
            ..Company::default()
        };
        assert_eq!(
            company.validate(),
            Err(DomainError::validation("Organization is required"))
        );
        company.organization_id = Some(OrganizationId::new(1));
        assert_eq!(company.validate(), Ok(()));
    }

    #[test]
    fn new_user_needs_a_password() {
        let mut user = User {
            username: "asha".to_string(),
            ..User::default()
        };
        assert!(user.validate().is_err());
        user.password = Some("secret".to_string());
        assert!(user.validate().is_ok());
    }

    #[test]
    fn bad_email_is_rejected() {
        let org = Organization {
            name: "Acme".to_string(),
            email: Some("acme.example.com".to_string()),
            ..Organization::default()
        };
        assert_eq!(org.validate(), Err(DomainError::validation("Email is not valid")));
    }

    #[test]
    fn payments_need_a_positive_amount() {
        let payment = Payment {
            id: None,
            customer_id: CustomerId::new(4),
            amount: 0.0,
            payment_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            mode: Default::default(),
            reference: None,
        };
        assert_eq!(
            payment.validate(),
            Err(DomainError::validation("Amount must be greater than 0"))
        );
    }

    #[test]
    fn propositions_search_by_item_and_material() {
        let proposition = Proposition {
            id: None,
            ready_item_id: ReadyItemId::new(12),
            raw_material_id: RawMaterialId::new(7),
            percentage: 40.0,
        };
        assert!(proposition.matches("12"));
        assert!(proposition.matches("7"));
        assert!(!proposition.matches("99"));
    }

    #[test]
    fn payments_search_by_customer_and_date() {
        let payment = Payment {
            id: None,
            customer_id: CustomerId::new(31),
            amount: 500.0,
            payment_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            mode: Default::default(),
            reference: None,
        };
        assert!(payment.matches("31"));
        assert!(payment.matches("2024-04"));
        assert!(!payment.matches("cheque 88"));
    }

    #[test]
    fn roles_search_by_name() {
        let role = Role::new("Accountant");
        assert!(role.matches("count"));
        assert_eq!(Role::new(" ").validate().unwrap_err().message(), "Role name is required");
    }
}
