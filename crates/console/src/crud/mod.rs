//! Generic state behind the simple create forms and searchable lists.
//!
//! Every entity screen is one [`CreateForm`] and one [`ListView`] over the
//! entity's DTO; the per-entity parts are the two traits below.

mod entities;
mod form;
mod list;

pub use form::{AfterSubmit, CreateForm, FormOutcome, REDIRECT_DELAY};
pub use list::{DEFAULT_PAGE_SIZE, ListView};

use std::borrow::Cow;

use backoffice_core::DomainResult;

/// Columns the list search matches against. Ids and dates are rendered the
/// way the list shows them.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Case-insensitive substring match; an empty query matches everything.
    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Local checks run before a draft is sent.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

/// Rejects blank (or whitespace-only) required text.
pub(crate) fn require(value: &str, label: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(backoffice_core::DomainError::validation(format!("{label} is required")))
    } else {
        Ok(())
    }
}

pub(crate) fn require_positive(value: f64, label: &str) -> DomainResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(backoffice_core::DomainError::validation(format!(
            "{label} must be greater than 0"
        )))
    }
}
