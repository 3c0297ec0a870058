use thiserror::Error;

use backoffice_core::DomainError;

/// Why an editor action was refused. Every variant reads as user feedback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Please select a role")]
    NoRoleSelected,

    #[error("Please select a ready item")]
    NoReadyItemSelected,

    #[error("Add at least one row before saving")]
    NoRows,

    /// 1-based row number, as shown on screen.
    #[error("Row {0} has nothing selected")]
    IncompleteRow(usize),

    #[error("Everything available is already added")]
    NothingLeftToAdd,

    #[error("Already used in another row")]
    AlreadyUsed,

    #[error("Unknown selection {0}")]
    UnknownOption(i64),

    #[error("No row at position {0}")]
    RowOutOfRange(usize),

    #[error("Please wait for the current operation to finish")]
    Busy,

    #[error("{}", .0.message())]
    Invalid(#[from] DomainError),
}
