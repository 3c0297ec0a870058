//! `backoffice-console`
//!
//! **Responsibility:** UI-facing state of the administrative console.
//!
//! This crate provides:
//! - The role → right permission matrix editor
//! - The proposition (bill-of-materials) batch editor
//! - Generic create-form and searchable, paginated list state
//! - Sidebar open/closed state joined with menu visibility
//! - Dismissible notices
//!
//! Rendering is left to whatever shell binds to these types. Every failure
//! ends up as a [`Notice`]; nothing here is fatal.

pub mod backend;
pub mod crud;
pub mod error;
pub mod mapping_editor;
pub mod notice;
pub mod proposition_editor;
pub mod selection;
pub mod shell;

pub use backend::{MappingBackend, PropositionBackend};
pub use crud::{AfterSubmit, CreateForm, FormOutcome, ListView, Searchable, Validate};
pub use error::EditorError;
pub use mapping_editor::{EditorPhase, RoleRightMappingEditor};
pub use notice::{Notice, NoticeKind};
pub use proposition_editor::{PropositionDraft, PropositionEditor};
pub use selection::{LoadTicket, SubmitTicket};
pub use shell::{Sidebar, SidebarSection};
