//! `backoffice-client`: thin HTTP layer over the back-office REST API.
//!
//! **Responsibility:** translate console actions into REST calls.
//!
//! This crate provides:
//! - Configuration (`ClientConfig`)
//! - Persisted session storage (token + cached user profile)
//! - The `Gateway`: bearer auth, status handling, envelope normalization
//! - One service module per domain entity
//!
//! The backend remains the authority for every rule, including access control.

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod resource;
pub mod services;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use envelope::{Envelope, EnvelopeStatus, Payload};
pub use error::{ClientError, ClientResult, GENERIC_ERROR_MESSAGE};
pub use gateway::Gateway;
pub use resource::{CrudService, Resource, Routes};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
