//! `backoffice-auth`: client-side authorization model.
//!
//! Derives admin status and granted rights from the cached session and
//! decides which navigation sections are shown. Pure: no HTTP, no storage.

pub mod menu;
pub mod resolver;
pub mod right;
pub mod roles;
pub mod session;

pub use menu::{MenuDecision, MenuKey, MenuLink, NavigationModel};
pub use resolver::{AuthContext, extract_rights, is_system_admin};
pub use right::Right;
pub use roles::{Role, RoleGrants, RoleRightLink};
pub use session::{SessionError, SessionUser};
