//! `pivoterp-auth` — pure role/permission resolution (no IO).
//!
//! This crate is intentionally decoupled from HTTP and storage: it decides
//! *whether* a role may see something, never *how* that role was obtained.

pub mod groups;
pub mod menu;
pub mod resolver;
pub mod roles;
pub mod user;

pub use groups::PermissionGroup;
pub use menu::{MenuItem, default_navigation, filter_menu};
pub use resolver::has_permission;
pub use roles::{Role, RoleParseError};
pub use user::{UserId, UserProfile};
