//! # VidaPlus Core
//!
//! Session and navigation resolution for the VidaPlus hospital management
//! system.
//!
//! This crate contains the pure domain logic behind "who is signed in and
//! what can they see":
//! - Role-based navigation tables and home-path derivation
//! - Session record persistence behind an injected [`SessionStore`]
//! - A mock credential directory and an authenticator that simulates the
//!   network round trip of a real login
//! - The page-mount lifecycle (load, resolve, redirect-or-render)
//!
//! **No presentation concerns**: rendering, routing mechanics, and layout
//! belong to the consuming surface (`vida-cli` here, a web front end in
//! production). This crate hands that surface an [`Identity`] and a
//! [`Navigation`] and nothing else.

pub mod auth;
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod navigation;
pub mod role;
pub mod store;

pub use auth::{validate_login_form, Authenticator};
pub use config::CoreConfig;
pub use directory::{CredentialDirectory, CredentialEntry};
pub use error::{VidaError, VidaResult};
pub use identity::{resolve, serialize_record, Identity, SessionState};
pub use lifecycle::{logout, mount, Mount};
pub use navigation::{derive, role_navigation, NavEntry, Navigation, RoleNavigation};
pub use role::Role;
pub use store::{FileStore, MemoryStore, SessionStore};
