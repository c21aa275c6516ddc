//! # SchoolHub Models
//!
//! Domain models for SchoolHub navigation.
//!
//! # Modules
//!
//! - [`roles`]: The [`Role`] tag selecting a dashboard and its catalog
//! - [`nav_entry`]: Navigation entries and their stable view identifiers
//! - [`notifications`]: Per-entry badge counts supplied by messaging
//! - [`identity`]: The role, permissions and demo flag of the current user
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_models::{Identity, Role};
//! use schoolhub_core::PermissionSet;
//!
//! let identity = Identity::new(Role::ProviderAdmin, PermissionSet::from_tags(["pos:use"]));
//! assert!(!identity.pos_demo);
//! ```

pub mod identity;
pub mod nav_entry;
pub mod notifications;
pub mod roles;

// Re-export commonly used types at crate root for convenience
pub use identity::Identity;
pub use nav_entry::{NavEntry, views};
pub use notifications::NotificationCounts;
pub use roles::Role;
