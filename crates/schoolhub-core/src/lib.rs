//! # SchoolHub Core
//!
//! Core types, errors, and utilities shared by the SchoolHub navigation crates.
//!
//! This crate provides the foundational vocabulary every other crate depends on:
//!
//! - [`errors`]: Core error type for tag parsing
//! - [`permissions`]: Permission string constants, the [`Permission`] enum and
//!   its two disjoint vocabularies
//! - [`permission_set`]: Unordered, duplicate-free [`PermissionSet`]
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_core::{Permission, PermissionSet, Vocabulary};
//!
//! let set = PermissionSet::from_tags(["pos:use", "not-a-permission"]);
//! assert!(set.contains(Permission::UsePos));
//! assert_eq!(set.scoped_to(Some(Vocabulary::Provider)).len(), 1);
//! ```

pub mod errors;
pub mod permission_set;
pub mod permissions;

// Re-export commonly used types at crate root
pub use errors::CoreError;
pub use permission_set::PermissionSet;
pub use permissions::{Permission, Vocabulary};
