//! # SchoolHub Navigation
//!
//! Role-based navigation and view-access control for the SchoolHub dashboards.
//!
//! ## Overview
//!
//! Every SchoolHub user lands on a role-specific dashboard (global admin, school
//! admin, teacher, parent, provider admin, student). This crate decides, for the
//! current identity:
//!
//! - **Which menu entries are visible**: the role's catalog filtered by the
//!   user's permissions, with the point-of-sale kiosk collapse applied
//! - **Whether a view may be opened**: a view is reachable iff it is in the
//!   resolved menu
//! - **Where the user lands**: the default view for the role
//! - **What is active now**: the [`NavigationState`] owned by the dashboard shell
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── schoolhub-core/           # Permission vocabulary, PermissionSet, errors
//! ├── schoolhub-models/         # Role, NavEntry, NotificationCounts, Identity
//! ├── schoolhub-config/         # NavigationConfig from environment
//! └── schoolhub-observability/  # Logging initialisation
//! src/
//! ├── cli/                      # schoolhub-cli command handlers
//! └── modules/
//!     └── navigation/           # Catalog, resolver, guard, state machine
//! ```
//!
//! ## Roles and landing views
//!
//! | Role | Permission vocabulary | Default view |
//! |------|-----------------------|--------------|
//! | Global Admin | School staff | `dashboard` |
//! | School Admin | School staff | `dashboard` |
//! | Teacher | School staff | `dashboard` |
//! | Parent | School staff | `home` |
//! | Student | School staff | `home` |
//! | Provider Admin | Provider | `dashboard`, or `pos` for point-of-sale-only staff |
//!
//! ## Example
//!
//! ```ignore
//! use schoolhub::modules::navigation::{NavigationState, resolve_menu, is_allowed};
//! use schoolhub_config::NavigationConfig;
//! use schoolhub_core::PermissionSet;
//! use schoolhub_models::{Identity, Role};
//!
//! let permissions = PermissionSet::from_tags(["pos:use"]);
//! let menu = resolve_menu(Role::ProviderAdmin, &permissions);
//! assert_eq!(menu.len(), 2);
//!
//! let mut state = NavigationState::new(NavigationConfig::from_env());
//! state.mount(Identity::new(Role::ProviderAdmin, permissions));
//! assert_eq!(state.active_view(), Some("pos"));
//! ```

pub mod cli;
pub mod modules;
