//! Role-based navigation.
//!
//! - [`catalog`]: The static, role-indexed catalog of navigation entries
//! - [`resolver`]: Menu resolution as an ordered rule pipeline
//! - [`guard`]: View access checks and default views
//! - [`state`]: The per-session navigation state machine
//! - [`model`]: Render-ready menu items and transition outcomes

pub mod catalog;
pub mod guard;
pub mod model;
pub mod resolver;
pub mod state;

pub use catalog::{CatalogError, NavCatalog};
pub use guard::{
    AccessError, default_view, is_allowed, is_allowed_with, landing_view, landing_view_with,
    require_view,
};
pub use model::{MenuItem, NavPhase, Transition};
pub use resolver::{
    KioskCollapse, MenuContext, MenuResolver, MenuRule, PermissionFilter, is_kiosk_permission_set,
    resolve_menu,
};
pub use state::NavigationState;
