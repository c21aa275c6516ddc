//! View access control.
//!
//! A view is reachable exactly when it appears in the resolved menu. Denial is
//! never fatal: the boolean check is what the shell uses on every render, and
//! [`require_view`] exists for deep-link handlers that want a reason to log
//! before redirecting to the landing view.

use schoolhub_core::PermissionSet;
use schoolhub_models::{Identity, NavEntry, Role, views};
use thiserror::Error;

use super::resolver::{MenuResolver, is_kiosk_permission_set};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("view {view} is not available to role {role}")]
    Denied { role: Role, view: String },
}

/// Whether `view_id` is in the resolved menu for `role` and `permissions`.
pub fn is_allowed(role: Role, permissions: &PermissionSet, view_id: &str) -> bool {
    is_allowed_with(MenuResolver::builtin(), role, permissions, view_id)
}

pub fn is_allowed_with(
    resolver: &MenuResolver<'_>,
    role: Role,
    permissions: &PermissionSet,
    view_id: &str,
) -> bool {
    resolver
        .resolve(role, permissions)
        .iter()
        .any(|entry| entry.id == view_id)
}

/// Strict variant of [`is_allowed`] returning the matching entry.
pub fn require_view(
    role: Role,
    permissions: &PermissionSet,
    view_id: &str,
) -> Result<NavEntry, AccessError> {
    MenuResolver::builtin()
        .resolve(role, permissions)
        .into_iter()
        .find(|entry| entry.id == view_id)
        .ok_or_else(|| AccessError::Denied {
            role,
            view: view_id.to_string(),
        })
}

/// The view a role lands on right after authentication.
///
/// Must be recomputed whenever the identity changes; it depends on the current
/// role and permissions, not on how the session started.
pub fn default_view(role: Role, permissions: &PermissionSet, is_pos_demo: bool) -> &'static str {
    match role {
        Role::ProviderAdmin if is_pos_demo || is_kiosk_permission_set(role, permissions) => {
            views::POS
        }
        Role::Parent | Role::Student => views::HOME,
        Role::ProviderAdmin
        | Role::GlobalAdmin
        | Role::SchoolAdmin
        | Role::Teacher
        | Role::Unrecognized => views::DASHBOARD,
    }
}

/// The view a freshly mounted dashboard actually opens.
///
/// This is [`default_view`] when that view is in the resolved menu. A provider
/// admin without `dashboard:view` would otherwise land on a view they cannot
/// render, so the first resolved entry is used instead. An empty menu keeps
/// the default.
pub fn landing_view(identity: &Identity) -> &'static str {
    landing_view_with(MenuResolver::builtin(), identity)
}

/// [`landing_view`] against a custom resolver pipeline.
pub fn landing_view_with(resolver: &MenuResolver<'_>, identity: &Identity) -> &'static str {
    let default = default_view(identity.role, &identity.permissions, identity.pos_demo);
    let menu = resolver.resolve(identity.role, &identity.permissions);

    if menu.iter().any(|entry| entry.id == default) {
        default
    } else {
        menu.first().map(|entry| entry.id).unwrap_or(default)
    }
}
