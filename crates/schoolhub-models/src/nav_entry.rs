//! Navigation entries.
//!
//! A [`NavEntry`] is one addressable destination in a dashboard: a menu item
//! and the view it opens. Entries only carry stable identifiers; turning an
//! identifier into display text (`sidebar.<id>`) is the localization layer's
//! job.

use schoolhub_core::Permission;
use serde::Serialize;

/// Stable view identifiers used by the built-in catalogs.
pub mod views {
    pub const DASHBOARD: &str = "dashboard";
    pub const HOME: &str = "home";
    pub const MY_PROFILE: &str = "myProfile";
    pub const POS: &str = "pos";

    pub const SCHOOLS: &str = "schools";
    pub const PROVIDERS: &str = "providers";
    pub const SUBSCRIPTIONS: &str = "subscriptions";
    pub const PAYMENTS: &str = "payments";
    pub const ACTIVITIES: &str = "activities";
    pub const MESSAGES: &str = "messages";
    pub const SETTINGS: &str = "settings";

    pub const STUDENTS: &str = "students";
    pub const TEACHERS: &str = "teachers";
    pub const CLASSES: &str = "classes";
    pub const ATTENDANCE: &str = "attendance";
    pub const PICKUP: &str = "pickup";
    pub const COMMUNICATIONS: &str = "communications";

    pub const MY_CLASSES: &str = "myClasses";
    pub const COURSES: &str = "courses";
    pub const CHILDREN: &str = "children";
    pub const SCHEDULE: &str = "schedule";

    pub const CATALOGS: &str = "catalogs";
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
    pub const REPORTS: &str = "reports";
    pub const USERS: &str = "users";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    /// Stable key used for lookup, badges and localization.
    pub id: &'static str,
    /// Icon-set key, e.g. `layout-dashboard`.
    pub icon: &'static str,
    pub required_permission: Option<Permission>,
    pub highlight: Option<&'static str>,
}

impl NavEntry {
    /// An entry reachable by every holder of the role.
    pub const fn open(id: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            icon,
            required_permission: None,
            highlight: None,
        }
    }

    /// An entry gated behind `permission`.
    pub const fn gated(id: &'static str, icon: &'static str, permission: Permission) -> Self {
        Self {
            id,
            icon,
            required_permission: Some(permission),
            highlight: None,
        }
    }

    pub const fn highlighted(mut self, color: &'static str) -> Self {
        self.highlight = Some(color);
        self
    }

    pub fn is_open(&self) -> bool {
        self.required_permission.is_none()
    }
}
