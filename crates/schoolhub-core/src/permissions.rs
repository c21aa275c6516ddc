//! Permission constants and the permission vocabulary for SchoolHub.
//!
//! Permissions use the `resource:action` string convention on the wire. This
//! module provides the centralized string constants alongside the typed
//! [`Permission`] enum, so code that receives raw tags from a session payload
//! and code that works with typed values agree on spelling.
//!
//! Two disjoint vocabularies exist:
//!
//! - **School staff**: held by global admins, school admins, teachers, parents
//!   and students.
//! - **Provider**: held by provider admins only.
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_core::permissions::{self, Permission, Vocabulary};
//!
//! let parsed: Permission = permissions::POS_USE.parse()?;
//! assert_eq!(parsed, Permission::UsePos);
//! assert_eq!(parsed.vocabulary(), Vocabulary::Provider);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// =============================================================================
// School staff permissions
// =============================================================================

/// Permission to take and edit attendance
pub const ATTENDANCE_MANAGE: &str = "attendance:manage";
/// Permission to see pickup authorisations and schedules
pub const PICKUP_VIEW: &str = "pickup:view";
/// Permission to send communications to families
pub const COMMUNICATIONS_SEND: &str = "communications:send";
/// Permission to manage extracurricular activities
pub const ACTIVITIES_MANAGE: &str = "activities:manage";
/// Permission to manage school payments
pub const PAYMENTS_MANAGE: &str = "payments:manage";

// =============================================================================
// Provider permissions
// =============================================================================

/// Permission to view the provider dashboard
pub const DASHBOARD_VIEW: &str = "dashboard:view";
/// Permission to manage catalogs
pub const CATALOGS_MANAGE: &str = "catalogs:manage";
/// Permission to manage products
pub const PRODUCTS_MANAGE: &str = "products:manage";
/// Permission to view orders
pub const ORDERS_VIEW: &str = "orders:view";
/// Permission to operate the point of sale
pub const POS_USE: &str = "pos:use";
/// Permission to view reports
pub const REPORTS_VIEW: &str = "reports:view";
/// Permission to manage provider staff accounts
pub const USERS_MANAGE: &str = "users:manage";

/// The permission family a role draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocabulary {
    SchoolStaff,
    Provider,
}

impl Vocabulary {
    /// All permissions belonging to this vocabulary, in declaration order.
    pub fn permissions(self) -> impl Iterator<Item = Permission> {
        Permission::ALL
            .into_iter()
            .filter(move |p| p.vocabulary() == self)
    }
}

/// A fine-grained capability gating individual navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "attendance:manage")]
    ManageAttendance,
    #[serde(rename = "pickup:view")]
    ViewPickupInfo,
    #[serde(rename = "communications:send")]
    SendCommunications,
    #[serde(rename = "activities:manage")]
    ManageActivities,
    #[serde(rename = "payments:manage")]
    ManagePayments,
    #[serde(rename = "dashboard:view")]
    ViewDashboard,
    #[serde(rename = "catalogs:manage")]
    ManageCatalogs,
    #[serde(rename = "products:manage")]
    ManageProducts,
    #[serde(rename = "orders:view")]
    ViewOrders,
    #[serde(rename = "pos:use")]
    UsePos,
    #[serde(rename = "reports:view")]
    ViewReports,
    #[serde(rename = "users:manage")]
    ManageUsers,
}

impl Permission {
    pub const ALL: [Permission; 12] = [
        Permission::ManageAttendance,
        Permission::ViewPickupInfo,
        Permission::SendCommunications,
        Permission::ManageActivities,
        Permission::ManagePayments,
        Permission::ViewDashboard,
        Permission::ManageCatalogs,
        Permission::ManageProducts,
        Permission::ViewOrders,
        Permission::UsePos,
        Permission::ViewReports,
        Permission::ManageUsers,
    ];

    /// The wire tag for this permission.
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::ManageAttendance => ATTENDANCE_MANAGE,
            Permission::ViewPickupInfo => PICKUP_VIEW,
            Permission::SendCommunications => COMMUNICATIONS_SEND,
            Permission::ManageActivities => ACTIVITIES_MANAGE,
            Permission::ManagePayments => PAYMENTS_MANAGE,
            Permission::ViewDashboard => DASHBOARD_VIEW,
            Permission::ManageCatalogs => CATALOGS_MANAGE,
            Permission::ManageProducts => PRODUCTS_MANAGE,
            Permission::ViewOrders => ORDERS_VIEW,
            Permission::UsePos => POS_USE,
            Permission::ViewReports => REPORTS_VIEW,
            Permission::ManageUsers => USERS_MANAGE,
        }
    }

    pub const fn vocabulary(self) -> Vocabulary {
        match self {
            Permission::ManageAttendance
            | Permission::ViewPickupInfo
            | Permission::SendCommunications
            | Permission::ManageActivities
            | Permission::ManagePayments => Vocabulary::SchoolStaff,
            Permission::ViewDashboard
            | Permission::ManageCatalogs
            | Permission::ManageProducts
            | Permission::ViewOrders
            | Permission::UsePos
            | Permission::ViewReports
            | Permission::ManageUsers => Vocabulary::Provider,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPermission(s.to_string()))
    }
}
