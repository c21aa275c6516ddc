//! The role-indexed navigation catalog.
//!
//! Each role owns one ordered sequence of [`NavEntry`]. The order is the
//! sidebar order and is preserved by every resolution step. The catalog is
//! configuration data: it is built once and never mutated.

use std::collections::HashSet;
use std::sync::LazyLock;

use schoolhub_core::Permission;
use schoolhub_models::{NavEntry, Role, views};
use thiserror::Error;

const GLOBAL_ADMIN: &[NavEntry] = &[
    NavEntry::open(views::DASHBOARD, "layout-dashboard"),
    NavEntry::open(views::SCHOOLS, "school"),
    NavEntry::open(views::PROVIDERS, "store"),
    NavEntry::open(views::SUBSCRIPTIONS, "badge-check"),
    NavEntry::open(views::PAYMENTS, "wallet").highlighted("amber"),
    NavEntry::open(views::ACTIVITIES, "calendar-range"),
    NavEntry::open(views::MESSAGES, "mail"),
    NavEntry::open(views::SETTINGS, "settings"),
    NavEntry::open(views::MY_PROFILE, "user-circle"),
];

const SCHOOL_ADMIN: &[NavEntry] = &[
    NavEntry::open(views::DASHBOARD, "layout-dashboard"),
    NavEntry::open(views::STUDENTS, "graduation-cap"),
    NavEntry::open(views::TEACHERS, "users"),
    NavEntry::open(views::CLASSES, "book-open"),
    NavEntry::gated(views::ACTIVITIES, "calendar-range", Permission::ManageActivities),
    NavEntry::gated(views::ATTENDANCE, "clipboard-check", Permission::ManageAttendance),
    NavEntry::gated(views::PICKUP, "car", Permission::ViewPickupInfo),
    NavEntry::gated(views::COMMUNICATIONS, "megaphone", Permission::SendCommunications)
        .highlighted("sky"),
    NavEntry::gated(views::PAYMENTS, "wallet", Permission::ManagePayments).highlighted("amber"),
    NavEntry::open(views::SETTINGS, "settings"),
    NavEntry::open(views::MY_PROFILE, "user-circle"),
];

const TEACHER: &[NavEntry] = &[
    NavEntry::open(views::DASHBOARD, "layout-dashboard"),
    NavEntry::open(views::MY_CLASSES, "book-open"),
    NavEntry::open(views::COURSES, "library"),
    NavEntry::gated(views::ATTENDANCE, "clipboard-check", Permission::ManageAttendance),
    NavEntry::gated(views::PICKUP, "car", Permission::ViewPickupInfo),
    NavEntry::gated(views::COMMUNICATIONS, "megaphone", Permission::SendCommunications)
        .highlighted("sky"),
    NavEntry::open(views::MESSAGES, "mail"),
    NavEntry::open(views::MY_PROFILE, "user-circle"),
];

const PARENT: &[NavEntry] = &[
    NavEntry::open(views::HOME, "home"),
    NavEntry::open(views::CHILDREN, "baby"),
    NavEntry::open(views::ACTIVITIES, "calendar-range"),
    NavEntry::open(views::PAYMENTS, "wallet").highlighted("amber"),
    NavEntry::open(views::PICKUP, "car"),
    NavEntry::open(views::MESSAGES, "mail"),
    NavEntry::open(views::MY_PROFILE, "user-circle"),
];

const STUDENT: &[NavEntry] = &[
    NavEntry::open(views::HOME, "home"),
    NavEntry::open(views::COURSES, "library"),
    NavEntry::open(views::ACTIVITIES, "calendar-range"),
    NavEntry::open(views::SCHEDULE, "calendar-clock"),
    NavEntry::open(views::MESSAGES, "mail"),
    NavEntry::open(views::MY_PROFILE, "user-circle"),
];

const PROVIDER_ADMIN: &[NavEntry] = &[
    NavEntry::gated(views::DASHBOARD, "layout-dashboard", Permission::ViewDashboard),
    NavEntry::gated(views::CATALOGS, "folder-tree", Permission::ManageCatalogs),
    NavEntry::gated(views::PRODUCTS, "package", Permission::ManageProducts),
    NavEntry::gated(views::ORDERS, "receipt", Permission::ViewOrders),
    NavEntry::gated(views::POS, "credit-card", Permission::UsePos).highlighted("emerald"),
    NavEntry::gated(views::REPORTS, "bar-chart-3", Permission::ViewReports),
    NavEntry::gated(views::USERS, "user-cog", Permission::ManageUsers),
    NavEntry::open(views::MY_PROFILE, "user-circle"),
];

static BUILTIN: LazyLock<NavCatalog> = LazyLock::new(|| {
    NavCatalog::new()
        .with_role(Role::GlobalAdmin, GLOBAL_ADMIN.to_vec())
        .with_role(Role::SchoolAdmin, SCHOOL_ADMIN.to_vec())
        .with_role(Role::Teacher, TEACHER.to_vec())
        .with_role(Role::Parent, PARENT.to_vec())
        .with_role(Role::ProviderAdmin, PROVIDER_ADMIN.to_vec())
        .with_role(Role::Student, STUDENT.to_vec())
});

/// A catalog invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("role {0} has no entry reachable without permissions")]
    NoOpenEntry(Role),

    #[error("role {role} lists view {view} more than once")]
    DuplicateView { role: Role, view: &'static str },

    #[error("view {view} of role {role} requires {permission}, which is outside the role's vocabulary")]
    ForeignPermission {
        role: Role,
        view: &'static str,
        permission: Permission,
    },

    #[error("the unrecognized role cannot own entries")]
    UnrecognizedRoleEntries,
}

/// Ordered navigation entries per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavCatalog {
    sections: Vec<(Role, Vec<NavEntry>)>,
}

impl NavCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with SchoolHub.
    pub fn builtin() -> &'static NavCatalog {
        &BUILTIN
    }

    /// Set the entries for `role`, replacing any previous section.
    pub fn with_role(mut self, role: Role, entries: Vec<NavEntry>) -> Self {
        match self.sections.iter_mut().find(|(r, _)| *r == role) {
            Some((_, existing)) => *existing = entries,
            None => self.sections.push((role, entries)),
        }
        self
    }

    /// Entries declared for `role`, empty when the role has no section.
    pub fn entries(&self, role: Role) -> &[NavEntry] {
        self.sections
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, role: Role, view_id: &str) -> bool {
        self.entries(role).iter().any(|e| e.id == view_id)
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.sections.iter().map(|(role, _)| *role)
    }

    /// Check every catalog invariant, reporting all violations.
    ///
    /// Every recognised role must have a section with at least one open entry,
    /// view identifiers are unique per role, and gated entries only use
    /// permissions from the role's vocabulary.
    pub fn validate(&self) -> Result<(), Vec<CatalogError>> {
        let mut errors = Vec::new();

        for role in Role::KNOWN {
            if !self.entries(role).iter().any(NavEntry::is_open) {
                errors.push(CatalogError::NoOpenEntry(role));
            }
        }

        for (role, entries) in &self.sections {
            if !role.is_recognized() {
                if !entries.is_empty() {
                    errors.push(CatalogError::UnrecognizedRoleEntries);
                }
                continue;
            }

            let mut seen = HashSet::new();
            for entry in entries {
                if !seen.insert(entry.id) {
                    errors.push(CatalogError::DuplicateView {
                        role: *role,
                        view: entry.id,
                    });
                }
                if let Some(permission) = entry.required_permission {
                    if Some(permission.vocabulary()) != role.vocabulary() {
                        errors.push(CatalogError::ForeignPermission {
                            role: *role,
                            view: entry.id,
                            permission,
                        });
                    }
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
