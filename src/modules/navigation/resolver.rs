//! Menu resolution.
//!
//! Resolution starts from the role's catalog section and runs an ordered list
//! of [`MenuRule`]s over it. The default pipeline is:
//!
//! 1. [`PermissionFilter`]: drop gated entries whose permission is not held
//! 2. [`KioskCollapse`]: narrow point-of-sale-only provider staff to `pos`
//!    and `myProfile`
//!
//! Rules only ever remove entries and never reorder them, so the output keeps
//! the catalog's declared order. Before the pipeline runs, the permission set
//! is scoped to the role's vocabulary; permissions from the wrong vocabulary
//! never match anything.

use std::sync::LazyLock;

use schoolhub_core::{Permission, PermissionSet};
use schoolhub_models::{NavEntry, Role, views};

use super::catalog::NavCatalog;

static BUILTIN: LazyLock<MenuResolver<'static>> =
    LazyLock::new(|| MenuResolver::new(NavCatalog::builtin()));

/// Inputs shared by every rule in one resolution pass.
#[derive(Debug, Clone, Copy)]
pub struct MenuContext<'a> {
    pub role: Role,
    /// Permissions already scoped to the role's vocabulary.
    pub permissions: &'a PermissionSet,
}

/// One step of the resolution pipeline.
///
/// Rules must be pure: the same context and entries always yield the same
/// output. They may drop entries but must not add or reorder them.
pub trait MenuRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, ctx: &MenuContext<'_>, entries: Vec<NavEntry>) -> Vec<NavEntry>;
}

/// Removes entries whose required permission is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionFilter;

impl MenuRule for PermissionFilter {
    fn name(&self) -> &'static str {
        "permission_filter"
    }

    fn apply(&self, ctx: &MenuContext<'_>, mut entries: Vec<NavEntry>) -> Vec<NavEntry> {
        entries.retain(|entry| match entry.required_permission {
            Some(permission) => ctx.permissions.contains(permission),
            None => true,
        });
        entries
    }
}

/// Kiosk mode for provider staff whose only permission is the point of sale.
#[derive(Debug, Clone, Copy, Default)]
pub struct KioskCollapse;

impl KioskCollapse {
    pub const VIEWS: [&'static str; 2] = [views::POS, views::MY_PROFILE];
}

impl MenuRule for KioskCollapse {
    fn name(&self) -> &'static str {
        "kiosk_collapse"
    }

    fn apply(&self, ctx: &MenuContext<'_>, mut entries: Vec<NavEntry>) -> Vec<NavEntry> {
        if is_kiosk_permission_set(ctx.role, ctx.permissions) {
            entries.retain(|entry| Self::VIEWS.contains(&entry.id));
        }
        entries
    }
}

/// True for a provider admin whose scoped permissions are exactly `{pos:use}`.
pub fn is_kiosk_permission_set(role: Role, permissions: &PermissionSet) -> bool {
    role == Role::ProviderAdmin
        && permissions
            .scoped_to(role.vocabulary())
            .is_exactly(Permission::UsePos)
}

/// Resolves the visible menu for a role and permission set.
pub struct MenuResolver<'c> {
    catalog: &'c NavCatalog,
    rules: Vec<Box<dyn MenuRule>>,
}

impl<'c> MenuResolver<'c> {
    /// A resolver over `catalog` with the default rule pipeline.
    pub fn new(catalog: &'c NavCatalog) -> Self {
        Self::bare(catalog)
            .with_rule(PermissionFilter)
            .with_rule(KioskCollapse)
    }

    /// A resolver over `catalog` with no rules at all.
    pub fn bare(catalog: &'c NavCatalog) -> Self {
        Self {
            catalog,
            rules: Vec::new(),
        }
    }

    /// The resolver over the built-in catalog.
    pub fn builtin() -> &'static MenuResolver<'static> {
        &BUILTIN
    }

    /// Append a rule to the end of the pipeline.
    pub fn with_rule(mut self, rule: impl MenuRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Ordered, permission-filtered entries for `role`.
    ///
    /// Unrecognized roles resolve to an empty menu.
    pub fn resolve(&self, role: Role, permissions: &PermissionSet) -> Vec<NavEntry> {
        let scoped = permissions.scoped_to(role.vocabulary());
        let ctx = MenuContext {
            role,
            permissions: &scoped,
        };

        self.rules
            .iter()
            .fold(self.catalog.entries(role).to_vec(), |entries, rule| {
                rule.apply(&ctx, entries)
            })
    }
}

/// Resolve the built-in menu for `role`.
pub fn resolve_menu(role: Role, permissions: &PermissionSet) -> Vec<NavEntry> {
    MenuResolver::builtin().resolve(role, permissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[NavEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_default_pipeline_order() {
        assert_eq!(
            MenuResolver::builtin().rule_names(),
            vec!["permission_filter", "kiosk_collapse"]
        );
    }

    #[test]
    fn test_teacher_without_permissions() {
        let menu = resolve_menu(Role::Teacher, &PermissionSet::new());
        assert_eq!(
            ids(&menu),
            vec!["dashboard", "myClasses", "courses", "messages", "myProfile"]
        );
    }

    #[test]
    fn test_teacher_with_attendance() {
        let permissions = PermissionSet::from([Permission::ManageAttendance]);
        let menu = resolve_menu(Role::Teacher, &permissions);
        assert_eq!(
            ids(&menu),
            vec![
                "dashboard",
                "myClasses",
                "courses",
                "attendance",
                "messages",
                "myProfile"
            ]
        );
    }

    #[test]
    fn test_kiosk_collapse() {
        let menu = resolve_menu(
            Role::ProviderAdmin,
            &PermissionSet::from([Permission::UsePos]),
        );
        assert_eq!(ids(&menu), vec!["pos", "myProfile"]);
    }

    #[test]
    fn test_kiosk_collapse_ignores_foreign_permissions() {
        let permissions = PermissionSet::from([Permission::UsePos, Permission::ManageAttendance]);
        let menu = resolve_menu(Role::ProviderAdmin, &permissions);
        assert_eq!(ids(&menu), vec!["pos", "myProfile"]);
    }

    #[test]
    fn test_pos_with_other_provider_permission_is_not_kiosk() {
        let permissions = PermissionSet::from([Permission::UsePos, Permission::ViewOrders]);
        let menu = resolve_menu(Role::ProviderAdmin, &permissions);
        assert_eq!(ids(&menu), vec!["orders", "pos", "myProfile"]);
    }

    #[test]
    fn test_kiosk_predicate_is_provider_only() {
        let pos_only = PermissionSet::from([Permission::UsePos]);
        assert!(is_kiosk_permission_set(Role::ProviderAdmin, &pos_only));
        assert!(!is_kiosk_permission_set(Role::SchoolAdmin, &pos_only));
        assert!(!is_kiosk_permission_set(Role::Unrecognized, &pos_only));
    }

    #[test]
    fn test_unrecognized_role_is_empty() {
        let all: PermissionSet = Permission::ALL.into_iter().collect();
        assert!(resolve_menu(Role::Unrecognized, &all).is_empty());
    }

    #[test]
    fn test_bare_resolver_returns_catalog() {
        let catalog = NavCatalog::builtin();
        let resolver = MenuResolver::bare(catalog);
        let menu = resolver.resolve(Role::ProviderAdmin, &PermissionSet::new());
        assert_eq!(menu, catalog.entries(Role::ProviderAdmin).to_vec());
    }

    struct HideSettings;

    impl MenuRule for HideSettings {
        fn name(&self) -> &'static str {
            "hide_settings"
        }

        fn apply(&self, _ctx: &MenuContext<'_>, mut entries: Vec<NavEntry>) -> Vec<NavEntry> {
            entries.retain(|e| e.id != views::SETTINGS);
            entries
        }
    }

    #[test]
    fn test_custom_rule_is_additive() {
        let resolver = MenuResolver::new(NavCatalog::builtin()).with_rule(HideSettings);
        let menu = resolver.resolve(Role::GlobalAdmin, &PermissionSet::new());
        assert!(!ids(&menu).contains(&"settings"));
        assert_eq!(menu.len(), NavCatalog::builtin().entries(Role::GlobalAdmin).len() - 1);
    }
}
