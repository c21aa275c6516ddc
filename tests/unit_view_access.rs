use schoolhub::modules::navigation::{
    AccessError, MenuResolver, NavCatalog, default_view, is_allowed, is_allowed_with,
    landing_view, require_view,
};
use schoolhub_core::{Permission, PermissionSet};
use schoolhub_models::{Identity, NavEntry, Role};

#[test]
fn test_default_view_examples() {
    assert_eq!(
        default_view(Role::ProviderAdmin, &PermissionSet::from([Permission::UsePos]), false),
        "pos"
    );
    assert_eq!(
        default_view(
            Role::ProviderAdmin,
            &PermissionSet::from([Permission::ViewDashboard]),
            false
        ),
        "dashboard"
    );
    assert_eq!(default_view(Role::Parent, &PermissionSet::new(), false), "home");
    assert_eq!(default_view(Role::GlobalAdmin, &PermissionSet::new(), false), "dashboard");
}

#[test]
fn test_default_view_follows_current_identity() {
    let mut permissions = PermissionSet::from([Permission::UsePos]);
    assert_eq!(default_view(Role::ProviderAdmin, &permissions, false), "pos");

    permissions.insert(Permission::ViewDashboard);
    assert_eq!(default_view(Role::ProviderAdmin, &permissions, false), "dashboard");
}

#[test]
fn test_is_allowed_for_gated_views() {
    let none = PermissionSet::new();
    let attendance = PermissionSet::from([Permission::ManageAttendance]);

    assert!(!is_allowed(Role::Teacher, &none, "attendance"));
    assert!(is_allowed(Role::Teacher, &attendance, "attendance"));
    assert!(is_allowed(Role::Teacher, &none, "myClasses"));
}

#[test]
fn test_kiosk_user_cannot_reach_dashboard() {
    let pos = PermissionSet::from([Permission::UsePos]);
    assert!(is_allowed(Role::ProviderAdmin, &pos, "pos"));
    assert!(is_allowed(Role::ProviderAdmin, &pos, "myProfile"));
    assert!(!is_allowed(Role::ProviderAdmin, &pos, "dashboard"));
    assert!(!is_allowed(Role::ProviderAdmin, &pos, "orders"));
}

#[test]
fn test_views_of_other_roles_are_denied() {
    let none = PermissionSet::new();
    assert!(!is_allowed(Role::Student, &none, "schools"));
    assert!(!is_allowed(Role::Parent, &none, "dashboard"));
    assert!(!is_allowed(Role::GlobalAdmin, &none, "home"));
}

#[test]
fn test_unknown_view_and_role_are_denied() {
    assert!(!is_allowed(Role::GlobalAdmin, &PermissionSet::new(), "nonexistent"));
    assert!(!is_allowed(Role::Unrecognized, &PermissionSet::new(), "dashboard"));
    assert!(!is_allowed(Role::GlobalAdmin, &PermissionSet::new(), ""));
}

#[test]
fn test_require_view_denial_carries_context() {
    let result = require_view(Role::ProviderAdmin, &PermissionSet::new(), "reports");
    assert_eq!(
        result,
        Err(AccessError::Denied {
            role: Role::ProviderAdmin,
            view: "reports".to_string()
        })
    );
}

#[test]
fn test_is_allowed_with_custom_catalog() {
    let catalog = NavCatalog::new().with_role(
        Role::Student,
        vec![
            NavEntry::open("home", "home"),
            NavEntry::gated("lab", "flask", Permission::ManageActivities),
        ],
    );
    let resolver = MenuResolver::new(&catalog);

    assert!(is_allowed_with(&resolver, Role::Student, &PermissionSet::new(), "home"));
    assert!(!is_allowed_with(&resolver, Role::Student, &PermissionSet::new(), "lab"));
    assert!(is_allowed_with(
        &resolver,
        Role::Student,
        &PermissionSet::from([Permission::ManageActivities]),
        "lab"
    ));
}

#[test]
fn test_landing_view_is_always_reachable_for_known_roles() {
    for role in Role::KNOWN {
        for permissions in [
            PermissionSet::new(),
            PermissionSet::from([Permission::UsePos]),
            PermissionSet::from([Permission::ViewReports]),
        ] {
            let identity = Identity::new(role, permissions.clone());
            let landing = landing_view(&identity);
            assert!(
                is_allowed(role, &permissions, landing),
                "{role} landed on unreachable {landing}"
            );
        }
    }
}
