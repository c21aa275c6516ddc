//! Properties checked over randomly sampled identities and view requests.
//!
//! The RNG is seeded so failures reproduce.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use schoolhub::modules::navigation::{
    NavCatalog, NavigationState, Transition, is_allowed, is_kiosk_permission_set, resolve_menu,
};
use schoolhub_config::NavigationConfig;
use schoolhub_core::{Permission, PermissionSet};
use schoolhub_models::{Identity, Role};

const SAMPLES: usize = 500;

const ROLES: [Role; 7] = [
    Role::GlobalAdmin,
    Role::SchoolAdmin,
    Role::Teacher,
    Role::Parent,
    Role::ProviderAdmin,
    Role::Student,
    Role::Unrecognized,
];

const EXTRA_VIEWS: [&str; 3] = ["nonexistent", "", "POS"];

fn sample_permissions(rng: &mut StdRng) -> PermissionSet {
    Permission::ALL
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(0.3))
        .collect()
}

fn all_view_ids() -> Vec<&'static str> {
    let catalog = NavCatalog::builtin();
    let mut views: Vec<&'static str> = catalog
        .roles()
        .flat_map(|role| catalog.entries(role).iter().map(|e| e.id))
        .chain(EXTRA_VIEWS)
        .collect();
    views.sort_unstable();
    views.dedup();
    views
}

#[test]
fn test_resolved_entries_exist_in_catalog() {
    let mut rng = StdRng::seed_from_u64(0x5c4001);
    for _ in 0..SAMPLES {
        let role = *ROLES.choose(&mut rng).unwrap();
        let permissions = sample_permissions(&mut rng);
        for entry in resolve_menu(role, &permissions) {
            assert!(NavCatalog::builtin().contains(role, entry.id));
        }
    }
}

#[test]
fn test_adding_permissions_never_removes_entries_outside_kiosk_mode() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let role = *ROLES.choose(&mut rng).unwrap();
        let smaller = sample_permissions(&mut rng);
        let mut larger = smaller.clone();
        for permission in sample_permissions(&mut rng).iter() {
            larger.insert(permission);
        }

        if is_kiosk_permission_set(role, &smaller) || is_kiosk_permission_set(role, &larger) {
            continue;
        }

        let small_menu = resolve_menu(role, &smaller);
        let large_menu = resolve_menu(role, &larger);
        for entry in &small_menu {
            assert!(
                large_menu.contains(entry),
                "{role}: {} lost when permissions grew",
                entry.id
            );
        }
    }
}

#[test]
fn test_is_allowed_matches_resolved_menu() {
    let mut rng = StdRng::seed_from_u64(42);
    let views = all_view_ids();
    for _ in 0..SAMPLES {
        let role = *ROLES.choose(&mut rng).unwrap();
        let permissions = sample_permissions(&mut rng);
        let view = *views.choose(&mut rng).unwrap();

        let in_menu = resolve_menu(role, &permissions).iter().any(|e| e.id == view);
        assert_eq!(is_allowed(role, &permissions, view), in_menu, "{role} {view}");
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let role = *ROLES.choose(&mut rng).unwrap();
        let permissions = sample_permissions(&mut rng);
        assert_eq!(resolve_menu(role, &permissions), resolve_menu(role, &permissions));
    }
}

#[test]
fn test_random_walk_keeps_active_view_in_menu() {
    let mut rng = StdRng::seed_from_u64(2024);
    let views = all_view_ids();

    for _ in 0..50 {
        let role = *Role::KNOWN.choose(&mut rng).unwrap();
        let permissions = sample_permissions(&mut rng);
        let mut state = NavigationState::new(NavigationConfig::default());
        state.set_viewport_width(rng.gen_range(320..1600));
        state.mount(Identity::new(role, permissions.clone()));

        for _ in 0..40 {
            let before = state.active_view();
            let view = *views.choose(&mut rng).unwrap();
            let transition = state.navigate(view);

            let active = state.active_view().unwrap();
            assert!(is_allowed(role, &permissions, active), "{role} on {active}");
            if matches!(transition, Transition::Refused { .. }) {
                assert_eq!(state.active_view(), before);
            }
        }
    }
}
