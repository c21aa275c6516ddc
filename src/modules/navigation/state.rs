//! Per-session navigation state.
//!
//! The dashboard shell owns exactly one [`NavigationState`] and routes every
//! navigation intent through [`NavigationState::navigate`]. The machine has two
//! phases: `Idle` until an identity is mounted, then `Active(view)` for the
//! rest of the session. While an identity is mounted the active view is
//! always an entry of that identity's resolved menu, unless the menu is empty.
//! Menu, guard and landing view all go through the same [`MenuResolver`], so a
//! shell that adds rules gets one consistent answer.

use std::fmt;

use schoolhub_config::NavigationConfig;
use schoolhub_models::{Identity, NavEntry, NotificationCounts};
use tracing::{debug, info};

use super::guard::landing_view_with;
use super::model::{MenuItem, NavPhase, Transition};
use super::resolver::MenuResolver;

#[derive(Clone)]
pub struct NavigationState<'r> {
    config: NavigationConfig,
    resolver: &'r MenuResolver<'r>,
    identity: Option<Identity>,
    phase: NavPhase,
    sidebar_open: bool,
    viewport_width_px: Option<u32>,
}

impl NavigationState<'static> {
    /// A state machine over the built-in resolver.
    pub fn new(config: NavigationConfig) -> Self {
        Self::with_resolver(config, MenuResolver::builtin())
    }
}

impl<'r> NavigationState<'r> {
    pub fn with_resolver(config: NavigationConfig, resolver: &'r MenuResolver<'r>) -> Self {
        Self {
            config,
            resolver,
            identity: None,
            phase: NavPhase::Idle,
            sidebar_open: false,
            viewport_width_px: None,
        }
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn active_view(&self) -> Option<&'static str> {
        self.phase.active_view()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Narrow when the last reported width is below the mobile breakpoint.
    /// An unreported viewport counts as wide.
    pub fn is_narrow(&self) -> bool {
        self.viewport_width_px
            .is_some_and(|width| self.config.is_narrow(width))
    }

    pub fn set_viewport_width(&mut self, width_px: u32) {
        self.viewport_width_px = Some(width_px);
    }

    /// `Idle -> Active(landing)` for a newly authenticated identity.
    ///
    /// The sidebar starts open on wide viewports and closed on narrow ones.
    pub fn mount(&mut self, identity: Identity) {
        let landing = landing_view_with(self.resolver, &identity);
        info!(
            role = %identity.role,
            permissions = identity.permissions.len(),
            view = landing,
            "Navigation mounted"
        );
        self.enter(identity, landing);
    }

    /// Replace the identity (e.g. admin impersonation) and re-seed the landing
    /// view from the new identity.
    pub fn switch_identity(&mut self, identity: Identity) {
        let landing = landing_view_with(self.resolver, &identity);
        info!(
            from = %self.identity.as_ref().map(|i| i.role.as_str()).unwrap_or("none"),
            to = %identity.role,
            view = landing,
            "Navigation identity switched"
        );
        self.enter(identity, landing);
    }

    /// Drop the identity at the end of the session.
    pub fn unmount(&mut self) {
        self.identity = None;
        self.phase = NavPhase::Idle;
        self.sidebar_open = false;
    }

    fn enter(&mut self, identity: Identity, landing: &'static str) {
        self.identity = Some(identity);
        self.phase = NavPhase::Active(landing);
        self.sidebar_open = !self.is_narrow();
    }

    /// Guarded transition to `view_id`.
    ///
    /// Views outside the resolved menu are refused and leave the state as it
    /// was. Any accepted transition on a narrow viewport also closes the
    /// sidebar overlay.
    pub fn navigate(&mut self, view_id: &str) -> Transition {
        let (identity, current) = match (&self.identity, self.phase) {
            (Some(identity), NavPhase::Active(current)) => (identity, current),
            _ => {
                debug!(view = view_id, "Navigation ignored before mount");
                return Transition::NotMounted;
            }
        };

        let target = self
            .resolver
            .resolve(identity.role, &identity.permissions)
            .into_iter()
            .find(|entry| entry.id == view_id);

        let Some(target) = target else {
            debug!(
                role = %identity.role,
                view = view_id,
                active = current,
                "Navigation refused"
            );
            return Transition::Refused {
                requested: view_id.to_string(),
            };
        };

        if self.is_narrow() {
            self.sidebar_open = false;
        }

        if target.id == current {
            return Transition::Reselected { view: current };
        }

        self.phase = NavPhase::Active(target.id);
        debug!(from = current, to = target.id, "Navigated");
        Transition::Moved {
            from: current,
            to: target.id,
        }
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    /// Resolved menu for the mounted identity, empty while idle.
    pub fn resolved_menu(&self) -> Vec<NavEntry> {
        self.identity
            .as_ref()
            .map(|identity| self.resolver.resolve(identity.role, &identity.permissions))
            .unwrap_or_default()
    }

    /// Render-ready menu rows with badges and the active marker.
    pub fn menu(&self, counts: &NotificationCounts) -> Vec<MenuItem> {
        let active = self.active_view();
        self.resolved_menu()
            .into_iter()
            .map(|entry| MenuItem {
                badge: counts.visible_badge(&entry),
                active: active == Some(entry.id),
                entry,
            })
            .collect()
    }
}

impl fmt::Debug for NavigationState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationState")
            .field("config", &self.config)
            .field("rules", &self.resolver.rule_names())
            .field("identity", &self.identity)
            .field("phase", &self.phase)
            .field("sidebar_open", &self.sidebar_open)
            .field("viewport_width_px", &self.viewport_width_px)
            .finish()
    }
}
