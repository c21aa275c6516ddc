//! Command handlers behind `schoolhub-cli`.
//!
//! Argument parsing here is strict: unlike session payloads, a typo on the
//! command line is reported instead of being silently dropped.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use schoolhub_config::NavigationConfig;
use schoolhub_core::{Permission, PermissionSet};
use schoolhub_models::{Identity, NotificationCounts, Role};
use serde::Serialize;

use crate::modules::navigation::{MenuItem, NavCatalog, NavPhase, NavigationState, Transition};

pub fn parse_role(tag: &str) -> Result<Role> {
    tag.parse::<Role>()
        .with_context(|| format!("valid roles: {}", known_roles()))
}

pub fn parse_permissions(tags: &[String]) -> Result<PermissionSet> {
    tags.iter()
        .map(|tag| {
            tag.parse::<Permission>()
                .with_context(|| format!("while parsing --permission {tag}"))
        })
        .collect()
}

/// Parse `view=count` pairs.
pub fn parse_counts(pairs: &[String]) -> Result<NotificationCounts> {
    let mut counts = NotificationCounts::new();
    for pair in pairs {
        let Some((view, count)) = pair.split_once('=') else {
            bail!("badge count must look like view=N, got {pair:?}");
        };
        let count: u32 = count
            .trim()
            .parse()
            .with_context(|| format!("badge count for {view} must be a non-negative integer"))?;
        counts.set(view.trim(), count);
    }
    Ok(counts)
}

fn known_roles() -> String {
    Role::KNOWN
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether the identity is flagged as a point-of-sale demo user.
pub fn resolve_pos_demo(config: &NavigationConfig, email: Option<&str>, kiosk: bool) -> bool {
    kiosk || email.is_some_and(|email| config.is_pos_demo_identity(email))
}

/// Menu rows for an identity, as the shell would render them after mount.
pub fn menu_items(
    config: &NavigationConfig,
    identity: Identity,
    counts: &NotificationCounts,
) -> Vec<MenuItem> {
    let mut state = NavigationState::new(config.clone());
    state.mount(identity);
    state.menu(counts)
}

pub fn render_menu(items: &[MenuItem]) -> String {
    let mut out = String::new();
    if items.is_empty() {
        out.push_str("(no entries)\n");
        return out;
    }
    for item in items {
        let marker = if item.active { '*' } else { ' ' };
        let _ = write!(out, "{marker} {:<16} {}", item.entry.id, item.entry.icon);
        if let Some(permission) = item.entry.required_permission {
            let _ = write!(out, " [{permission}]");
        }
        if let Some(badge) = item.badge {
            let _ = write!(out, " ({badge})");
        }
        out.push('\n');
    }
    out
}

/// One step of a replayed navigation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStep {
    pub requested: String,
    pub transition: Transition,
    pub phase: NavPhase,
    pub sidebar_open: bool,
}

/// Mount `identity`, open the sidebar, then feed each view as a navigation
/// intent, recording the state after every step.
pub fn replay_session(
    config: &NavigationConfig,
    identity: Identity,
    width_px: Option<u32>,
    requested: &[String],
) -> (NavPhase, Vec<SessionStep>) {
    let mut state = NavigationState::new(config.clone());
    if let Some(width) = width_px {
        state.set_viewport_width(width);
    }
    state.mount(identity);
    let landing = state.phase();

    let steps = requested
        .iter()
        .map(|view| {
            state.open_sidebar();
            let transition = state.navigate(view);
            SessionStep {
                requested: view.clone(),
                transition,
                phase: state.phase(),
                sidebar_open: state.sidebar_open(),
            }
        })
        .collect();

    (landing, steps)
}

pub fn render_session(landing: NavPhase, steps: &[SessionStep]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "landing: {}", landing.active_view().unwrap_or("-"));
    for step in steps {
        let outcome = match &step.transition {
            Transition::Moved { from, to } => format!("moved {from} -> {to}"),
            Transition::Reselected { view } => format!("reselected {view}"),
            Transition::Refused { requested } => format!("refused {requested}"),
            Transition::NotMounted => "not mounted".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<16} {:<32} active={} sidebar={}",
            step.requested,
            outcome,
            step.phase.active_view().unwrap_or("-"),
            if step.sidebar_open { "open" } else { "closed" }
        );
    }
    out
}

/// Print the catalog, optionally for one role, followed by validation results.
pub fn render_catalog(catalog: &NavCatalog, role: Option<Role>) -> String {
    let mut out = String::new();
    let roles: Vec<Role> = match role {
        Some(role) => vec![role],
        None => catalog.roles().collect(),
    };

    for role in roles {
        let _ = writeln!(out, "{role}:");
        for entry in catalog.entries(role) {
            let _ = write!(out, "  {:<16} {}", entry.id, entry.icon);
            if let Some(permission) = entry.required_permission {
                let _ = write!(out, " [{permission}]");
            }
            if let Some(color) = entry.highlight {
                let _ = write!(out, " <{color}>");
            }
            out.push('\n');
        }
    }

    match catalog.validate() {
        Ok(()) => out.push_str("catalog: ok\n"),
        Err(errors) => {
            for error in errors {
                let _ = writeln!(out, "catalog error: {error}");
            }
        }
    }
    out
}
