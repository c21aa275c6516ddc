use schoolhub_models::NavEntry;
use serde::Serialize;

/// Phase of the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "view", rename_all = "snake_case")]
pub enum NavPhase {
    /// Mounted shell has not resolved an identity yet.
    Idle,
    Active(&'static str),
}

impl NavPhase {
    pub fn active_view(self) -> Option<&'static str> {
        match self {
            NavPhase::Idle => None,
            NavPhase::Active(view) => Some(view),
        }
    }
}

/// Outcome of a navigation intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Transition {
    Moved {
        from: &'static str,
        to: &'static str,
    },
    /// The requested view was already active.
    Reselected { view: &'static str },
    /// The view is not in the resolved menu; state is unchanged.
    Refused { requested: String },
    /// No identity has been mounted yet.
    NotMounted,
}

impl Transition {
    pub fn is_success(&self) -> bool {
        matches!(self, Transition::Moved { .. } | Transition::Reselected { .. })
    }
}

/// One render-ready sidebar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(flatten)]
    pub entry: NavEntry,
    /// `None` when the badge count is zero.
    pub badge: Option<u32>,
    pub active: bool,
}
