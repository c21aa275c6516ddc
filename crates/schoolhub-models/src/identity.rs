//! The identity navigation decisions are made for.

use schoolhub_core::PermissionSet;
use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Role, permission set and the point-of-sale demo flag of the current user.
///
/// Supplied by the session collaborator and threaded explicitly into every
/// navigation call. `pos_demo` is an explicit opt-in; the core never infers
/// it from other identity attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub role: Role,
    #[serde(default)]
    pub permissions: PermissionSet,
    #[serde(default)]
    pub pos_demo: bool,
}

impl Identity {
    pub fn new(role: Role, permissions: PermissionSet) -> Self {
        Self {
            role,
            permissions,
            pos_demo: false,
        }
    }

    pub fn with_pos_demo(mut self, pos_demo: bool) -> Self {
        self.pos_demo = pos_demo;
        self
    }
}
