//! Role tags.
//!
//! A role is the coarse-grained actor type: it picks the dashboard shell, the
//! navigation catalog and the permission vocabulary. Roles arrive from the
//! session collaborator as snake_case tags; anything unrecognized maps to
//! [`Role::Unrecognized`] so a malformed session never crashes the dashboard.

use std::fmt;
use std::str::FromStr;

use schoolhub_core::{CoreError, Vocabulary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    GlobalAdmin,
    SchoolAdmin,
    Teacher,
    Parent,
    ProviderAdmin,
    Student,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    /// Every recognised role, in display order.
    pub const KNOWN: [Role; 6] = [
        Role::GlobalAdmin,
        Role::SchoolAdmin,
        Role::Teacher,
        Role::Parent,
        Role::ProviderAdmin,
        Role::Student,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::GlobalAdmin => "global_admin",
            Role::SchoolAdmin => "school_admin",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
            Role::ProviderAdmin => "provider_admin",
            Role::Student => "student",
            Role::Unrecognized => "unrecognized",
        }
    }

    /// Lenient conversion used for session payloads.
    pub fn from_tag(tag: &str) -> Role {
        tag.parse().unwrap_or(Role::Unrecognized)
    }

    /// The permission vocabulary users of this role draw from.
    pub const fn vocabulary(self) -> Option<Vocabulary> {
        match self {
            Role::ProviderAdmin => Some(Vocabulary::Provider),
            Role::GlobalAdmin
            | Role::SchoolAdmin
            | Role::Teacher
            | Role::Parent
            | Role::Student => Some(Vocabulary::SchoolStaff),
            Role::Unrecognized => None,
        }
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, Role::Unrecognized)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::KNOWN
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CoreError::UnknownRole(s.to_string()))
    }
}
