//! Unordered, duplicate-free set of permissions held by a user.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::permissions::{Permission, Vocabulary};

/// The permissions granted to the current identity.
///
/// Backed by a `BTreeSet` so iteration order is stable, which keeps log output
/// and serialized payloads deterministic. Deserialization is lenient: tags that
/// do not name a known permission are dropped instead of failing the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<Permission>")]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw wire tags, skipping anything unrecognized.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for tag in tags {
            let tag = tag.as_ref();
            match tag.parse::<Permission>() {
                Ok(permission) => {
                    set.insert(permission);
                }
                Err(_) => debug!(tag, "Skipping unrecognized permission tag"),
            }
        }
        Self(set)
    }

    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// True when the set holds exactly `permission` and nothing else.
    pub fn is_exactly(&self, permission: Permission) -> bool {
        self.0.len() == 1 && self.0.contains(&permission)
    }

    /// Keep only permissions from `vocabulary`.
    ///
    /// `None` (an unrecognized role) yields an empty set.
    pub fn scoped_to(&self, vocabulary: Option<Vocabulary>) -> PermissionSet {
        match vocabulary {
            Some(vocabulary) => self
                .iter()
                .filter(|p| p.vocabulary() == vocabulary)
                .collect(),
            None => PermissionSet::new(),
        }
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Permission; N]> for PermissionSet {
    fn from(permissions: [Permission; N]) -> Self {
        permissions.into_iter().collect()
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(tags: Vec<String>) -> Self {
        PermissionSet::from_tags(tags)
    }
}

impl From<PermissionSet> for Vec<Permission> {
    fn from(set: PermissionSet) -> Self {
        set.0.into_iter().collect()
    }
}
