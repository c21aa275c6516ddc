//! Notification badge counts keyed by view identifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::nav_entry::NavEntry;

/// Badge counts supplied by the messaging collaborator.
///
/// Counts are unsigned, so a badge is never negative. Missing keys read as
/// zero and a zero badge is never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationCounts(HashMap<String, u32>);

impl NotificationCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, view_id: impl Into<String>, count: u32) {
        self.0.insert(view_id.into(), count);
    }

    pub fn get(&self, view_id: &str) -> u32 {
        self.0.get(view_id).copied().unwrap_or(0)
    }

    /// Badge value for an entry, zero when absent.
    pub fn badge(&self, entry: &NavEntry) -> u32 {
        self.get(entry.id)
    }

    /// Badge value to render, `None` when there is nothing to show.
    pub fn visible_badge(&self, entry: &NavEntry) -> Option<u32> {
        Some(self.badge(entry)).filter(|count| *count > 0)
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for NotificationCounts {
    fn from_iter<T: IntoIterator<Item = (K, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav_entry::views;

    #[test]
    fn test_absent_entry_has_no_badge() {
        let counts = NotificationCounts::new();
        let entry = NavEntry::open(views::MESSAGES, "mail");
        assert_eq!(counts.badge(&entry), 0);
        assert_eq!(counts.visible_badge(&entry), None);
    }

    #[test]
    fn test_zero_count_is_hidden() {
        let counts: NotificationCounts = [(views::MESSAGES, 0)].into_iter().collect();
        let entry = NavEntry::open(views::MESSAGES, "mail");
        assert_eq!(counts.visible_badge(&entry), None);
    }

    #[test]
    fn test_positive_count_is_visible() {
        let mut counts = NotificationCounts::new();
        counts.set(views::MESSAGES, 4);
        let entry = NavEntry::open(views::MESSAGES, "mail");
        assert_eq!(counts.badge(&entry), 4);
        assert_eq!(counts.visible_badge(&entry), Some(4));
    }

    #[test]
    fn test_deserialize_from_object() {
        let counts: NotificationCounts =
            serde_json::from_str(r#"{"messages": 2, "orders": 7}"#).unwrap();
        assert_eq!(counts.get("orders"), 7);
        assert_eq!(counts.get("pos"), 0);
        assert!(serde_json::from_str::<NotificationCounts>(r#"{"messages": -1}"#).is_err());
    }
}
