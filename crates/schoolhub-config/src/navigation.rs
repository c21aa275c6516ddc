//! Navigation configuration.
//!
//! # Configuration
//!
//! - `NAV_MOBILE_BREAKPOINT_PX`: Viewport width (in CSS pixels) below which the
//!   dashboard is considered narrow and the sidebar behaves as an overlay
//!   (default: 768)
//! - `NAV_POS_DEMO_IDENTITIES`: Comma-separated identities (emails) that are
//!   flagged as point-of-sale demo users and land on the `pos` view
//!   (default: empty)
//!
//! The demo identity list is an explicit opt-in. Nothing is flagged unless a
//! deployment lists it here.

use std::env;

use thiserror::Error;

const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Navigation settings for the dashboard shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationConfig {
    /// Widths strictly below this value count as a narrow (mobile) viewport.
    pub mobile_breakpoint_px: u32,

    /// Normalised (trimmed, lowercase) point-of-sale demo identities.
    pub pos_demo_identities: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            pos_demo_identities: Vec::new(),
        }
    }
}

impl NavigationConfig {
    /// Creates a new `NavigationConfig` from environment variables.
    ///
    /// Falls back to default values if environment variables are not set
    /// or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            mobile_breakpoint_px: env::var("NAV_MOBILE_BREAKPOINT_PX")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|px| *px > 0)
                .unwrap_or(DEFAULT_MOBILE_BREAKPOINT_PX),
            pos_demo_identities: env::var("NAV_POS_DEMO_IDENTITIES")
                .map(|v| parse_identity_list(&v))
                .unwrap_or_default(),
        }
    }

    /// Like [`from_env`](Self::from_env) but rejects malformed values.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let mobile_breakpoint_px = match env::var("NAV_MOBILE_BREAKPOINT_PX") {
            Ok(value) => parse_breakpoint(&value)?,
            Err(_) => DEFAULT_MOBILE_BREAKPOINT_PX,
        };

        Ok(Self {
            mobile_breakpoint_px,
            pos_demo_identities: env::var("NAV_POS_DEMO_IDENTITIES")
                .map(|v| parse_identity_list(&v))
                .unwrap_or_default(),
        })
    }

    pub fn with_pos_demo_identities<I, S>(mut self, identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pos_demo_identities = identities
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// Whether `email` is a configured point-of-sale demo identity.
    pub fn is_pos_demo_identity(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        !email.is_empty() && self.pos_demo_identities.iter().any(|id| *id == email)
    }

    pub fn is_narrow(&self, viewport_width_px: u32) -> bool {
        viewport_width_px < self.mobile_breakpoint_px
    }
}

fn parse_breakpoint(value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|px| *px > 0)
        .ok_or_else(|| ConfigError::InvalidNumber {
            name: "NAV_MOBILE_BREAKPOINT_PX",
            value: value.to_string(),
        })
}

fn parse_identity_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NavigationConfig::default();
        assert_eq!(config.mobile_breakpoint_px, 768);
        assert!(config.pos_demo_identities.is_empty());
    }

    #[test]
    fn test_is_narrow() {
        let config = NavigationConfig::default();
        assert!(config.is_narrow(375));
        assert!(config.is_narrow(767));
        assert!(!config.is_narrow(768));
        assert!(!config.is_narrow(1440));
    }

    #[test]
    fn test_pos_demo_identity_is_opt_in() {
        let config = NavigationConfig::default();
        assert!(!config.is_pos_demo_identity("pos.demo@demo.com"));
    }

    #[test]
    fn test_pos_demo_identity_matching() {
        let config =
            NavigationConfig::default().with_pos_demo_identities([" POS.Demo@demo.com ", ""]);
        assert_eq!(config.pos_demo_identities, vec!["pos.demo@demo.com"]);
        assert!(config.is_pos_demo_identity("pos.demo@demo.com"));
        assert!(config.is_pos_demo_identity("Pos.Demo@Demo.com"));
        assert!(!config.is_pos_demo_identity("owner@demo.com"));
        assert!(!config.is_pos_demo_identity("  "));
    }

    #[test]
    fn test_parse_identity_list() {
        assert_eq!(
            parse_identity_list("a@x.com, B@x.com,,"),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
        assert!(parse_identity_list("").is_empty());
    }

    #[test]
    fn test_parse_breakpoint() {
        assert_eq!(parse_breakpoint(" 1024 "), Ok(1024));
        assert!(parse_breakpoint("0").is_err());
        assert!(parse_breakpoint("wide").is_err());
        assert_eq!(
            parse_breakpoint("-5"),
            Err(ConfigError::InvalidNumber {
                name: "NAV_MOBILE_BREAKPOINT_PX",
                value: "-5".to_string()
            })
        );
    }
}
