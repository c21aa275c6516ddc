//! # SchoolHub Config
//!
//! Configuration types for SchoolHub navigation.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`navigation`]: Viewport breakpoint and point-of-sale demo identities
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_config::NavigationConfig;
//!
//! let config = NavigationConfig::from_env();
//! let is_demo = config.is_pos_demo_identity("pos.demo@demo.com");
//! ```

pub mod navigation;

// Re-export commonly used types at crate root
pub use navigation::{ConfigError, NavigationConfig};
