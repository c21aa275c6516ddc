//! SchoolHub Observability Module
//!
//! Logging setup for SchoolHub binaries:
//! - Compact console logging filtered by `RUST_LOG` / `LOG_LEVEL`
//! - Daily-rotated JSON log files (with the `file-logging` feature)
//!
//! # Features
//!
//! - `file-logging` (default): Adds the JSON file layer via `tracing-appender`
//!
//! # Examples
//!
//! ```no_run
//! use schoolhub_observability::{LogSettings, init_tracing};
//!
//! init_tracing(&LogSettings::from_env());
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{LogSettings, build_env_filter, init_tracing};
