use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging settings read from the environment.
///
/// - `LOG_LEVEL`: Default level for SchoolHub crates when `RUST_LOG` is unset (default: "info")
/// - `LOG_DIR`: Directory for rotated JSON logs (default: "storage/logs")
/// - `LOG_TO_FILE`: Set to "false" to disable the file layer (default: "true")
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub log_dir: String,
    pub to_file: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: "storage/logs".to_string(),
            to_file: true,
        }
    }
}

impl LogSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or(defaults.level),
            log_dir: std::env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            to_file: std::env::var("LOG_TO_FILE")
                .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(defaults.to_file),
        }
    }
}

/// Directive string used when `RUST_LOG` is not set.
pub fn default_directives(level: &str) -> String {
    format!("schoolhub={level},schoolhub_core={level},schoolhub_cli={level}")
}

/// `RUST_LOG` wins; otherwise SchoolHub crates log at `settings.level`.
pub fn build_env_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&settings.level)))
}

/// Initialize console logging, plus a rotated JSON file when enabled.
///
/// Console output goes to stderr so CLI output on stdout stays machine-readable.
pub fn init_tracing(settings: &LogSettings) {
    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_env_filter(settings));

    let registry = tracing_subscriber::registry().with(console_layer);

    #[cfg(feature = "file-logging")]
    {
        if settings.to_file {
            match std::fs::create_dir_all(&settings.log_dir) {
                Ok(()) => {
                    let json_appender = tracing_appender::rolling::daily(
                        &settings.log_dir,
                        "schoolhub.json",
                    );
                    let json_layer = fmt::layer()
                        .json()
                        .with_writer(json_appender)
                        .with_current_span(true)
                        .with_span_list(true)
                        .with_filter(build_env_filter(settings));

                    registry.with(json_layer).init();
                    return;
                }
                Err(e) => {
                    eprintln!(
                        "Failed to create log directory {}: {}. Logging to console only.",
                        settings.log_dir, e
                    );
                }
            }
        }
    }

    registry.init();
}
