use thiserror::Error;

/// Errors raised when parsing externally supplied tags.
///
/// The navigation core itself never fails; these errors only surface at
/// strict parsing boundaries such as CLI argument validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown permission tag: {0}")]
    UnknownPermission(String),

    #[error("unknown role tag: {0}")]
    UnknownRole(String),
}
