use crate::config::ConfigError;

/// Failure kinds the gateways can surface. Validation problems are not
/// errors; they come back as data from [`crate::validation::validate`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network unreachable: {0}")]
    Network(String),

    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected API response: {0}")]
    Api(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for the UI layer to map onto
    /// notifications.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Server { .. } => "SERVER_ERROR",
            AppError::Api(_) => "API_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Config(_) => "CONFIG_ERROR",
            // Unexpected failures surface like any other server-side fault.
            AppError::Internal(_) => "SERVER_ERROR",
        }
    }

    /// HTTP status carried by the failure, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Server { status, .. } => Some(*status),
            AppError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
