//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Collector answered a delivery attempt with a non-success status
    #[error("Delivery rejected by collector: HTTP {status}")]
    DeliveryRejected { status: u16 },

    /// A delivery attempt never produced a response (timeout, DNS failure,
    /// connection refused)
    #[error("Delivery transport failure: {message}")]
    TransportFailure { message: String },

    /// The durable store failed during a queue operation
    #[error("Persistence error for key '{key}': {message}")]
    Persistence { key: String, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a rejected delivery error from an HTTP status code
    pub fn rejected(status: u16) -> Self {
        LoggerError::DeliveryRejected { status }
    }

    /// Create a transport failure error
    pub fn transport(message: impl Into<String>) -> Self {
        LoggerError::TransportFailure {
            message: message.into(),
        }
    }

    /// Create a persistence error for a store key
    pub fn persistence(key: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Persistence {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// True for single-attempt delivery failures, the errors that feed the
    /// retry queue rather than surfacing anywhere
    pub fn is_delivery_failure(&self) -> bool {
        matches!(
            self,
            LoggerError::DeliveryRejected { .. } | LoggerError::TransportFailure { .. }
        )
    }
}
