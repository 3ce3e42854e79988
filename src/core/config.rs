//! Logger configuration

use super::error::{LoggerError, Result};

/// Application name used when none is configured
pub const DEFAULT_APP_NAME: &str = "app";

/// Deployment environment tag used when none is configured
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Store key holding the retry queue when none is configured
pub const DEFAULT_QUEUE_KEY: &str = "app_log_queue_v1";

/// Delay before a scheduled flush pass runs, in milliseconds
pub const DEFAULT_FLUSH_INTERVAL_MS: u64 = 5000;

/// Construction-time logger options
///
/// Only `endpoint` is required; every other field has a default. The
/// optional `origin` and `user_agent` describe the embedding application's
/// client context and fall back to a sentinel when absent.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Remote collector URL, e.g. "http://localhost:4000/logs"
    pub endpoint: String,
    pub app_name: String,
    pub environment: String,
    pub queue_key: String,
    pub flush_interval_ms: u64,
    pub origin: Option<String>,
    pub user_agent: Option<String>,
}

impl LoggerConfig {
    /// Create a configuration with the given endpoint and all defaults
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            queue_key: DEFAULT_QUEUE_KEY.to_string(),
            flush_interval_ms: DEFAULT_FLUSH_INTERVAL_MS,
            origin: None,
            user_agent: None,
        }
    }

    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    #[must_use]
    pub fn with_queue_key(mut self, queue_key: impl Into<String>) -> Self {
        self.queue_key = queue_key.into();
        self
    }

    #[must_use]
    pub fn with_flush_interval_ms(mut self, interval_ms: u64) -> Self {
        self.flush_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration, failing fast on a missing endpoint
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(LoggerError::config("Logger", "endpoint is required"));
        }
        if self.flush_interval_ms == 0 {
            return Err(LoggerError::config(
                "Logger",
                "flush_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }
}
