//! Log record structure

use super::config::{DEFAULT_APP_NAME, DEFAULT_ENVIRONMENT};
use super::log_level::LogLevel;
use super::meta::RecordMeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Substituted for `origin` and `userAgent` when the embedding application
/// provides no client context
pub const CONTEXT_SENTINEL: &str = "node";

/// One logged event, serialized to the collector wire format
///
/// Field names on the wire are camelCase. Every field except `meta` is
/// always present and non-null; `meta` defaults to an empty mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// ISO-8601 creation time
    pub timestamp: DateTime<Utc>,
    /// Logical subsystem or page emitting the event
    pub stack: String,
    pub level: LogLevel,
    /// Finer-grained component tag
    pub package: String,
    pub message: String,
    pub app_name: String,
    pub environment: String,
    pub meta: RecordMeta,
    /// Page URL at emission time, or the sentinel
    pub origin: String,
    /// Client identifier string, or the sentinel
    pub user_agent: String,
}

impl LogRecord {
    pub fn new(
        level: LogLevel,
        stack: impl Into<String>,
        package: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            stack: stack.into(),
            level,
            package: package.into(),
            message: message.into(),
            app_name: DEFAULT_APP_NAME.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            meta: RecordMeta::new(),
            origin: CONTEXT_SENTINEL.to_string(),
            user_agent: CONTEXT_SENTINEL.to_string(),
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
    pub fn with_meta(mut self, meta: RecordMeta) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
