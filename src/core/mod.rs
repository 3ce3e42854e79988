//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod meta;
pub mod queue;
pub mod record;
pub mod stats;

pub use config::{
    LoggerConfig, DEFAULT_APP_NAME, DEFAULT_ENVIRONMENT, DEFAULT_FLUSH_INTERVAL_MS,
    DEFAULT_QUEUE_KEY,
};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use meta::{FieldValue, RecordMeta};
pub use queue::RetryQueue;
pub use record::{LogRecord, CONTEXT_SENTINEL};
pub use stats::DeliveryStats;
