//! # Relay Logger
//!
//! A client-side logging library that ships structured events to a remote
//! HTTP collector and retries failed deliveries through a durable queue.
//!
//! ## Features
//!
//! - **Fire-and-forget**: `log` never blocks and never fails to the caller
//! - **Durable Retry**: failed deliveries persist in a FIFO queue across restarts
//! - **Pluggable Seams**: transport and storage behind small traits
//! - **Local Trace**: best-effort colored console echo of every record

pub mod console;
pub mod core;
pub mod store;
pub mod transport;

pub mod prelude {
    pub use crate::console::ConsoleTrace;
    pub use crate::core::{
        DeliveryStats, FieldValue, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, RecordMeta, Result, RetryQueue, CONTEXT_SENTINEL, DEFAULT_APP_NAME,
        DEFAULT_ENVIRONMENT, DEFAULT_FLUSH_INTERVAL_MS, DEFAULT_QUEUE_KEY,
    };
    pub use crate::store::{FileStore, KvStore, MemoryStore};
    pub use crate::transport::{HttpTransport, Transport};
}

pub use crate::console::ConsoleTrace;
pub use crate::core::{
    DeliveryStats, FieldValue, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, RecordMeta, Result, RetryQueue, CONTEXT_SENTINEL, DEFAULT_APP_NAME,
    DEFAULT_ENVIRONMENT, DEFAULT_FLUSH_INTERVAL_MS, DEFAULT_QUEUE_KEY,
};
pub use crate::store::{FileStore, KvStore, MemoryStore};
pub use crate::transport::{HttpTransport, Transport};
