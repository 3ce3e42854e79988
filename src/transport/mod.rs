//! Delivery transports for shipping records to a collector

pub mod http;

pub use http::HttpTransport;

use crate::core::error::Result;
use crate::core::record::LogRecord;
use async_trait::async_trait;

/// A single-attempt delivery channel to the remote collector
///
/// One call is one attempt: no internal retry, no buffering. Retry policy
/// lives with the caller.
///
/// # Example
///
/// ```no_run
/// use relay_logger::core::{LogRecord, Result};
/// use relay_logger::transport::Transport;
/// use async_trait::async_trait;
///
/// struct NullTransport;
///
/// #[async_trait]
/// impl Transport for NullTransport {
///     async fn deliver(&self, _record: &LogRecord) -> Result<()> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "null"
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Attempt delivery of one record, resolving once the outcome is known
    async fn deliver(&self, record: &LogRecord) -> Result<()>;

    /// Get the transport name
    fn name(&self) -> &str;
}
