//! Main logger implementation

use super::config::LoggerConfig;
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::meta::RecordMeta;
use super::queue::RetryQueue;
use super::record::LogRecord;
use super::stats::DeliveryStats;
use crate::console::ConsoleTrace;
use crate::store::{FileStore, KvStore};
use crate::transport::{HttpTransport, Transport};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Fire-and-forget structured logger with durable retry
///
/// Every `log` call attempts immediate delivery to the collector on a
/// detached task. A failed attempt lands in the persistent retry queue and
/// schedules a flush pass that drains the queue head-first. Nothing a
/// `log` call does can fail or block the caller.
///
/// Cheap to clone; clones share the same queue, transport, and flush guard.
///
/// # Example
///
/// ```no_run
/// use relay_logger::prelude::*;
///
/// # async fn run() -> Result<()> {
/// let logger = Logger::builder()
///     .endpoint("http://localhost:4000/logs")
///     .app_name("shortener")
///     .build()?;
///
/// logger.info("UI", "shortener", "link created", None);
/// logger.error(
///     "UI",
///     "storage",
///     "quota exceeded",
///     Some(RecordMeta::new().with_field("key", "short_links_v1")),
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    config: LoggerConfig,
    transport: Arc<dyn Transport>,
    queue: RetryQueue,
    console: Option<ConsoleTrace>,
    stats: DeliveryStats,
    /// Instance-owned guard: at most one pending flush timer at a time.
    /// Set when a flush is scheduled, cleared when that pass ends.
    flush_scheduled: AtomicBool,
    handle: Handle,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a logger from a prepared configuration with the default HTTP
    /// transport and file-backed store
    pub fn with_config(config: LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config).build()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.inner.config
    }

    pub fn stats(&self) -> &DeliveryStats {
        &self.inner.stats
    }

    /// Log one event
    ///
    /// Builds the record, echoes it to the diagnostic console, and launches
    /// a detached delivery attempt. Returns immediately; the outcome is
    /// observable only through the collector, the queue, or [`Logger::stats`].
    pub fn log(
        &self,
        stack: impl Into<String>,
        level: LogLevel,
        package: impl Into<String>,
        message: impl Into<String>,
        meta: Option<RecordMeta>,
    ) {
        let record = self.inner.build_record(level, stack, package, message, meta);

        if let Some(ref console) = self.inner.console {
            console.trace(&record);
        }

        let inner = Arc::clone(&self.inner);
        self.inner.handle.spawn(async move {
            match inner.transport.deliver(&record).await {
                Ok(()) => {
                    inner.stats.record_delivered();
                }
                Err(failure) => LoggerInner::recover_failed_delivery(&inner, record, failure),
            }
        });
    }

    #[inline]
    pub fn debug(
        &self,
        stack: impl Into<String>,
        package: impl Into<String>,
        message: impl Into<String>,
        meta: Option<RecordMeta>,
    ) {
        self.log(stack, LogLevel::Debug, package, message, meta);
    }

    #[inline]
    pub fn info(
        &self,
        stack: impl Into<String>,
        package: impl Into<String>,
        message: impl Into<String>,
        meta: Option<RecordMeta>,
    ) {
        self.log(stack, LogLevel::Info, package, message, meta);
    }

    #[inline]
    pub fn warn(
        &self,
        stack: impl Into<String>,
        package: impl Into<String>,
        message: impl Into<String>,
        meta: Option<RecordMeta>,
    ) {
        self.log(stack, LogLevel::Warn, package, message, meta);
    }

    #[inline]
    pub fn error(
        &self,
        stack: impl Into<String>,
        package: impl Into<String>,
        message: impl Into<String>,
        meta: Option<RecordMeta>,
    ) {
        self.log(stack, LogLevel::Error, package, message, meta);
    }

    /// Request a flush pass after the configured interval
    ///
    /// A no-op while one is already pending. A pass that stops early does
    /// not reschedule itself, so an external periodic caller can use this
    /// to resume draining a backlog.
    pub fn schedule_flush(&self) {
        LoggerInner::schedule_flush(&self.inner);
    }
}

impl LoggerInner {
    fn build_record(
        &self,
        level: LogLevel,
        stack: impl Into<String>,
        package: impl Into<String>,
        message: impl Into<String>,
        meta: Option<RecordMeta>,
    ) -> LogRecord {
        let mut record = LogRecord::new(level, stack, package, message)
            .with_app_name(&self.config.app_name)
            .with_environment(&self.config.environment);

        if let Some(ref origin) = self.config.origin {
            record = record.with_origin(origin);
        }
        if let Some(ref user_agent) = self.config.user_agent {
            record = record.with_user_agent(user_agent);
        }
        if let Some(meta) = meta {
            record = record.with_meta(meta);
        }

        record
    }

    /// Convert a failed live attempt into queue growth plus a scheduled
    /// retry. Nothing propagates to the caller of `log`; a record that
    /// cannot even be queued is counted and dropped.
    fn recover_failed_delivery(this: &Arc<Self>, record: LogRecord, _failure: LoggerError) {
        match this.queue.push(&record) {
            Ok(()) => {
                this.stats.record_queued();
            }
            Err(_persistence) => {
                this.stats.record_lost();
            }
        }
        Self::schedule_flush(this);
    }

    fn schedule_flush(this: &Arc<Self>) {
        if this.flush_scheduled.swap(true, Ordering::SeqCst) {
            return;
        }

        let inner = Arc::clone(this);
        let delay = Duration::from_millis(this.config.flush_interval_ms);
        this.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            inner.flush_queue().await;
        });
    }

    /// One flush pass over the persisted queue: head first, one awaited
    /// attempt at a time, stopping at the first failure so nothing is
    /// removed speculatively and nothing is reordered around a stuck
    /// record. Clears the scheduling guard when the pass ends, whatever
    /// the outcome.
    async fn flush_queue(&self) {
        self.stats.record_flush_pass();

        if let Err(_persistence) = self.drain_pass().await {
            // store trouble mid-pass: give up this round, queue untouched
        }

        self.flush_scheduled.store(false, Ordering::SeqCst);
    }

    async fn drain_pass(&self) -> Result<()> {
        let queue = self.queue.load()?;

        for record in &queue {
            match self.transport.deliver(record).await {
                Ok(()) => {
                    // re-reads before removal, so enqueues that raced in
                    // behind the head survive
                    self.queue.pop_head()?;
                    self.stats.record_delivered();
                }
                Err(_failure) => break,
            }
        }

        Ok(())
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
///
/// ```no_run
/// use relay_logger::prelude::*;
/// use std::sync::Arc;
///
/// # async fn run() -> Result<()> {
/// let logger = Logger::builder()
///     .endpoint("http://localhost:4000/logs")
///     .environment("staging")
///     .flush_interval_ms(2000)
///     .store(Arc::new(MemoryStore::new()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct LoggerBuilder {
    endpoint: Option<String>,
    app_name: String,
    environment: String,
    queue_key: String,
    flush_interval_ms: u64,
    origin: Option<String>,
    user_agent: Option<String>,
    store: Option<Arc<dyn KvStore>>,
    transport: Option<Arc<dyn Transport>>,
    console_trace: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            app_name: super::config::DEFAULT_APP_NAME.to_string(),
            environment: super::config::DEFAULT_ENVIRONMENT.to_string(),
            queue_key: super::config::DEFAULT_QUEUE_KEY.to_string(),
            flush_interval_ms: super::config::DEFAULT_FLUSH_INTERVAL_MS,
            origin: None,
            user_agent: None,
            store: None,
            transport: None,
            console_trace: true,
        }
    }

    fn from_config(config: LoggerConfig) -> Self {
        Self {
            endpoint: Some(config.endpoint),
            app_name: config.app_name,
            environment: config.environment,
            queue_key: config.queue_key,
            flush_interval_ms: config.flush_interval_ms,
            origin: config.origin,
            user_agent: config.user_agent,
            store: None,
            transport: None,
            console_trace: true,
        }
    }

    /// Set the collector URL (required)
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    #[must_use]
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    #[must_use]
    pub fn queue_key(mut self, queue_key: impl Into<String>) -> Self {
        self.queue_key = queue_key.into();
        self
    }

    #[must_use]
    pub fn flush_interval_ms(mut self, interval_ms: u64) -> Self {
        self.flush_interval_ms = interval_ms;
        self
    }

    /// Set the page URL reported as the records' origin
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the client identifier reported with each record
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom store instead of the default file-backed one
    #[must_use]
    pub fn store(mut self, store: Arc<dyn KvStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a custom transport instead of the default HTTP one
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Enable or disable the diagnostic console echo (default: enabled)
    #[must_use]
    pub fn console_trace(mut self, enabled: bool) -> Self {
        self.console_trace = enabled;
        self
    }

    /// Build the logger
    ///
    /// Fails fast with a configuration error when the endpoint is missing
    /// or empty, or when no async runtime is available for delivery tasks.
    /// As a side effect, schedules a first flush pass for any backlog a
    /// previous run left in the store.
    pub fn build(self) -> Result<Logger> {
        let config = LoggerConfig {
            endpoint: self.endpoint.unwrap_or_default(),
            app_name: self.app_name,
            environment: self.environment,
            queue_key: self.queue_key,
            flush_interval_ms: self.flush_interval_ms,
            origin: self.origin,
            user_agent: self.user_agent,
        };
        config.validate()?;

        let handle = Handle::try_current().map_err(|_| {
            LoggerError::config("Logger", "an async runtime is required for delivery tasks")
        })?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(&config.endpoint)?),
        };

        let store: Arc<dyn KvStore> = match self.store {
            Some(store) => store,
            None => Arc::new(FileStore::open_default(&config.app_name)?),
        };
        let queue = RetryQueue::new(store, &config.queue_key);

        let inner = Arc::new(LoggerInner {
            config,
            transport,
            queue,
            console: self.console_trace.then(ConsoleTrace::new),
            stats: DeliveryStats::new(),
            flush_scheduled: AtomicBool::new(false),
            handle,
        });

        // first drain for any backlog persisted by an earlier run
        LoggerInner::schedule_flush(&inner);

        Ok(Logger { inner })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
