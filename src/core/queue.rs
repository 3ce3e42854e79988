//! Durable FIFO retry queue

use super::error::{LoggerError, Result};
use super::record::LogRecord;
use crate::store::KvStore;
use std::sync::Arc;

/// FIFO queue of records awaiting redelivery, persisted as one JSON array
/// under a single store key
///
/// All operations are read-modify-write against the store with no
/// cross-instance locking: two logger instances sharing a key can race on
/// head removal and clobber each other's writes. Single-instance use per
/// key is the supported shape.
pub struct RetryQueue {
    store: Arc<dyn KvStore>,
    key: String,
}

impl RetryQueue {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the full queue. A missing key is an empty queue.
    pub fn load(&self) -> Result<Vec<LogRecord>> {
        match self.store.get(&self.key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| LoggerError::persistence(&self.key, e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Append one record to the tail
    pub fn push(&self, record: &LogRecord) -> Result<()> {
        let mut queue = self.load()?;
        queue.push(record.clone());
        self.persist(&queue)
    }

    /// Remove exactly the current head
    ///
    /// Re-reads the queue first so records appended since the caller's last
    /// read are kept.
    pub fn pop_head(&self) -> Result<()> {
        let mut queue = self.load()?;
        if !queue.is_empty() {
            queue.remove(0);
            self.persist(&queue)?;
        }
        Ok(())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn persist(&self, queue: &[LogRecord]) -> Result<()> {
        let raw = serde_json::to_string(queue)?;
        self.store.set(&self.key, &raw)
    }
}
