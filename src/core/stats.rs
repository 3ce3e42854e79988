//! Delivery statistics for observability
//!
//! Counters for monitoring delivery health: confirmed deliveries, records
//! parked in the retry queue, records lost outright, flush passes run.

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for delivery observability
///
/// # Example
///
/// ```
/// use relay_logger::DeliveryStats;
///
/// let stats = DeliveryStats::new();
/// stats.record_delivered();
/// stats.record_queued();
///
/// assert_eq!(stats.delivered_count(), 1);
/// assert_eq!(stats.queued_count(), 1);
/// ```
#[derive(Debug)]
pub struct DeliveryStats {
    /// Records confirmed by the collector, live or drained from the queue
    delivered: AtomicU64,

    /// Records that entered the retry queue after a failed attempt
    queued: AtomicU64,

    /// Records that could not even be queued
    lost: AtomicU64,

    /// Flush passes executed
    flush_passes: AtomicU64,
}

impl DeliveryStats {
    /// Create a new stats instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            queued: AtomicU64::new(0),
            lost: AtomicU64::new(0),
            flush_passes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn queued_count(&self) -> u64 {
        self.queued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lost_count(&self) -> u64 {
        self.lost.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn flush_pass_count(&self) -> u64 {
        self.flush_passes.load(Ordering::Relaxed)
    }

    /// Record a confirmed delivery
    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed attempt parked in the retry queue
    #[inline]
    pub fn record_queued(&self) -> u64 {
        self.queued.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an event dropped because it could not be queued
    #[inline]
    pub fn record_lost(&self) -> u64 {
        self.lost.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an executed flush pass
    #[inline]
    pub fn record_flush_pass(&self) -> u64 {
        self.flush_passes.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for DeliveryStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DeliveryStats {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            delivered: AtomicU64::new(self.delivered_count()),
            queued: AtomicU64::new(self.queued_count()),
            lost: AtomicU64::new(self.lost_count()),
            flush_passes: AtomicU64::new(self.flush_pass_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = DeliveryStats::new();
        assert_eq!(stats.delivered_count(), 0);
        assert_eq!(stats.queued_count(), 0);
        assert_eq!(stats.lost_count(), 0);
        assert_eq!(stats.flush_pass_count(), 0);
    }

    #[test]
    fn test_stats_record() {
        let stats = DeliveryStats::new();
        assert_eq!(stats.record_delivered(), 0); // returns previous value
        stats.record_delivered();
        stats.record_queued();
        stats.record_flush_pass();

        assert_eq!(stats.delivered_count(), 2);
        assert_eq!(stats.queued_count(), 1);
        assert_eq!(stats.flush_pass_count(), 1);
    }

    #[test]
    fn test_stats_clone_is_snapshot() {
        let stats = DeliveryStats::new();
        stats.record_queued();

        let snapshot = stats.clone();
        stats.record_queued();

        assert_eq!(stats.queued_count(), 2);
        assert_eq!(snapshot.queued_count(), 1);
    }
}
