//! Arena usage statistics.

use std::cell::Cell;

use serde::Serialize;

/// Point-in-time view of an arena's usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArenaStats {
    /// Total bytes owned by the arena.
    pub capacity: usize,
    /// Bytes committed so far, padding included.
    pub used: usize,
    /// Bytes lost to alignment padding.
    pub padding: usize,
    /// Number of successful allocations.
    pub allocations: u64,
    /// Number of allocations rejected with `OutOfMemory`.
    pub failures: u64,
}

impl ArenaStats {
    /// Bytes still available for allocation.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.used)
    }

    /// Fraction of the capacity that has been committed, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn utilisation(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.used as f64 / self.capacity as f64).min(1.0)
    }
}

/// Single-threaded counters updated by the arena on every request.
#[derive(Debug, Default)]
pub struct ArenaCounters {
    padding: Cell<usize>,
    allocations: Cell<u64>,
    failures: Cell<u64>,
}

impl ArenaCounters {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful allocation that consumed `padding` bytes of alignment.
    pub fn record_allocation(&self, padding: usize) {
        self.padding.set(self.padding.get() + padding);
        self.allocations.set(self.allocations.get() + 1);
    }

    /// Record a rejected allocation.
    pub fn record_failure(&self) {
        self.failures.set(self.failures.get() + 1);
    }

    /// Combine the counters with the arena's cursor into a snapshot.
    pub fn snapshot(&self, capacity: usize, used: usize) -> ArenaStats {
        ArenaStats {
            capacity,
            used,
            padding: self.padding.get(),
            allocations: self.allocations.get(),
            failures: self.failures.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_counters_are_zeroed() {
        let counters = ArenaCounters::new();
        let snap = counters.snapshot(64, 0);
        assert_eq!(snap.capacity, 64);
        assert_eq!(snap.used, 0);
        assert_eq!(snap.padding, 0);
        assert_eq!(snap.allocations, 0);
        assert_eq!(snap.failures, 0);
    }

    #[test]
    fn record_and_snapshot() {
        let counters = ArenaCounters::new();
        counters.record_allocation(0);
        counters.record_allocation(7);
        counters.record_failure();
        let snap = counters.snapshot(128, 24);
        assert_eq!(snap.allocations, 2);
        assert_eq!(snap.padding, 7);
        assert_eq!(snap.failures, 1);
        assert_eq!(snap.remaining(), 104);
    }

    #[test]
    fn utilisation_bounds() {
        let empty = ArenaStats::default();
        assert!(empty.utilisation().abs() < f64::EPSILON);

        let full = ArenaStats {
            capacity: 40,
            used: 40,
            ..ArenaStats::default()
        };
        assert!((full.utilisation() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inconsistent_snapshot_saturates() {
        let stats = ArenaStats {
            capacity: 8,
            used: 12,
            ..ArenaStats::default()
        };
        assert_eq!(stats.remaining(), 0);
        assert!((stats.utilisation() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_to_json() {
        let stats = ArenaStats {
            capacity: 16,
            used: 9,
            padding: 1,
            allocations: 2,
            failures: 0,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["capacity"], 16);
        assert_eq!(json["used"], 9);
        assert_eq!(json["padding"], 1);
    }
}
