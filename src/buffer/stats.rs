//! Access statistics for a simulation run.

use std::fmt;

/// Counters collected while replaying a trace.
///
/// A run is single-threaded, so these are plain integers: the runner owns
/// them exclusively and hands a copy to the result.
///
/// # Example
/// ```
/// use pagesim::AccessStats;
///
/// let mut stats = AccessStats::new();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.hit_ratio(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessStats {
    /// Accesses that found the page resident.
    pub hits: u64,

    /// Accesses that had to admit the page.
    pub faults: u64,

    /// Faults that also displaced a resident page.
    pub evictions: u64,
}

impl AccessStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an access that found its page resident.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Record a fault, and an eviction if one happened.
    pub fn record_fault(&mut self, evicted: bool) {
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Total accesses seen.
    pub fn accesses(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit ratio (0.0 to 1.0). Zero when nothing was accessed.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Hit ratio as a percentage (0.0 to 100.0).
    pub fn hit_ratio_percent(&self) -> f64 {
        self.hit_ratio() * 100.0
    }
}

impl fmt::Display for AccessStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_ratio: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_ratio_percent()
        )
    }
}
