//! Time source abstraction for testability.
//!
//! All timed behavior in the shell (boot auto-dismiss, rain animation) is
//! driven by deadlines computed against a `TimeSource`, so tests can advance
//! logical time instead of sleeping and no timer can fire after teardown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Abstraction over the monotonic clock.
pub trait TimeSource: Send + Sync + std::fmt::Debug {
    /// Current instant for measuring elapsed time.
    fn now(&self) -> Instant;

    /// Elapsed time since an earlier instant.
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// Shared time source handle.
pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Production implementation using the real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Test implementation with controllable logical time.
///
/// `now()` returns `base + advanced`; tests move time forward with
/// [`TestTimeSource::advance`] and nothing ever sleeps.
#[derive(Debug)]
pub struct TestTimeSource {
    logical_nanos: AtomicU64,
    base_instant: Instant,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    pub fn new() -> Self {
        Self {
            logical_nanos: AtomicU64::new(0),
            base_instant: Instant::now(),
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Advance logical time by the given duration.
    pub fn advance(&self, duration: Duration) {
        self.logical_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Logical elapsed time since creation.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.logical_nanos.load(Ordering::SeqCst))
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.base_instant + self.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_source_advances_logically() {
        let time = TestTimeSource::new();
        let start = time.now();
        time.advance(Duration::from_millis(1800));
        assert_eq!(time.elapsed_since(start), Duration::from_millis(1800));
    }

    #[test]
    fn real_time_source_is_monotonic() {
        let time = RealTimeSource::new();
        let a = time.now();
        let b = time.now();
        assert!(b >= a);
    }
}
