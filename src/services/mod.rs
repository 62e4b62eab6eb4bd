//! Injectable effect sources.
//!
//! Production code uses the real system clock and entropy; tests swap in
//! controllable implementations for fast, deterministic runs.

pub mod random;
pub mod time_source;

pub use random::{RandomSource, ScriptedRandom, SystemRandom};
pub use time_source::{RealTimeSource, SharedTimeSource, TestTimeSource, TimeSource};
