//! Meas Clock Infrastructure
//!
//! Provides time sources for production and tests:
//!
//! - [`SystemClock`]: wall-clock UTC
//! - [`ManualClock`]: frozen time that only moves when told to, so cache
//!   freshness and market hours can be tested deterministically
//!
//! ## Usage
//!
//! ```ignore
//! use meas_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::new(friday_evening);
//! clock.advance(Duration::minutes(59));
//! assert!(clock.now() > friday_evening);
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use meas_ports::Clock;
