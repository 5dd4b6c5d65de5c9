//! Feels-like temperature engine for thermostat beacons
//!
//! A phone (or any device with a short-range radio) periodically broadcasts
//! a set-point, listens for a reply carrying a measured temperature and
//! humidity, and shows the user what that reading actually feels like. This
//! crate is everything in that loop except the radio and the screen:
//!
//! - [`feels_like`]: the pure calculator - NOAA Heat Index above 26 °C,
//!   Steadman apparent temperature below, humidity clamped to [0, 100]
//! - [`Monitor`]: a poll-driven scheduler that times the advertise/scan
//!   cycle and publishes results through a bounded event queue
//! - [`ScanEvents`]: the two-method seam the platform scan callback feeds
//!
//! Designed for `no_std` targets: no allocation, no blocking, `libm` for
//! the math.
//!
//! ```
//! use feelslike_core::{Monitor, ScanEvents};
//!
//! let mut monitor: Monitor = Monitor::default();
//!
//! // Platform tick: run due radio commands
//! for action in monitor.poll(10_000) {
//!     // hand `action` to the wireless stack
//!     let _ = action;
//! }
//!
//! // Platform scan callback: a reply broadcast was decoded
//! monitor.on_reading(24.04, 61.2);
//!
//! // Presentation layer: drain results
//! while let Some(event) = monitor.pop_event() {
//!     let _ = event;
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod events;
pub mod feels_like;
pub mod history;
pub mod monitor;
pub mod time;
pub mod traits;

// Public API
pub use errors::{EngineError, EngineResult};
pub use events::{ApparentReading, Event, Reading};
pub use feels_like::{celsius_to_fahrenheit, fahrenheit_to_celsius, feels_like};
pub use history::History;
pub use monitor::{Action, Frame, Monitor, MonitorConfig};
pub use time::{Clock, ManualClock, Timestamp};
pub use traits::{Finite, ScanEvents};

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
