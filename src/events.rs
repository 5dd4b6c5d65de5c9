//! Event Types Flowing Between Engine and Presentation Layer
//!
//! ## Overview
//!
//! The monitor publishes its results as events on a bounded queue instead of
//! mutating shared state. The presentation layer drains the queue at its own
//! pace and updates whatever it renders; the engine never blocks on it and
//! holds no reference to it.
//!
//! ## Memory Model
//!
//! Events move through a fixed-capacity `heapless` queue, so every variant
//! is plain scalar data:
//!
//! - `Copy`, stack-only, no heap allocation anywhere
//! - small enough that the queue stays a few hundred bytes total
//! - readings carry their own timestamps so consumers need no clock
//!
//! Display concerns stay out: values are unrounded `f64`s, and formatting
//! to two decimals (or anything else) is the consumer's job.

use crate::errors::EngineError;
use crate::time::Timestamp;
use crate::traits::Finite;

/// A decoded temperature/humidity pair from a reply broadcast
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Measured air temperature in °C
    pub temp_c: f64,
    /// Measured relative humidity in percent
    pub humidity_pct: f64,
    /// When the reading was received, in ms
    pub timestamp: Timestamp,
}

impl Reading {
    /// True if both measurements are finite numbers
    pub fn is_finite(&self) -> bool {
        self.temp_c.is_finite_value() && self.humidity_pct.is_finite_value()
    }
}

/// A reading together with its computed feels-like temperature
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApparentReading {
    /// Measured air temperature in °C
    pub temp_c: f64,
    /// Measured relative humidity in percent (as received, unclamped)
    pub humidity_pct: f64,
    /// Computed feels-like temperature in °C
    pub feels_like_c: f64,
    /// When the underlying reading was received, in ms
    pub timestamp: Timestamp,
}

/// Everything the engine can report to its consumer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A raw reading arrived from the radio
    Reading(Reading),

    /// A reading was processed into a feels-like value
    Computed(ApparentReading),

    /// The requested set-point changed
    SetPointChanged {
        /// New set-point in whole °C
        celsius: i16,
        /// When the change was made, in ms
        timestamp: Timestamp,
    },

    /// The scanner started or stopped listening
    ScanStateChanged {
        /// True while a scan window is open
        active: bool,
        /// When the transition happened, in ms
        timestamp: Timestamp,
    },

    /// Something went wrong in the engine or the platform layer
    Failure {
        /// What failed
        error: EngineError,
        /// When the failure was observed, in ms
        timestamp: Timestamp,
    },
}

impl Event {
    /// Timestamp of the event in milliseconds
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Event::Reading(r) => r.timestamp,
            Event::Computed(a) => a.timestamp,
            Event::SetPointChanged { timestamp, .. } => *timestamp,
            Event::ScanStateChanged { timestamp, .. } => *timestamp,
            Event::Failure { timestamp, .. } => *timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_stays_small() {
        // Events sit in a fixed-capacity queue; keep them lean
        assert!(core::mem::size_of::<Event>() <= 48);
    }

    #[test]
    fn timestamp_accessor() {
        let reading = Reading {
            temp_c: 24.04,
            humidity_pct: 61.2,
            timestamp: 5_000,
        };
        assert_eq!(Event::Reading(reading).timestamp(), 5_000);

        let failure = Event::Failure {
            error: EngineError::QueueFull,
            timestamp: 7_500,
        };
        assert_eq!(failure.timestamp(), 7_500);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn failure_event_serializes() {
        // Failure embeds EngineError, so both types need serde derives
        let event = Event::Failure {
            error: EngineError::ScanFailed { code: 2 },
            timestamp: 1_000,
        };

        let json = serde_json::to_string(&event).expect("serialize");
        let back: Event = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }

    #[test]
    fn finite_reading_check() {
        let good = Reading {
            temp_c: 21.0,
            humidity_pct: 55.0,
            timestamp: 0,
        };
        assert!(good.is_finite());

        let bad = Reading {
            temp_c: f64::NAN,
            ..good
        };
        assert!(!bad.is_finite());
    }
}
