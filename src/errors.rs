//! Error Types for the Beacon Engine
//!
//! The calculator itself is total and never fails; errors exist only at the
//! seam with the platform radio and in the bounded event queue. They follow
//! the same rules as the rest of the crate:
//!
//! 1. **Small and `Copy`**: errors cross the scan callback path, so they are
//!    a few bytes with no heap data - `&'static str` and scalar codes only.
//! 2. **Opaque platform codes**: the wireless stack reports failures as an
//!    integer code whose meaning is platform-defined. We carry it through
//!    untouched for the caller to interpret or log.
//! 3. **Actionable**: each variant tells the consumer what degraded - a scan,
//!    an advertisement, the queue, or the reading itself.

use thiserror_no_std::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Failures reported by the monitor and its platform collaborators
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// The platform scanner failed to start or aborted mid-window
    #[error("scan failed with platform code {code}")]
    ScanFailed {
        /// Opaque error code from the wireless stack
        code: i32,
    },

    /// The platform advertiser rejected or aborted a broadcast
    #[error("advertise failed with platform code {code}")]
    AdvertiseFailed {
        /// Opaque error code from the wireless stack
        code: i32,
    },

    /// The event queue was full; the newest event was dropped
    #[error("event queue full, event dropped")]
    QueueFull,

    /// A decoded reading contained a non-finite value
    #[error("reading contained a non-finite value")]
    InvalidReading,
}

#[cfg(feature = "defmt")]
impl defmt::Format for EngineError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ScanFailed { code } => defmt::write!(fmt, "scan failed: {}", code),
            Self::AdvertiseFailed { code } => defmt::write!(fmt, "advertise failed: {}", code),
            Self::QueueFull => defmt::write!(fmt, "event queue full"),
            Self::InvalidReading => defmt::write!(fmt, "non-finite reading"),
        }
    }
}
