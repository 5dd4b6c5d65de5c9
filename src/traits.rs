//! Seam Between the Engine and the Platform Wireless Glue
//!
//! The surrounding application owns the radio: it decodes reply broadcasts
//! into a temperature/humidity pair and observes scan failures. Everything
//! it needs to tell the engine fits in two calls, so that is the whole
//! interface. The engine side ([`crate::Monitor`]) implements this trait;
//! the platform side calls it from its scan callback.

/// Receiver for decoded scan results
///
/// Implemented by the engine, invoked by the platform scan callback. Both
/// methods are plain synchronous calls: the implementation must not block.
pub trait ScanEvents {
    /// A reply broadcast was decoded into a reading
    fn on_reading(&mut self, temp_c: f64, humidity_pct: f64);

    /// The scan failed with a platform-defined error code
    fn on_failure(&mut self, code: i32);
}

/// Check for values that are mathematically usable
pub trait Finite {
    /// True if the value is a finite number (not NaN or infinite)
    fn is_finite_value(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl Finite for f32 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_floats() {
        assert!(21.5f64.is_finite_value());
        assert!(!f64::NAN.is_finite_value());
        assert!(!f64::INFINITY.is_finite_value());
        assert!(!f32::NEG_INFINITY.is_finite_value());
    }
}
