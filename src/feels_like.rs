//! Feels-Like Temperature Calculation
//!
//! ## Physics Background
//!
//! ### Why Two Models?
//!
//! "Feels like" has no single formula. Human heat perception is dominated
//! by different mechanisms in different regimes:
//!
//! - **Hot and humid**: evaporative cooling of sweat becomes the limiting
//!   factor. The NOAA Heat Index (Rothfusz regression) models this, but it
//!   is a polynomial fit in °F calibrated for roughly 80 °F and above.
//!   Extrapolating it to cool air produces nonsense.
//! - **Cool to mild**: perception tracks vapor pressure and wind. The
//!   Steadman apparent-temperature model works directly in °C:
//!
//! ```text
//! e     = 6.105 · exp(17.27·T / (237.7 + T)) · RH/100     (hPa)
//! T_app = T + 0.33·e − 0.70·v − 4.0                        (°C)
//! ```
//!
//! The crossover sits at 26 °C (≈79 °F), the documented lower edge of Heat
//! Index validity. At exactly 26 °C the Heat Index branch applies.
//!
//! ### Heat Index Corrections
//!
//! The Rothfusz fit overshoots in two corner regions, so NOAA prescribes
//! two adjustments inside the 80–112 °F band:
//!
//! - RH < 13%: subtract `((13 − R)/4) · √((17 − |T − 95|)/17)` for
//!   80 ≤ T ≤ 112
//! - RH > 85%: add `((R − 85)/10) · ((87 − T)/5)` for 80 ≤ T ≤ 87
//!
//! The humidity conditions are disjoint, so at most one correction ever
//! fires.
//!
//! ## Contract
//!
//! [`feels_like`] is a pure, total function. Humidity is silently clamped
//! to [0, 100]; temperature is taken as-is, negatives included. There is no
//! rounding here - display formatting belongs to the presentation layer.
//! Non-finite inputs propagate to a non-finite output rather than erroring,
//! so the function stays total and side-effect free. It holds no state and
//! may be called concurrently from any number of call sites.

use libm::{exp, fabs, sqrt};

use crate::constants::{
    AT_OFFSET_C, AT_VAPOR_COEFF, AT_WIND_COEFF, HEAT_INDEX_THRESHOLD_C, HI_ADJUST_MIN_F,
    HI_COEFFS, HI_DRY_ADJUST_MAX_F, HI_DRY_ADJUST_MAX_RH_PCT, HI_HUMID_ADJUST_MAX_F,
    HI_HUMID_ADJUST_MIN_RH_PCT, HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, MAGNUS_A, MAGNUS_B_C,
    STILL_AIR_WIND_M_PER_S, VAPOR_PRESSURE_SCALE_HPA,
};

/// Compute the feels-like temperature in °C.
///
/// Selects the NOAA Heat Index for `temp_c >= 26.0` and the Steadman
/// apparent-temperature model below that. `humidity_pct` is clamped to
/// [0, 100] before use; out-of-range values are not an error.
pub fn feels_like(temp_c: f64, humidity_pct: f64) -> f64 {
    let rh = humidity_pct.clamp(HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT);

    if temp_c >= HEAT_INDEX_THRESHOLD_C {
        // Polynomial works in °F, so round-trip through Fahrenheit.
        fahrenheit_to_celsius(heat_index_f(celsius_to_fahrenheit(temp_c), rh))
    } else {
        apparent_temp_c(temp_c, rh)
    }
}

/// Convert °C to °F.
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Convert °F to °C.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// NOAA Heat Index in °F, including boundary corrections.
///
/// Expects temperature in °F and humidity in percent.
fn heat_index_f(t: f64, r: f64) -> f64 {
    let [c0, c1, c2, c3, c4, c5, c6, c7, c8] = HI_COEFFS;

    let hi = c0
        + c1 * t
        + c2 * r
        + c3 * t * r
        + c4 * t * t
        + c5 * r * r
        + c6 * t * t * r
        + c7 * t * r * r
        + c8 * t * t * r * r;

    hi + hi_correction(t, r)
}

/// Signed NOAA correction term for the corner regions of the fit.
///
/// The two branches are mutually exclusive: one needs RH < 13%, the other
/// RH > 85%.
fn hi_correction(t: f64, r: f64) -> f64 {
    if r < HI_DRY_ADJUST_MAX_RH_PCT && (HI_ADJUST_MIN_F..=HI_DRY_ADJUST_MAX_F).contains(&t) {
        // Within the band |t - 95| <= 17, so the radicand stays non-negative.
        -(((HI_DRY_ADJUST_MAX_RH_PCT - r) / 4.0) * sqrt((17.0 - fabs(t - 95.0)) / 17.0))
    } else if r > HI_HUMID_ADJUST_MIN_RH_PCT
        && (HI_ADJUST_MIN_F..=HI_HUMID_ADJUST_MAX_F).contains(&t)
    {
        ((r - HI_HUMID_ADJUST_MIN_RH_PCT) / 10.0) * ((HI_HUMID_ADJUST_MAX_F - t) / 5.0)
    } else {
        0.0
    }
}

/// Steadman apparent temperature in °C, still-air form.
fn apparent_temp_c(t: f64, rh: f64) -> f64 {
    let e = VAPOR_PRESSURE_SCALE_HPA * exp((MAGNUS_A * t) / (MAGNUS_B_C + t)) * (rh / 100.0);
    t + AT_VAPOR_COEFF * e - AT_WIND_COEFF * STILL_AIR_WIND_M_PER_S - AT_OFFSET_C
}
