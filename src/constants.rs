//! Physical and Timing Constants for the Feels-Like Engine
//!
//! This module defines the empirical coefficients behind the feels-like
//! calculation and the scheduling defaults for the beacon monitor. All
//! values come from published meteorological guidance or from the
//! behavior of the reference thermostat firmware.

// ===== MODEL SELECTION =====

/// Crossover temperature between the two perceived-temperature models (°C).
///
/// At or above this air temperature the NOAA Heat Index applies; below it
/// the vapor-pressure apparent-temperature model applies. The Heat Index
/// polynomial is calibrated in Fahrenheit for warm, humid conditions and
/// degrades badly when extrapolated to cool air, hence the switch.
///
/// Source: NOAA guidance, ~79 °F lower bound of Heat Index validity
pub const HEAT_INDEX_THRESHOLD_C: f64 = 26.0;

// ===== NOAA HEAT INDEX (Fahrenheit / percent space) =====

/// Rothfusz regression coefficients for the NOAA Heat Index.
///
/// `HI = C0 + C1·T + C2·R + C3·T·R + C4·T² + C5·R² + C6·T²·R + C7·T·R² + C8·T²·R²`
/// with T in °F and R in percent relative humidity.
///
/// Source: NWS Technical Attachment SR 90-23 (Rothfusz, 1990)
pub const HI_COEFFS: [f64; 9] = [
    -42.379,
    2.04901523,
    10.14333127,
    -0.22475541,
    -0.00683783,
    -0.05481717,
    0.00122874,
    0.00085282,
    -0.00000199,
];

/// Humidity below which the dry-air Heat Index correction applies (%).
pub const HI_DRY_ADJUST_MAX_RH_PCT: f64 = 13.0;

/// Humidity above which the humid-air Heat Index correction applies (%).
pub const HI_HUMID_ADJUST_MIN_RH_PCT: f64 = 85.0;

/// Temperature band shared by both Heat Index corrections, lower bound (°F).
pub const HI_ADJUST_MIN_F: f64 = 80.0;

/// Dry-air correction band upper bound (°F).
pub const HI_DRY_ADJUST_MAX_F: f64 = 112.0;

/// Humid-air correction band upper bound (°F).
pub const HI_HUMID_ADJUST_MAX_F: f64 = 87.0;

// ===== APPARENT TEMPERATURE (Celsius / hPa space) =====

/// Saturation vapor pressure scale factor (hPa).
///
/// Magnus-form approximation: `e = 6.105 · exp(17.27·T / (237.7 + T)) · RH/100`.
///
/// Source: Steadman (1994) apparent temperature, as used by the
/// Australian Bureau of Meteorology
pub const VAPOR_PRESSURE_SCALE_HPA: f64 = 6.105;

/// Magnus exponent numerator coefficient (dimensionless).
pub const MAGNUS_A: f64 = 17.27;

/// Magnus exponent denominator offset (°C).
pub const MAGNUS_B_C: f64 = 237.7;

/// Vapor pressure weight in the apparent temperature sum (°C per hPa).
pub const AT_VAPOR_COEFF: f64 = 0.33;

/// Wind speed weight in the apparent temperature sum (°C per m/s).
pub const AT_WIND_COEFF: f64 = 0.70;

/// Constant offset of the apparent temperature model (°C).
pub const AT_OFFSET_C: f64 = 4.0;

/// Assumed wind speed for indoor/still-air conditions (m/s).
///
/// The current scope accepts no wind input; the model runs with calm air.
pub const STILL_AIR_WIND_M_PER_S: f64 = 0.0;

// ===== HUMIDITY DOMAIN =====

/// Lower clamp bound for relative humidity input (%).
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Upper clamp bound for relative humidity input (%).
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

// ===== MONITOR TIMING =====

/// Default period between automatic refresh cycles (ms).
///
/// Matches the reference firmware's periodic update loop.
pub const DEFAULT_REFRESH_PERIOD_MS: u64 = 10_000;

/// Default scan window after a refresh kicks off (ms).
///
/// The radio listens this long for a reply broadcast, then gives up
/// until the next cycle.
pub const DEFAULT_SCAN_WINDOW_MS: u64 = 5_000;

/// Default duration of an advertisement pulse (ms).
///
/// Set-point broadcasts are fire-and-forget: advertise briefly, then stop
/// so the radio is free to scan.
pub const DEFAULT_ADVERTISE_PULSE_MS: u64 = 100;
