//! Astronomical and unit-conversion constants shared across the workspace.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

/// The full turn, 2π.
#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TAU: f64 = 6.283185307179586476925287;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const RAD_PER_HOUR: f64 = TAU / HOURS_PER_DAY;

pub const HOURS_PER_RAD: f64 = HOURS_PER_DAY / TAU;

pub const ARCSEC_PER_DEG: f64 = 3600.0;

pub const RAD_PER_ARCSEC: f64 = TAU / (360.0 * ARCSEC_PER_DEG);

#[allow(clippy::excessive_precision)]
pub const DEG_PER_RAD: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const RAD_PER_DEG: f64 = 1.745329251994329576923691e-2;

pub const SECONDS_PER_MINUTE: f64 = 60.0;

pub const MINUTES_PER_DEGREE: f64 = 60.0;

pub const MILLIS_PER_DAY: f64 = 1000.0 * 3600.0 * 24.0;

pub const MILLIS_PER_HOUR: f64 = 1000.0 * 3600.0;

/// Length of a Julian century in days.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;
