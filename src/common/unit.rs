//! Measurement units for presentation geometry.
//!
//! All document geometry is stored in EMUs (English Metric Units), the native
//! unit of OOXML drawing coordinates. Font sizes and paragraph spacing travel
//! as hundredths of a point, gradient stop positions as 1/100 000 fractions,
//! and rotation angles as 1/60 000 degrees.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMUs, rounding to the nearest unit.
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Convert centimeters to EMUs, rounding to the nearest unit.
#[inline]
pub fn cm_to_emu(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64).round() as i64
}

/// Convert points to EMUs, rounding to the nearest unit.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Convert a point size to the hundredths-of-a-point form used by `sz` and
/// `a:spcPts` attributes.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// Convert degrees to the 1/60 000 degree form used by `ang` attributes.
/// Angles are normalized into [0, 360) first.
#[inline]
pub fn degrees_to_angle_units(degrees: f64) -> i64 {
    (degrees.rem_euclid(360.0) * 60_000.0).round() as i64
}

/// Convert a [0, 1] fraction to the 1/100 000 form used by gradient stop
/// positions.
#[inline]
pub fn fraction_to_stop_units(fraction: f64) -> i64 {
    (fraction * 100_000.0).round() as i64
}
