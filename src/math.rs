//! Mathematical utilities for the solar heat gain pipeline.

#[cfg(not(feature = "std"))]
use libm;

use crate::{Error, Result};

/// Largest overshoot of [-1, 1] accepted from floating-point rounding before
/// an inverse trig argument is reported as out of domain.
const UNIT_INTERVAL_TOLERANCE: f64 = 1e-12;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range (-180, 180].
pub fn normalize_degrees_pm_180(degrees: f64) -> f64 {
    let mut normalized = degrees % 360.0;
    if normalized > 180.0 {
        normalized -= 360.0;
    } else if normalized <= -180.0 {
        normalized += 360.0;
    }
    normalized
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Arcsine in degrees, rejecting arguments outside [-1, 1].
///
/// # Errors
/// Returns a `Domain` error naming `quantity` if `x` is not finite or leaves
/// [-1, 1] by more than rounding noise.
pub fn asin_deg(x: f64, quantity: &'static str) -> Result<f64> {
    Ok(radians_to_degrees(asin(unit_interval(x, quantity)?)))
}

/// Arccosine in degrees, rejecting arguments outside [-1, 1].
///
/// # Errors
/// Returns a `Domain` error naming `quantity` if `x` is not finite or leaves
/// [-1, 1] by more than rounding noise.
pub fn acos_deg(x: f64, quantity: &'static str) -> Result<f64> {
    Ok(radians_to_degrees(acos(unit_interval(x, quantity)?)))
}

fn unit_interval(x: f64, quantity: &'static str) -> Result<f64> {
    let limit = 1.0 + UNIT_INTERVAL_TOLERANCE;
    if !(-limit..=limit).contains(&x) {
        return Err(Error::domain(quantity, x));
    }
    Ok(x.clamp(-1.0, 1.0))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes e^x using the appropriate function for the compilation target.
#[inline]
pub fn exp(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.exp();

    #[cfg(not(feature = "std"))]
    return libm::exp(x);
}

/// Computes x^y for a real exponent.
#[inline]
pub fn powf(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.powf(y);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, y);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_trig() {
        assert!((sin_deg(30.0) - 0.5).abs() < EPSILON);
        assert!((cos_deg(60.0) - 0.5).abs() < EPSILON);
        assert!(cos_deg(90.0).abs() < EPSILON);
        assert!((sin_deg(-90.0) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_pm_180() {
        assert_eq!(normalize_degrees_pm_180(0.0), 0.0);
        assert_eq!(normalize_degrees_pm_180(180.0), 180.0);
        assert_eq!(normalize_degrees_pm_180(-180.0), 180.0);
        assert_eq!(normalize_degrees_pm_180(190.0), -170.0);
        assert_eq!(normalize_degrees_pm_180(-190.0), 170.0);
        assert_eq!(normalize_degrees_pm_180(340.0), -20.0);
        assert_eq!(normalize_degrees_pm_180(-340.0), 20.0);
    }

    #[test]
    fn test_inverse_trig_in_degrees() {
        assert!((asin_deg(0.5, "x").unwrap() - 30.0).abs() < EPSILON);
        assert!((acos_deg(0.5, "x").unwrap() - 60.0).abs() < EPSILON);
        assert!(acos_deg(1.0, "x").unwrap().abs() < EPSILON);
        assert!((acos_deg(-1.0, "x").unwrap() - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_inverse_trig_rounding_tolerance() {
        // Rounding noise just past the boundary is absorbed
        assert_eq!(acos_deg(1.0 + 1e-15, "x").unwrap(), 0.0);
        assert!((asin_deg(-1.0 - 1e-15, "x").unwrap() + 90.0).abs() < EPSILON);

        // Real excursions are reported
        let err = acos_deg(1.001, "solar azimuth cosine").unwrap_err();
        assert_eq!(err, Error::domain("solar azimuth cosine", 1.001));
        assert!(asin_deg(-1.5, "x").is_err());
        assert!(asin_deg(f64::NAN, "x").is_err());
    }

    #[test]
    fn test_exp_and_pow() {
        assert!((exp(0.0) - 1.0).abs() < EPSILON);
        assert!((powf(4.0, 0.5) - 2.0).abs() < EPSILON);
        assert!((powf(2.0, -1.0) - 0.5).abs() < EPSILON);
        assert_eq!(floor(2.7), 2.0);
        assert_eq!(floor(-0.5), -1.0);
    }
}
