//! Solar geometry: declination, altitude and azimuth.
//!
//! Uses the simple declination formula and the spherical-triangle relations of ASHRAE Handbook
//! Fundamentals, Ch. 14. Azimuth is measured from south and carries the sign of the hour angle,
//! so it is negative in the morning (sun in the east) and positive in the afternoon.

use crate::error::{check_day_of_year, check_latitude};
use crate::math::{acos_deg, asin_deg, cos_deg, degrees_to_radians, sin, sin_deg};
use crate::{Error, Result, SolarPosition};

/// Maximum declination, the obliquity of the ecliptic used by the model.
pub const MAX_DECLINATION: f64 = 23.45;

/// Denominators of the azimuth formula below this magnitude are treated as degenerate.
const AZIMUTH_DENOMINATOR_EPSILON: f64 = 1e-9;

/// Solar declination in degrees for a day of the year.
///
/// δ = 23.45° · sin(360/365 · (d + 284))
///
/// # Errors
/// Returns `InvalidDayOfYear` if the day is outside 1-366.
///
/// # Example
/// ```
/// # use solar_heat_gain::position::declination;
/// assert!((declination(172).unwrap() - 23.45).abs() < 0.01); // June 21st
/// ```
pub fn declination(day_of_year: u32) -> Result<f64> {
    check_day_of_year(day_of_year)?;
    Ok(calculate_declination(day_of_year))
}

fn calculate_declination(day_of_year: u32) -> f64 {
    MAX_DECLINATION * sin(degrees_to_radians(360.0 / 365.0 * (f64::from(day_of_year) + 284.0)))
}

/// Calculate the position of the sun.
///
/// # Arguments
/// * `day_of_year` - Day of year (1-366)
/// * `hour_angle` - Hour angle in degrees (0 at solar noon, positive in the afternoon)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
///
/// # Returns
/// Solar position; the azimuth is only resolved while the sun is above the horizon.
///
/// # Errors
/// Returns `InvalidDayOfYear` or `InvalidLatitude` for out-of-range inputs, a `Domain` error if
/// an inverse trig argument leaves [-1, 1], and `DegenerateGeometry` when the sun stands at the
/// zenith or the observer at a pole, where the azimuth is undefined.
///
/// # Example
/// ```
/// # use solar_heat_gain::position::solar_position;
/// // Atlanta, July 21st, 1:15 pm apparent solar time
/// let position = solar_position(202, 18.75, 33.64).unwrap();
/// assert!((position.altitude() - 68.8).abs() < 0.1);
/// assert!((position.azimuth().unwrap() - 56.3).abs() < 0.1);
/// ```
pub fn solar_position(day_of_year: u32, hour_angle: f64, latitude: f64) -> Result<SolarPosition> {
    check_day_of_year(day_of_year)?;
    check_latitude(latitude)?;
    if !hour_angle.is_finite() {
        return Err(Error::domain("hour angle", hour_angle));
    }

    let declination = calculate_declination(day_of_year);

    let sin_altitude = cos_deg(latitude) * cos_deg(hour_angle) * cos_deg(declination)
        + sin_deg(latitude) * sin_deg(declination);
    let altitude = asin_deg(sin_altitude, "solar altitude sine")?;

    let azimuth = if altitude > 0.0 {
        Some(solar_azimuth(altitude, declination, hour_angle, latitude)?)
    } else {
        None
    };

    tracing::trace!(
        declination,
        altitude,
        azimuth = azimuth.unwrap_or(f64::NAN),
        "computed solar position"
    );

    SolarPosition::new(declination, altitude, azimuth)
}

fn solar_azimuth(altitude: f64, declination: f64, hour_angle: f64, latitude: f64) -> Result<f64> {
    let denominator = cos_deg(altitude) * cos_deg(latitude);
    if (-AZIMUTH_DENOMINATOR_EPSILON..=AZIMUTH_DENOMINATOR_EPSILON).contains(&denominator) {
        return Err(Error::degenerate_geometry(
            "solar azimuth undefined with the sun at the zenith or the observer at a pole",
        ));
    }

    let cos_azimuth =
        (sin_deg(altitude) * sin_deg(latitude) - sin_deg(declination)) / denominator;
    let azimuth = acos_deg(cos_azimuth, "solar azimuth cosine")?;

    Ok(if hour_angle < 0.0 { -azimuth } else { azimuth })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const EPSILON: f64 = 1e-6;
    const ATLANTA_LATITUDE: f64 = 33.64;

    #[test]
    fn test_declination_extremes() {
        assert!((declination(172).unwrap() - 23.45).abs() < 1e-3);
        assert!((declination(355).unwrap() + 23.45).abs() < 1e-3);
        assert!(declination(80).unwrap().abs() < 0.5);
    }

    #[test]
    fn test_declination_bounded_all_year() {
        for day in 1..=366 {
            let value = declination(day).unwrap();
            assert!(value.is_finite());
            assert!((-MAX_DECLINATION..=MAX_DECLINATION).contains(&value), "day {day}: {value}");
        }
        assert!(declination(0).is_err());
        assert!(declination(367).is_err());
    }

    #[test]
    fn test_atlanta_afternoon_position() {
        let position = solar_position(202, 18.75, ATLANTA_LATITUDE).unwrap();

        assert!((position.declination() - 20.441_513).abs() < EPSILON);
        assert!((position.altitude() - 68.777_961).abs() < 1e-4);
        assert!((position.azimuth().unwrap() - 56.312_776).abs() < 1e-4);
    }

    #[test]
    fn test_morning_azimuth_is_east() {
        let morning = solar_position(202, -71.018_408, ATLANTA_LATITUDE).unwrap();
        let afternoon = solar_position(202, 71.018_408, ATLANTA_LATITUDE).unwrap();

        assert!((morning.altitude() - 26.565_294).abs() < 1e-4);
        assert!((morning.azimuth().unwrap() + 97.834_599).abs() < 1e-4);
        assert!((morning.altitude() - afternoon.altitude()).abs() < EPSILON);
        assert!((morning.azimuth().unwrap() + afternoon.azimuth().unwrap()).abs() < EPSILON);
    }

    #[test]
    fn test_noon_altitude_is_daily_maximum() {
        // Summer solstice
        let noon = solar_position(172, 0.0, ATLANTA_LATITUDE).unwrap();
        let expected = 90.0 - ATLANTA_LATITUDE + noon.declination();
        assert!((noon.altitude() - expected).abs() < EPSILON);
        assert!(noon.azimuth().unwrap().abs() < 1e-3);

        let mut hour_angle = -180.0;
        while hour_angle <= 180.0 {
            let position = solar_position(172, hour_angle, ATLANTA_LATITUDE).unwrap();
            assert!(position.altitude() <= noon.altitude() + EPSILON);
            hour_angle += 2.5;
        }
    }

    #[test]
    fn test_night_has_no_azimuth() {
        let midnight = solar_position(202, 180.0, ATLANTA_LATITUDE).unwrap();
        assert!(midnight.altitude() < 0.0);
        assert!(!midnight.is_sun_up());
        assert_eq!(midnight.azimuth(), None);
    }

    #[test]
    fn test_polar_observer_is_degenerate() {
        let err = solar_position(172, 30.0, 90.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateGeometry);

        // Polar night needs no azimuth and succeeds
        let winter = solar_position(355, 30.0, 90.0).unwrap();
        assert!(!winter.is_sun_up());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(solar_position(0, 0.0, 0.0).is_err());
        assert!(solar_position(100, 0.0, 91.0).is_err());
        assert!(solar_position(100, f64::NAN, 0.0).is_err());
    }
}
