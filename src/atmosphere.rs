//! ASHRAE clear-sky model.
//!
//! Beam and diffuse normal irradiance follow the "tau model" of ASHRAE Handbook Fundamentals
//! (2009 onwards), Ch. 14:
//!
//! - E_b = E_o · exp(−τ_b · m^ab)
//! - E_d = E_o · exp(−τ_d · m^ad)
//!
//! where the pseudo optical depths τ_b and τ_d are tabulated per month for each climate site, m is
//! the relative air mass after Kasten & Young (1989) and the exponents ab and ad are correlated
//! with the optical depths.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_day_of_year, check_month, check_optical_depth};
use crate::math::{cos, degrees_to_radians, exp, powf, sin_deg};
use crate::{Error, Result};

/// Solar constant in W/m².
pub const SOLAR_CONSTANT: f64 = 1367.0;

/// Monthly clear-sky optical depths of a climate site.
///
/// # Example
/// ```
/// # use solar_heat_gain::atmosphere::ClimateSite;
/// let site = ClimateSite::ATLANTA;
/// assert_eq!(site.beam_optical_depth(7).unwrap(), 0.556);
/// assert_eq!(site.diffuse_optical_depth(7).unwrap(), 1.779);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateSite {
    name: &'static str,
    beam: [f64; 12],
    diffuse: [f64; 12],
}

impl ClimateSite {
    /// Atlanta Hartsfield-Jackson International Airport, Georgia, USA.
    pub const ATLANTA: Self = Self {
        name: "Atlanta",
        beam: [
            0.325, 0.349, 0.383, 0.395, 0.448, 0.505, 0.556, 0.593, 0.431, 0.373, 0.339, 0.320,
        ],
        diffuse: [
            2.461, 2.316, 2.176, 2.175, 2.028, 1.892, 1.779, 1.679, 2.151, 2.317, 2.422, 2.514,
        ],
    };

    /// Istanbul Atatürk Airport, Turkey.
    pub const ISTANBUL: Self = Self {
        name: "Istanbul",
        beam: [
            0.354, 0.386, 0.430, 0.457, 0.451, 0.449, 0.460, 0.470, 0.444, 0.408, 0.376, 0.357,
        ],
        diffuse: [
            2.210, 2.057, 1.931, 1.892, 1.986, 2.046, 2.015, 1.973, 2.011, 2.107, 2.167, 2.217,
        ],
    };

    /// Creates a site from its monthly beam and diffuse optical depths, January first.
    ///
    /// # Errors
    /// Returns `InvalidOpticalDepth` if any depth is not finite and positive.
    pub fn new(name: &'static str, beam: [f64; 12], diffuse: [f64; 12]) -> Result<Self> {
        for &depth in beam.iter().chain(diffuse.iter()) {
            check_optical_depth(depth)?;
        }
        Ok(Self {
            name,
            beam,
            diffuse,
        })
    }

    /// Gets the site name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Beam optical depth τ_b for a month (1-12).
    ///
    /// # Errors
    /// Returns `InvalidMonth` if month is outside 1-12.
    pub fn beam_optical_depth(&self, month: u32) -> Result<f64> {
        check_month(month)?;
        Ok(self.beam[month as usize - 1])
    }

    /// Diffuse optical depth τ_d for a month (1-12).
    ///
    /// # Errors
    /// Returns `InvalidMonth` if month is outside 1-12.
    pub fn diffuse_optical_depth(&self, month: u32) -> Result<f64> {
        check_month(month)?;
        Ok(self.diffuse[month as usize - 1])
    }
}

/// Clear-sky state of the atmosphere for one sun position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericParameters {
    /// Beam optical depth τ_b
    pub beam_optical_depth: f64,
    /// Diffuse optical depth τ_d
    pub diffuse_optical_depth: f64,
    /// Relative air mass m
    pub air_mass: f64,
    /// Beam air mass exponent ab
    pub beam_exponent: f64,
    /// Diffuse air mass exponent ad
    pub diffuse_exponent: f64,
    /// Extraterrestrial normal irradiance E_o in W/m²
    pub extraterrestrial: f64,
    /// Beam normal irradiance E_b in W/m²
    pub beam_normal: f64,
    /// Diffuse normal irradiance E_d in W/m²
    pub diffuse_normal: f64,
}

/// Relative air mass for a solar altitude in degrees (Kasten & Young, 1989).
///
/// # Errors
/// Returns a `Domain` error unless the sun is above the horizon (0° < β ≤ 90°).
pub fn relative_air_mass(altitude: f64) -> Result<f64> {
    if !(altitude > 0.0 && altitude <= 90.0) {
        return Err(Error::domain("air mass altitude", altitude));
    }
    Ok(1.0 / (sin_deg(altitude) + 0.50572 * powf(6.07995 + altitude, -1.6364)))
}

/// Air mass exponents `(ab, ad)` for the beam and diffuse optical depths.
#[must_use]
pub fn air_mass_exponents(beam_optical_depth: f64, diffuse_optical_depth: f64) -> (f64, f64) {
    let (tau_b, tau_d) = (beam_optical_depth, diffuse_optical_depth);
    let beam = 1.219 - 0.043 * tau_b - 0.151 * tau_d - 0.204 * tau_b * tau_d;
    let diffuse = 0.202 + 0.852 * tau_b - 0.007 * tau_d - 0.357 * tau_b * tau_d;
    (beam, diffuse)
}

/// Extraterrestrial normal irradiance in W/m² for a day of the year.
///
/// # Errors
/// Returns `InvalidDayOfYear` if the day is outside 1-366.
///
/// # Example
/// ```
/// # use solar_heat_gain::atmosphere::extraterrestrial_irradiance;
/// // Earth is closest to the sun in early January
/// assert!(extraterrestrial_irradiance(3).unwrap() > extraterrestrial_irradiance(185).unwrap());
/// ```
pub fn extraterrestrial_irradiance(day_of_year: u32) -> Result<f64> {
    check_day_of_year(day_of_year)?;
    Ok(calculate_extraterrestrial_irradiance(day_of_year))
}

fn calculate_extraterrestrial_irradiance(day_of_year: u32) -> f64 {
    SOLAR_CONSTANT
        * (1.0 + 0.033 * cos(degrees_to_radians(360.0 / 365.0 * (f64::from(day_of_year) - 3.0))))
}

/// Evaluate the clear-sky model for one sun position.
///
/// # Arguments
/// * `site` - Climate site supplying the optical depths
/// * `month` - Month selecting the optical depths (1-12)
/// * `day_of_year` - Day of year for the extraterrestrial irradiance (1-366)
/// * `altitude` - Solar altitude in degrees, must be above the horizon
///
/// # Errors
/// Returns `InvalidMonth` or `InvalidDayOfYear` for out-of-range calendar inputs and a `Domain`
/// error if the sun is not above the horizon.
///
/// # Example
/// ```
/// # use solar_heat_gain::atmosphere::{clear_sky, ClimateSite};
/// let sky = clear_sky(&ClimateSite::ATLANTA, 7, 202, 68.6).unwrap();
/// assert!(sky.beam_normal > sky.diffuse_normal);
/// assert!(sky.beam_normal < sky.extraterrestrial);
/// ```
pub fn clear_sky(
    site: &ClimateSite,
    month: u32,
    day_of_year: u32,
    altitude: f64,
) -> Result<AtmosphericParameters> {
    let beam_optical_depth = site.beam_optical_depth(month)?;
    let diffuse_optical_depth = site.diffuse_optical_depth(month)?;
    let extraterrestrial = extraterrestrial_irradiance(day_of_year)?;
    let air_mass = relative_air_mass(altitude)?;
    let (beam_exponent, diffuse_exponent) =
        air_mass_exponents(beam_optical_depth, diffuse_optical_depth);

    let beam_normal = extraterrestrial * exp(-beam_optical_depth * powf(air_mass, beam_exponent));
    let diffuse_normal =
        extraterrestrial * exp(-diffuse_optical_depth * powf(air_mass, diffuse_exponent));

    tracing::trace!(
        site = site.name(),
        month,
        air_mass,
        beam_normal,
        diffuse_normal,
        "evaluated clear sky"
    );

    Ok(AtmosphericParameters {
        beam_optical_depth,
        diffuse_optical_depth,
        air_mass,
        beam_exponent,
        diffuse_exponent,
        extraterrestrial,
        beam_normal,
        diffuse_normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_site_tables() {
        assert_eq!(ClimateSite::ATLANTA.name(), "Atlanta");
        assert_eq!(ClimateSite::ATLANTA.beam_optical_depth(1).unwrap(), 0.325);
        assert_eq!(ClimateSite::ATLANTA.diffuse_optical_depth(12).unwrap(), 2.514);
        assert_eq!(ClimateSite::ISTANBUL.beam_optical_depth(8).unwrap(), 0.470);
        assert_eq!(ClimateSite::ISTANBUL.diffuse_optical_depth(1).unwrap(), 2.210);

        assert!(ClimateSite::ATLANTA.beam_optical_depth(0).is_err());
        assert!(ClimateSite::ATLANTA.diffuse_optical_depth(13).is_err());
    }

    #[test]
    fn test_custom_site_validation() {
        let site = ClimateSite::new("Flat", [0.4; 12], [2.0; 12]).unwrap();
        assert_eq!(site.name(), "Flat");
        assert_eq!(site.beam_optical_depth(5).unwrap(), 0.4);

        let mut beam = [0.4; 12];
        beam[3] = 0.0;
        assert!(ClimateSite::new("Broken", beam, [2.0; 12]).is_err());

        let mut diffuse = [2.0; 12];
        diffuse[11] = f64::NAN;
        assert!(ClimateSite::new("Broken", [0.4; 12], diffuse).is_err());
    }

    #[test]
    fn test_relative_air_mass() {
        // Close to 1 with the sun overhead, growing towards the horizon
        assert!((relative_air_mass(90.0).unwrap() - 1.0).abs() < 1e-3);
        assert!((relative_air_mass(68.777_961).unwrap() - 1.072_250_3).abs() < EPSILON);
        assert!((relative_air_mass(30.0).unwrap() - 1.9942).abs() < 1e-3);
        assert!(relative_air_mass(1.0).unwrap() > 25.0);

        assert!(relative_air_mass(0.0).is_err());
        assert!(relative_air_mass(-5.0).is_err());
        assert!(relative_air_mass(f64::NAN).is_err());
    }

    #[test]
    fn test_air_mass_exponents() {
        let (ab, ad) = air_mass_exponents(0.556, 1.779);
        assert!((ab - 0.724_681_704).abs() < 1e-9);
        assert!((ad - 0.310_141_732).abs() < 1e-9);
    }

    #[test]
    fn test_extraterrestrial_irradiance() {
        // ASHRAE Fundamentals Ch. 14 Table 2
        assert!((extraterrestrial_irradiance(21).unwrap() - 1410.0).abs() < 1.0);
        assert!((extraterrestrial_irradiance(172).unwrap() - 1323.0).abs() < 1.0);

        let perihelion = extraterrestrial_irradiance(3).unwrap();
        assert!((perihelion - SOLAR_CONSTANT * 1.033).abs() < EPSILON);

        assert!(extraterrestrial_irradiance(1).unwrap().is_finite());
        assert!(extraterrestrial_irradiance(366).unwrap().is_finite());
        assert!(extraterrestrial_irradiance(0).is_err());
    }

    #[test]
    fn test_clear_sky_atlanta_july() {
        let sky = clear_sky(&ClimateSite::ATLANTA, 7, 202, 68.777_961).unwrap();
        assert_eq!(sky.beam_optical_depth, 0.556);
        assert_eq!(sky.diffuse_optical_depth, 1.779);
        assert!((sky.extraterrestrial - 1323.696_476).abs() < EPSILON);
        assert!((sky.beam_normal - 737.5642).abs() < 1e-3);
        assert!((sky.diffuse_normal - 214.9219).abs() < 1e-3);
    }

    #[test]
    fn test_clear_sky_bounded_by_extraterrestrial() {
        for site in [ClimateSite::ATLANTA, ClimateSite::ISTANBUL] {
            for month in 1..=12 {
                let mut altitude = 0.5;
                while altitude <= 90.0 {
                    let sky = clear_sky(&site, month, 15 + 30 * (month - 1), altitude).unwrap();
                    assert!(sky.beam_normal >= 0.0 && sky.beam_normal <= sky.extraterrestrial);
                    assert!(sky.diffuse_normal >= 0.0 && sky.diffuse_normal <= sky.extraterrestrial);
                    altitude += 0.5;
                }
            }
        }
    }

    #[test]
    fn test_clear_sky_requires_daylight() {
        assert!(clear_sky(&ClimateSite::ATLANTA, 7, 202, 0.0).is_err());
        assert!(clear_sky(&ClimateSite::ATLANTA, 13, 202, 45.0).is_err());
        assert!(clear_sky(&ClimateSite::ATLANTA, 7, 400, 45.0).is_err());
    }
}
