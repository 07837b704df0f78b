//! Orientation of the receiving surface relative to the sun.

use crate::math::{acos_deg, cos_deg, normalize_degrees_pm_180, sin_deg};
use crate::{Result, Surface};

/// Whether direct sun can reach the front face of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceExposure {
    /// The sun is behind the plane of the surface (|γ| > 90°)
    SelfShaded {
        /// Surface-solar azimuth γ in degrees
        surface_solar_azimuth: f64,
    },
    /// The sun is in front of the surface
    Sunlit {
        /// Surface-solar azimuth γ in degrees
        surface_solar_azimuth: f64,
        /// Angle of incidence θ in degrees
        incidence_angle: f64,
    },
}

impl SurfaceExposure {
    /// Gets the surface-solar azimuth γ in degrees.
    #[must_use]
    pub const fn surface_solar_azimuth(&self) -> f64 {
        match self {
            Self::SelfShaded {
                surface_solar_azimuth,
            }
            | Self::Sunlit {
                surface_solar_azimuth,
                ..
            } => *surface_solar_azimuth,
        }
    }

    /// Gets the angle of incidence if the surface is sunlit.
    #[must_use]
    pub const fn incidence_angle(&self) -> Option<f64> {
        if let Self::Sunlit {
            incidence_angle, ..
        } = self
        {
            Some(*incidence_angle)
        } else {
            None
        }
    }

    /// Checks if the surface faces the sun.
    #[must_use]
    pub const fn is_sunlit(&self) -> bool {
        matches!(self, Self::Sunlit { .. })
    }
}

/// Surface-solar azimuth γ = φ − ψ in degrees, wrapped into (-180, 180].
#[must_use]
pub fn surface_solar_azimuth(solar_azimuth: f64, surface_azimuth: f64) -> f64 {
    normalize_degrees_pm_180(solar_azimuth - surface_azimuth)
}

/// Angle of incidence θ in degrees between the sun's rays and the surface normal.
///
/// cos θ = cos β · cos γ · sin Σ + sin β · cos Σ
///
/// # Errors
/// Returns a `Domain` error if cos θ evaluates outside [-1, 1].
pub fn incidence_angle(altitude: f64, surface_solar_azimuth: f64, tilt: f64) -> Result<f64> {
    let cos_theta = cos_deg(altitude) * cos_deg(surface_solar_azimuth) * sin_deg(tilt)
        + sin_deg(altitude) * cos_deg(tilt);
    acos_deg(cos_theta, "incidence angle cosine")
}

/// Classify a surface as sunlit or self-shaded for a sun above the horizon.
///
/// # Arguments
/// * `altitude` - Solar altitude β in degrees
/// * `solar_azimuth` - Solar azimuth φ in degrees from south
/// * `surface` - Receiving surface
///
/// # Errors
/// Returns a `Domain` error if the incidence angle cannot be evaluated.
///
/// # Example
/// ```
/// # use solar_heat_gain::{Surface, surface::resolve_exposure};
/// let south_wall = Surface::vertical(0.0).unwrap();
/// let north_wall = Surface::vertical(180.0).unwrap();
///
/// // Afternoon sun in the south-west
/// assert!(resolve_exposure(60.0, 50.0, &south_wall).unwrap().is_sunlit());
/// assert!(!resolve_exposure(60.0, 50.0, &north_wall).unwrap().is_sunlit());
/// ```
pub fn resolve_exposure(
    altitude: f64,
    solar_azimuth: f64,
    surface: &Surface,
) -> Result<SurfaceExposure> {
    let gamma = surface_solar_azimuth(solar_azimuth, surface.azimuth());
    if !(-90.0..=90.0).contains(&gamma) {
        return Ok(SurfaceExposure::SelfShaded {
            surface_solar_azimuth: gamma,
        });
    }

    let theta = incidence_angle(altitude, gamma, surface.tilt())?;
    Ok(SurfaceExposure::Sunlit {
        surface_solar_azimuth: gamma,
        incidence_angle: theta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_surface_solar_azimuth_wraps() {
        assert_eq!(surface_solar_azimuth(56.0, 0.0), 56.0);
        assert_eq!(surface_solar_azimuth(-97.0, -90.0), -7.0);
        // Sun in the north-east, surface facing north-west
        assert_eq!(surface_solar_azimuth(-170.0, 170.0), 20.0);
        assert_eq!(surface_solar_azimuth(170.0, -170.0), -20.0);
    }

    #[test]
    fn test_incidence_angle() {
        // Horizontal surface: incidence equals the zenith angle
        assert!((incidence_angle(60.0, 37.0, 0.0).unwrap() - 30.0).abs() < EPSILON);
        // Vertical surface facing the sun
        assert!((incidence_angle(30.0, 0.0, 90.0).unwrap() - 30.0).abs() < EPSILON);
        // Atlanta, July 21st, 3 pm, south wall
        assert!((incidence_angle(68.777_961, 56.312_776, 90.0).unwrap() - 78.417_590).abs() < 1e-4);
    }

    #[test]
    fn test_sunlit_surface() {
        let wall = Surface::vertical(0.0).unwrap();
        let exposure = resolve_exposure(68.777_961, 56.312_776, &wall).unwrap();
        assert!(exposure.is_sunlit());
        assert!((exposure.surface_solar_azimuth() - 56.312_776).abs() < EPSILON);
        assert!((exposure.incidence_angle().unwrap() - 78.417_590).abs() < 1e-4);
    }

    #[test]
    fn test_self_shaded_surface() {
        let north = Surface::vertical(180.0).unwrap();
        let exposure = resolve_exposure(68.8, 56.3, &north).unwrap();
        assert!(!exposure.is_sunlit());
        assert_eq!(exposure.incidence_angle(), None);
        assert!((exposure.surface_solar_azimuth() + 123.7).abs() < EPSILON);

        let west = Surface::vertical(90.0).unwrap();
        assert!(!resolve_exposure(26.4, -97.9, &west).unwrap().is_sunlit());
    }

    #[test]
    fn test_boundary_gamma_is_sunlit() {
        let east = Surface::vertical(-90.0).unwrap();
        let exposure = resolve_exposure(40.0, 0.0, &east).unwrap();
        assert!(exposure.is_sunlit());
        assert!((exposure.incidence_angle().unwrap() - 90.0).abs() < EPSILON);
    }
}
