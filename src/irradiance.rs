//! Clear-sky irradiance on a tilted surface.

use crate::atmosphere::AtmosphericParameters;
use crate::math::{cos_deg, sin_deg};
use crate::{IncidentIrradiance, Surface};

/// Lower bound of the sky-diffuse angle factor Y.
const MIN_DIFFUSE_ANGLE_FACTOR: f64 = 0.45;

/// Ratio Y of sky diffuse irradiance on a vertical surface to that on a horizontal one.
///
/// Y = max(0.45, 0.55 + 0.437 cos θ + 0.313 cos² θ)
#[must_use]
pub fn diffuse_angle_factor(incidence_angle: f64) -> f64 {
    let cos_theta = cos_deg(incidence_angle);
    (0.55 + 0.437 * cos_theta + 0.313 * cos_theta * cos_theta).max(MIN_DIFFUSE_ANGLE_FACTOR)
}

/// Resolve the clear-sky irradiance components on a sunlit surface.
///
/// # Arguments
/// * `sky` - Clear-sky normal irradiances
/// * `altitude` - Solar altitude β in degrees
/// * `incidence_angle` - Angle of incidence θ in degrees
/// * `surface` - Receiving surface (tilt and ground reflectance)
///
/// The beam component never goes negative: a surface facing away from the beam receives none.
///
/// # Example
/// ```
/// # use solar_heat_gain::{Surface, atmosphere::{clear_sky, ClimateSite}};
/// # use solar_heat_gain::irradiance::incident_irradiance;
/// let sky = clear_sky(&ClimateSite::ATLANTA, 7, 202, 68.6).unwrap();
/// let incident = incident_irradiance(&sky, 68.6, 21.4, &Surface::horizontal());
/// assert_eq!(incident.reflected, 0.0);
/// assert!(incident.beam > incident.diffuse);
/// ```
#[must_use]
pub fn incident_irradiance(
    sky: &AtmosphericParameters,
    altitude: f64,
    incidence_angle: f64,
    surface: &Surface,
) -> IncidentIrradiance {
    let beam = (sky.beam_normal * cos_deg(incidence_angle)).max(0.0);
    let diffuse = sky.diffuse_normal * diffuse_angle_factor(incidence_angle);
    let reflected = (sky.beam_normal * sin_deg(altitude) + sky.diffuse_normal)
        * surface.ground_reflectance()
        * (1.0 - cos_deg(surface.tilt()))
        / 2.0;

    tracing::trace!(beam, diffuse, reflected, "projected irradiance onto surface");

    IncidentIrradiance {
        beam,
        diffuse,
        reflected,
        incidence_angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atmosphere::{ClimateSite, clear_sky};

    const EPSILON: f64 = 1e-6;
    const ALTITUDE: f64 = 68.777_961;

    fn july_sky() -> AtmosphericParameters {
        clear_sky(&ClimateSite::ATLANTA, 7, 202, ALTITUDE).unwrap()
    }

    #[test]
    fn test_diffuse_angle_factor() {
        assert!((diffuse_angle_factor(0.0) - 1.3).abs() < EPSILON);
        assert!((diffuse_angle_factor(90.0) - 0.55).abs() < EPSILON);
        // Floor applies once the surface faces away
        assert_eq!(diffuse_angle_factor(120.0), 0.45);
        assert_eq!(diffuse_angle_factor(180.0), 0.45);
    }

    #[test]
    fn test_south_wall_components() {
        let wall = Surface::vertical(0.0).unwrap();
        let incident = incident_irradiance(&july_sky(), ALTITUDE, 78.417_590, &wall);

        assert!((incident.beam - 148.086).abs() < 1e-2);
        assert!((incident.diffuse - 139.776).abs() < 1e-2);
        assert!((incident.reflected - 90.247).abs() < 1e-2);
        assert_eq!(incident.incidence_angle, 78.417_590);
    }

    #[test]
    fn test_horizontal_sees_no_ground() {
        let incident = incident_irradiance(&july_sky(), ALTITUDE, 21.222_039, &Surface::horizontal());
        assert_eq!(incident.reflected, 0.0);
        assert!((incident.beam - 687.546).abs() < 1e-2);
    }

    #[test]
    fn test_beam_never_negative() {
        let wall = Surface::vertical(0.0).unwrap();
        let incident = incident_irradiance(&july_sky(), ALTITUDE, 90.000_001, &wall);
        assert_eq!(incident.beam, 0.0);
        assert!(incident.diffuse > 0.0);
    }

    #[test]
    fn test_ground_reflectance_scales_reflected() {
        let sky = july_sky();
        let grass = Surface::vertical(0.0).unwrap();
        let snow = grass.with_ground_reflectance(0.8).unwrap();
        let black = grass.with_ground_reflectance(0.0).unwrap();

        let on_grass = incident_irradiance(&sky, ALTITUDE, 78.0, &grass);
        let on_snow = incident_irradiance(&sky, ALTITUDE, 78.0, &snow);
        assert!((on_snow.reflected - 4.0 * on_grass.reflected).abs() < EPSILON);
        assert_eq!(incident_irradiance(&sky, ALTITUDE, 78.0, &black).reflected, 0.0);
    }
}
