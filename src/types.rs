//! Core data types for solar heat gain calculations.
//!
//! Angles follow the ASHRAE convention throughout:
//! - Azimuths are measured from south, positive towards west, negative towards east (±180° = north)
//! - Altitude is the angle above the horizon (90° = zenith)
//! - Surface tilt is 0° for a horizontal surface facing up, 90° for a wall, 180° facing down

use crate::error::{
    check_coordinates, check_ground_reflectance, check_shading_coefficient, check_surface_azimuth,
    check_surface_tilt, check_time_zone,
};
use crate::{Error, Result};

/// Ground reflectance of typical dry ground and grass.
pub const DEFAULT_GROUND_REFLECTANCE: f64 = 0.2;

/// Geographic location of the glazed surface together with its civil time rules.
///
/// # Example
/// ```
/// # use solar_heat_gain::{Location, time::StandardTimeZone};
/// // Atlanta, Georgia during daylight saving time
/// let atlanta = Location::new(33.64, -84.43, StandardTimeZone::Eastern.utc_offset(), true).unwrap();
/// assert_eq!(atlanta.standard_meridian(), -75.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    time_zone: f64,
    daylight_saving: bool,
}

impl Location {
    /// Creates a new location.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to +90, positive north)
    /// * `longitude` - Longitude in degrees (-180 to +180, positive east)
    /// * `time_zone` - Standard time offset from UTC in hours (e.g. -5 for US Eastern)
    /// * `daylight_saving` - Whether clock times given for this location include a one hour DST shift
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidTimeZone` for out-of-range values.
    pub fn new(
        latitude: f64,
        longitude: f64,
        time_zone: f64,
        daylight_saving: bool,
    ) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_time_zone(time_zone)?;
        Ok(Self {
            latitude,
            longitude,
            time_zone,
            daylight_saving,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (negative west of Greenwich).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the standard time offset from UTC in hours.
    #[must_use]
    pub const fn time_zone(&self) -> f64 {
        self.time_zone
    }

    /// Whether clock times for this location are daylight saving times.
    #[must_use]
    pub const fn daylight_saving(&self) -> bool {
        self.daylight_saving
    }

    /// Longitude of the local standard time meridian in degrees (15° per hour of offset).
    #[must_use]
    pub fn standard_meridian(&self) -> f64 {
        15.0 * self.time_zone
    }
}

/// A glazed receiving surface.
///
/// # Example
/// ```
/// # use solar_heat_gain::Surface;
/// // South-facing window with an interior blind
/// let window = Surface::new(0.0, 90.0)
///     .unwrap()
///     .with_shading_coefficient(0.6)
///     .unwrap();
/// assert_eq!(window.shading_coefficient(), 0.6);
/// assert_eq!(window.ground_reflectance(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    azimuth: f64,
    tilt: f64,
    shading_coefficient: f64,
    ground_reflectance: f64,
}

impl Surface {
    /// Creates an unshaded surface with the default ground reflectance.
    ///
    /// # Arguments
    /// * `azimuth` - Surface azimuth in degrees (0° south, -90° east, 90° west, ±180° north)
    /// * `tilt` - Tilt from horizontal in degrees (0° face up, 90° vertical, 180° face down)
    ///
    /// # Errors
    /// Returns `InvalidSurfaceAzimuth` or `InvalidSurfaceTilt` for out-of-range angles.
    pub fn new(azimuth: f64, tilt: f64) -> Result<Self> {
        check_surface_azimuth(azimuth)?;
        check_surface_tilt(tilt)?;
        Ok(Self {
            azimuth,
            tilt,
            shading_coefficient: 1.0,
            ground_reflectance: DEFAULT_GROUND_REFLECTANCE,
        })
    }

    /// Creates a vertical wall surface facing `azimuth`.
    ///
    /// # Errors
    /// Returns `InvalidSurfaceAzimuth` for an out-of-range azimuth.
    pub fn vertical(azimuth: f64) -> Result<Self> {
        Self::new(azimuth, 90.0)
    }

    /// Creates a horizontal surface facing up (skylight).
    #[must_use]
    pub const fn horizontal() -> Self {
        Self {
            azimuth: 0.0,
            tilt: 0.0,
            shading_coefficient: 1.0,
            ground_reflectance: DEFAULT_GROUND_REFLECTANCE,
        }
    }

    /// Returns a copy with the given shading coefficient.
    ///
    /// # Errors
    /// Returns `InvalidShadingCoefficient` if the value is outside 0 to 1.
    pub fn with_shading_coefficient(self, shading_coefficient: f64) -> Result<Self> {
        check_shading_coefficient(shading_coefficient)?;
        Ok(Self {
            shading_coefficient,
            ..self
        })
    }

    /// Returns a copy with the given ground reflectance.
    ///
    /// # Errors
    /// Returns `InvalidGroundReflectance` if the value is outside 0 to 1.
    pub fn with_ground_reflectance(self, ground_reflectance: f64) -> Result<Self> {
        check_ground_reflectance(ground_reflectance)?;
        Ok(Self {
            ground_reflectance,
            ..self
        })
    }

    /// Gets the surface azimuth in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the surface tilt in degrees.
    #[must_use]
    pub const fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Gets the shading coefficient.
    #[must_use]
    pub const fn shading_coefficient(&self) -> f64 {
        self.shading_coefficient
    }

    /// Gets the reflectance of the foreground seen by the surface.
    #[must_use]
    pub const fn ground_reflectance(&self) -> f64 {
        self.ground_reflectance
    }
}

/// Position of the sun as seen from the location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees
    declination: f64,
    /// Altitude above the horizon in degrees
    altitude: f64,
    /// Azimuth from south in degrees, only known while the sun is up
    azimuth: Option<f64>,
}

impl SolarPosition {
    /// Creates a new solar position.
    ///
    /// # Errors
    /// Returns a `Domain` error if the altitude is outside -90 to +90 degrees
    /// or the azimuth is outside -180 to +180 degrees.
    ///
    /// # Example
    /// ```
    /// # use solar_heat_gain::SolarPosition;
    /// let position = SolarPosition::new(20.4, 68.6, Some(56.7)).unwrap();
    /// assert!(position.is_sun_up());
    /// assert!((position.zenith_angle() - 21.4).abs() < 1e-10);
    /// ```
    pub fn new(declination: f64, altitude: f64, azimuth: Option<f64>) -> Result<Self> {
        if !(-90.0..=90.0).contains(&altitude) {
            return Err(Error::domain("solar altitude", altitude));
        }
        if let Some(value) = azimuth {
            if !(-180.0..=180.0).contains(&value) {
                return Err(Error::domain("solar azimuth", value));
            }
        }
        Ok(Self {
            declination,
            altitude,
            azimuth,
        })
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the solar altitude (β) in degrees.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the solar azimuth (φ) in degrees from south, `None` while the sun is down.
    #[must_use]
    pub const fn azimuth(&self) -> Option<f64> {
        self.azimuth
    }

    /// Gets the zenith angle in degrees (90° - altitude).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.altitude
    }

    /// Checks if the sun is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Clear-sky irradiance incident on the receiving surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidentIrradiance {
    /// Beam component E_tb in W/m²
    pub beam: f64,
    /// Sky diffuse component E_td in W/m²
    pub diffuse: f64,
    /// Ground-reflected component E_tr in W/m²
    pub reflected: f64,
    /// Angle of incidence θ in degrees
    pub incidence_angle: f64,
}

impl IncidentIrradiance {
    /// Total irradiance on the surface in W/m².
    #[must_use]
    pub fn total(&self) -> f64 {
        self.beam + self.diffuse + self.reflected
    }
}

/// Solar heat gain through the glazing, per unit glazed area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatGain {
    /// Transmitted solar heat gain in W/m²
    pub transmitted: f64,
    /// Absorbed solar heat gain in W/m²
    pub absorbed: f64,
}

impl HeatGain {
    /// No heat gain.
    pub const ZERO: Self = Self {
        transmitted: 0.0,
        absorbed: 0.0,
    };

    /// Sum of transmitted and absorbed gain in W/m².
    #[must_use]
    pub fn total(&self) -> f64 {
        self.transmitted + self.absorbed
    }

    /// Both components multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            transmitted: self.transmitted * factor,
            absorbed: self.absorbed * factor,
        }
    }
}

/// How the sun reaches the surface at the evaluated instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Illumination {
    /// Sun at or below the horizon
    Night,
    /// Sun up, but behind the plane of the surface
    SelfShaded {
        /// Surface-solar azimuth γ in degrees
        surface_solar_azimuth: f64,
    },
    /// Sun up and in front of the surface
    Illuminated {
        /// Irradiance on the surface
        incident: IncidentIrradiance,
        /// Resulting solar heat gain
        heat_gain: HeatGain,
    },
}

impl Illumination {
    /// Heat gain for this state, zero unless illuminated.
    #[must_use]
    pub const fn heat_gain(&self) -> HeatGain {
        match self {
            Self::Illuminated { heat_gain, .. } => *heat_gain,
            Self::Night | Self::SelfShaded { .. } => HeatGain::ZERO,
        }
    }

    /// Incident irradiance if the surface is illuminated.
    #[must_use]
    pub const fn incident(&self) -> Option<&IncidentIrradiance> {
        if let Self::Illuminated { incident, .. } = self {
            Some(incident)
        } else {
            None
        }
    }

    /// Checks if the sun is down.
    #[must_use]
    pub const fn is_night(&self) -> bool {
        matches!(self, Self::Night)
    }

    /// Checks if the surface faces away from the sun.
    #[must_use]
    pub const fn is_self_shaded(&self) -> bool {
        matches!(self, Self::SelfShaded { .. })
    }

    /// Checks if the surface receives direct sun.
    #[must_use]
    pub const fn is_illuminated(&self) -> bool {
        matches!(self, Self::Illuminated { .. })
    }
}
