//! One-shot evaluation of solar heat gain for a surface, place and time.
//!
//! Runs the full pipeline: solar time, solar position, clear-sky irradiance, surface exposure,
//! incident irradiance and glazing heat gain. Every intermediate value is returned for
//! inspection; nothing is printed.

use crate::atmosphere::{AtmosphericParameters, ClimateSite, clear_sky};
use crate::glazing::{GlazingCoefficients, heat_gain};
use crate::irradiance::incident_irradiance;
use crate::position::solar_position;
use crate::surface::{SurfaceExposure, resolve_exposure};
use crate::time::{SolarTime, Timestamp, solar_time};
use crate::{HeatGain, Illumination, Location, Result, SolarPosition, Surface};

/// Everything needed to evaluate solar heat gain once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    location: Location,
    timestamp: Timestamp,
    surface: Surface,
    site: ClimateSite,
    glazing: GlazingCoefficients,
}

impl Scenario {
    /// Creates a scenario glazed with double-strength sheet glass.
    ///
    /// # Arguments
    /// * `location` - Where the surface is
    /// * `timestamp` - Local clock time (daylight saving time if the location observes it)
    /// * `surface` - Receiving surface
    /// * `site` - Climate site supplying the monthly optical depths
    #[must_use]
    pub const fn new(
        location: Location,
        timestamp: Timestamp,
        surface: Surface,
        site: ClimateSite,
    ) -> Self {
        Self {
            location,
            timestamp,
            surface,
            site,
            glazing: GlazingCoefficients::DOUBLE_STRENGTH,
        }
    }

    /// Returns a copy using a different glazing.
    #[must_use]
    pub const fn with_glazing(self, glazing: GlazingCoefficients) -> Self {
        Self { glazing, ..self }
    }

    /// Returns a copy evaluated at a different clock time.
    #[must_use]
    pub const fn with_timestamp(self, timestamp: Timestamp) -> Self {
        Self { timestamp, ..self }
    }

    /// Returns a copy with a different receiving surface.
    #[must_use]
    pub const fn with_surface(self, surface: Surface) -> Self {
        Self { surface, ..self }
    }

    /// Gets the location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Gets the local clock time.
    #[must_use]
    pub const fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Gets the receiving surface.
    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Gets the climate site.
    #[must_use]
    pub const fn site(&self) -> &ClimateSite {
        &self.site
    }

    /// Gets the glazing coefficients.
    #[must_use]
    pub const fn glazing(&self) -> &GlazingCoefficients {
        &self.glazing
    }
}

/// Result of one evaluation, with its intermediate values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    solar_time: SolarTime,
    position: SolarPosition,
    atmosphere: Option<AtmosphericParameters>,
    illumination: Illumination,
}

impl Evaluation {
    /// Solar time of the evaluated instant.
    #[must_use]
    pub const fn solar_time(&self) -> &SolarTime {
        &self.solar_time
    }

    /// Position of the sun.
    #[must_use]
    pub const fn position(&self) -> &SolarPosition {
        &self.position
    }

    /// Clear-sky parameters, `None` at night.
    #[must_use]
    pub const fn atmosphere(&self) -> Option<&AtmosphericParameters> {
        self.atmosphere.as_ref()
    }

    /// Illumination state of the surface.
    #[must_use]
    pub const fn illumination(&self) -> &Illumination {
        &self.illumination
    }

    /// Solar heat gain, zero at night or when the surface is self-shaded.
    #[must_use]
    pub const fn heat_gain(&self) -> HeatGain {
        self.illumination.heat_gain()
    }
}

/// Evaluate solar heat gain for a scenario.
///
/// # Errors
/// Returns a `Domain` error if an inverse trig argument leaves [-1, 1] and `DegenerateGeometry`
/// when the solar azimuth is undefined (sun at the zenith, observer at a pole). Returns
/// `InvalidDateTime` when solar time falls outside the supported years.
///
/// # Example
/// ```
/// use solar_heat_gain::{evaluate, Location, Scenario, Surface};
/// use solar_heat_gain::{atmosphere::ClimateSite, time::Timestamp};
///
/// let scenario = Scenario::new(
///     Location::new(33.64, -84.43, -5.0, true).unwrap(),
///     Timestamp::new(2022, 7, 21, 15, 0, 0.0).unwrap(),
///     Surface::vertical(0.0).unwrap(),
///     ClimateSite::ATLANTA,
/// );
///
/// let evaluation = evaluate(&scenario).unwrap();
/// assert!(evaluation.illumination().is_illuminated());
/// println!("TSHG: {:.1} W/m²", evaluation.heat_gain().transmitted);
/// ```
pub fn evaluate(scenario: &Scenario) -> Result<Evaluation> {
    let solar_time = solar_time(&scenario.timestamp, &scenario.location)?;
    let position = solar_position(
        solar_time.day_of_year(),
        solar_time.hour_angle(),
        scenario.location.latitude(),
    )?;

    let (Some(solar_azimuth), true) = (position.azimuth(), position.is_sun_up()) else {
        tracing::debug!(altitude = position.altitude(), "sun below horizon");
        return Ok(Evaluation {
            solar_time,
            position,
            atmosphere: None,
            illumination: Illumination::Night,
        });
    };

    let atmosphere = clear_sky(
        &scenario.site,
        solar_time.apparent_solar_time().month(),
        solar_time.day_of_year(),
        position.altitude(),
    )?;

    let exposure = resolve_exposure(position.altitude(), solar_azimuth, &scenario.surface)?;
    let illumination = match exposure {
        SurfaceExposure::SelfShaded {
            surface_solar_azimuth,
        } => {
            tracing::debug!(
                altitude = position.altitude(),
                solar_azimuth,
                surface_solar_azimuth,
                "surface in shade"
            );
            Illumination::SelfShaded {
                surface_solar_azimuth,
            }
        }
        SurfaceExposure::Sunlit {
            incidence_angle, ..
        } => {
            let incident = incident_irradiance(
                &atmosphere,
                position.altitude(),
                incidence_angle,
                &scenario.surface,
            );
            let heat_gain = heat_gain(
                &incident,
                &scenario.glazing,
                scenario.surface.shading_coefficient(),
            );
            tracing::debug!(
                altitude = position.altitude(),
                solar_azimuth,
                incidence_angle,
                transmitted = heat_gain.transmitted,
                absorbed = heat_gain.absorbed,
                "surface sunlit"
            );
            Illumination::Illuminated {
                incident,
                heat_gain,
            }
        }
    };

    Ok(Evaluation {
        solar_time,
        position,
        atmosphere: Some(atmosphere),
        illumination,
    })
}
