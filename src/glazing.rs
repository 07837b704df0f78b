//! Solar heat gain factors of glazing.
//!
//! Transmittance and absorptance of the glass are described by six curve-fit coefficients each,
//! after Oh, "An Effective Algorithm for Transmitted Solar Radiation Calculation through Window
//! Glazing on a Clear Day" (KIEAE Journal). The direct-beam values depend on the angle of
//! incidence; the diffuse values are hemispherical averages and depend on the coefficients only.

#![allow(clippy::unreadable_literal)]

use crate::math::cos_deg;
use crate::{HeatGain, IncidentIrradiance};

/// Number of curve-fit coefficients per optical property.
pub const COEFFICIENT_COUNT: usize = 6;

/// Curve-fit coefficients of a glazing type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlazingCoefficients {
    absorptance: [f64; COEFFICIENT_COUNT],
    transmittance: [f64; COEFFICIENT_COUNT],
}

impl GlazingCoefficients {
    /// Standard 3 mm double-strength sheet glass (DSA), the reference glazing of the SHGF method.
    pub const DOUBLE_STRENGTH: Self = Self {
        absorptance: [0.01154, 0.77674, -3.94657, 8.57881, -8.38135, 3.01188],
        transmittance: [-0.00885, 2.71235, -0.62062, -7.07329, 9.75995, -3.89922],
    };

    /// Creates a coefficient set from absorptance coefficients a₀..a₅ and transmittance
    /// coefficients t₀..t₅.
    #[must_use]
    pub const fn new(
        absorptance: [f64; COEFFICIENT_COUNT],
        transmittance: [f64; COEFFICIENT_COUNT],
    ) -> Self {
        Self {
            absorptance,
            transmittance,
        }
    }

    /// Gets the absorptance coefficients.
    #[must_use]
    pub const fn absorptance(&self) -> &[f64; COEFFICIENT_COUNT] {
        &self.absorptance
    }

    /// Gets the transmittance coefficients.
    #[must_use]
    pub const fn transmittance(&self) -> &[f64; COEFFICIENT_COUNT] {
        &self.transmittance
    }

    /// Optical properties of the glazing for an angle of incidence in degrees.
    ///
    /// # Example
    /// ```
    /// # use solar_heat_gain::glazing::GlazingCoefficients;
    /// let properties = GlazingCoefficients::DOUBLE_STRENGTH.properties(0.0);
    /// assert!(properties.direct_transmittance > 0.8);
    /// assert!(properties.diffuse_transmittance > 0.75);
    /// ```
    #[must_use]
    pub fn properties(&self, incidence_angle: f64) -> GlazingProperties {
        let cos_theta = cos_deg(incidence_angle);
        let (direct_transmittance, diffuse_transmittance) =
            accumulate(&self.transmittance, cos_theta);
        let (direct_absorptance, diffuse_absorptance) = accumulate(&self.absorptance, cos_theta);
        GlazingProperties {
            direct_transmittance,
            diffuse_transmittance,
            direct_absorptance,
            diffuse_absorptance,
        }
    }
}

impl Default for GlazingCoefficients {
    fn default() -> Self {
        Self::DOUBLE_STRENGTH
    }
}

// Every term is weighted by cos θ itself rather than by its j-th power. The diffuse value is
// Σ 2·c_j / (j + 2).
fn accumulate(coefficients: &[f64; COEFFICIENT_COUNT], cos_theta: f64) -> (f64, f64) {
    coefficients
        .iter()
        .zip(2_u32..)
        .fold((0.0, 0.0), |(direct, diffuse), (&coefficient, divisor)| {
            (
                direct + coefficient * cos_theta,
                diffuse + 2.0 * coefficient / f64::from(divisor),
            )
        })
}

/// Transmittance and absorptance of glazing for one angle of incidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlazingProperties {
    /// Direct-beam transmittance τ_D
    pub direct_transmittance: f64,
    /// Diffuse transmittance τ_d
    pub diffuse_transmittance: f64,
    /// Direct-beam absorptance α_D
    pub direct_absorptance: f64,
    /// Diffuse absorptance α_d
    pub diffuse_absorptance: f64,
}

/// Transmitted and absorbed solar heat gain factors (TSHGF, ASHGF) of unshaded glazing.
///
/// Only the beam and sky-diffuse components enter the factors; ground-reflected irradiance does
/// not.
#[must_use]
pub fn heat_gain_factors(incident: &IncidentIrradiance, glazing: &GlazingCoefficients) -> HeatGain {
    let properties = glazing.properties(incident.incidence_angle);
    HeatGain {
        transmitted: incident.beam * properties.direct_transmittance
            + incident.diffuse * properties.diffuse_transmittance,
        absorbed: incident.beam * properties.direct_absorptance
            + incident.diffuse * properties.diffuse_absorptance,
    }
}

/// Solar heat gain through glazing with a shading coefficient applied.
///
/// # Example
/// ```
/// # use solar_heat_gain::{IncidentIrradiance, glazing::{heat_gain, GlazingCoefficients}};
/// let incident = IncidentIrradiance { beam: 600.0, diffuse: 150.0, reflected: 0.0, incidence_angle: 30.0 };
/// let clear = heat_gain(&incident, &GlazingCoefficients::DOUBLE_STRENGTH, 1.0);
/// let blinds = heat_gain(&incident, &GlazingCoefficients::DOUBLE_STRENGTH, 0.5);
/// assert!((blinds.transmitted - clear.transmitted / 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn heat_gain(
    incident: &IncidentIrradiance,
    glazing: &GlazingCoefficients,
    shading_coefficient: f64,
) -> HeatGain {
    heat_gain_factors(incident, glazing).scaled(shading_coefficient)
}
