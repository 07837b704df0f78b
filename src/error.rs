//! Error types for the solar heat gain library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input value is outside the range accepted by the model.
    Configuration,
    /// An intermediate value left the mathematical domain of a formula.
    Domain,
    /// The sun/observer geometry makes the solar azimuth undefined.
    DegenerateGeometry,
}

/// Errors that can occur while evaluating solar heat gain.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid time zone offset (must be between -12 and +14 hours).
    InvalidTimeZone {
        /// The invalid offset in hours.
        value: f64,
    },
    /// Invalid calendar date or clock time.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Month outside 1-12.
    InvalidMonth {
        /// The invalid month.
        value: u32,
    },
    /// Day of year outside 1-366.
    InvalidDayOfYear {
        /// The invalid day of year.
        value: u32,
    },
    /// Invalid surface azimuth (must be between -180 and +180 degrees).
    InvalidSurfaceAzimuth {
        /// The invalid azimuth value provided.
        value: f64,
    },
    /// Invalid surface tilt (must be between 0 and 180 degrees).
    InvalidSurfaceTilt {
        /// The invalid tilt value provided.
        value: f64,
    },
    /// Invalid shading coefficient (must be between 0 and 1).
    InvalidShadingCoefficient {
        /// The invalid coefficient provided.
        value: f64,
    },
    /// Invalid ground reflectance (must be between 0 and 1).
    InvalidGroundReflectance {
        /// The invalid reflectance provided.
        value: f64,
    },
    /// Invalid optical depth (must be finite and positive).
    InvalidOpticalDepth {
        /// The invalid optical depth provided.
        value: f64,
    },
    /// A value fell outside the domain of the formula it feeds.
    Domain {
        /// Name of the quantity being computed.
        quantity: &'static str,
        /// The out-of-domain value.
        value: f64,
    },
    /// Division by a vanishing term in the solar geometry.
    DegenerateGeometry {
        /// Description of the degenerate configuration.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidTimeZone { value } => {
                write!(
                    f,
                    "invalid time zone offset {value} h (must be between -12 h and +14 h)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidMonth { value } => {
                write!(f, "invalid month {value} (must be between 1 and 12)")
            }
            Self::InvalidDayOfYear { value } => {
                write!(f, "invalid day of year {value} (must be between 1 and 366)")
            }
            Self::InvalidSurfaceAzimuth { value } => {
                write!(
                    f,
                    "invalid surface azimuth {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidSurfaceTilt { value } => {
                write!(
                    f,
                    "invalid surface tilt {value}° (must be between 0° and 180°)"
                )
            }
            Self::InvalidShadingCoefficient { value } => {
                write!(
                    f,
                    "invalid shading coefficient {value} (must be between 0 and 1)"
                )
            }
            Self::InvalidGroundReflectance { value } => {
                write!(
                    f,
                    "invalid ground reflectance {value} (must be between 0 and 1)"
                )
            }
            Self::InvalidOpticalDepth { value } => {
                write!(f, "invalid optical depth {value} (must be positive)")
            }
            Self::Domain { quantity, value } => {
                write!(f, "{quantity} out of domain: {value}")
            }
            Self::DegenerateGeometry { message } => {
                write!(f, "degenerate geometry: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid time zone error.
    #[must_use]
    pub const fn invalid_time_zone(value: f64) -> Self {
        Self::InvalidTimeZone { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid month error.
    #[must_use]
    pub const fn invalid_month(value: u32) -> Self {
        Self::InvalidMonth { value }
    }

    /// Creates an invalid day-of-year error.
    #[must_use]
    pub const fn invalid_day_of_year(value: u32) -> Self {
        Self::InvalidDayOfYear { value }
    }

    /// Creates an invalid surface azimuth error.
    #[must_use]
    pub const fn invalid_surface_azimuth(value: f64) -> Self {
        Self::InvalidSurfaceAzimuth { value }
    }

    /// Creates an invalid surface tilt error.
    #[must_use]
    pub const fn invalid_surface_tilt(value: f64) -> Self {
        Self::InvalidSurfaceTilt { value }
    }

    /// Creates an invalid shading coefficient error.
    #[must_use]
    pub const fn invalid_shading_coefficient(value: f64) -> Self {
        Self::InvalidShadingCoefficient { value }
    }

    /// Creates an invalid ground reflectance error.
    #[must_use]
    pub const fn invalid_ground_reflectance(value: f64) -> Self {
        Self::InvalidGroundReflectance { value }
    }

    /// Creates an invalid optical depth error.
    #[must_use]
    pub const fn invalid_optical_depth(value: f64) -> Self {
        Self::InvalidOpticalDepth { value }
    }

    /// Creates a domain error.
    #[must_use]
    pub const fn domain(quantity: &'static str, value: f64) -> Self {
        Self::Domain { quantity, value }
    }

    /// Creates a degenerate geometry error.
    #[must_use]
    pub const fn degenerate_geometry(message: &'static str) -> Self {
        Self::DegenerateGeometry { message }
    }

    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain { .. } => ErrorKind::Domain,
            Self::DegenerateGeometry { .. } => ErrorKind::DegenerateGeometry,
            _ => ErrorKind::Configuration,
        }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a time zone offset in hours from UTC.
///
/// # Errors
/// Returns `InvalidTimeZone` if the offset is outside -12 to +14 hours.
pub fn check_time_zone(offset_hours: f64) -> Result<()> {
    if !(-12.0..=14.0).contains(&offset_hours) {
        return Err(Error::invalid_time_zone(offset_hours));
    }
    Ok(())
}

/// Validates a month number.
///
/// # Errors
/// Returns `InvalidMonth` if month is outside 1-12.
pub fn check_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_month(month));
    }
    Ok(())
}

/// Validates a day of year.
///
/// # Errors
/// Returns `InvalidDayOfYear` if the day is outside 1-366.
pub fn check_day_of_year(day_of_year: u32) -> Result<()> {
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::invalid_day_of_year(day_of_year));
    }
    Ok(())
}

/// Validates a surface azimuth (0° south, negative east, ±180° north).
///
/// # Errors
/// Returns `InvalidSurfaceAzimuth` if azimuth is outside -180 to +180 degrees.
pub fn check_surface_azimuth(azimuth: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&azimuth) {
        return Err(Error::invalid_surface_azimuth(azimuth));
    }
    Ok(())
}

/// Validates a surface tilt (0° face up, 90° vertical, 180° face down).
///
/// # Errors
/// Returns `InvalidSurfaceTilt` if tilt is outside 0 to 180 degrees.
pub fn check_surface_tilt(tilt: f64) -> Result<()> {
    if !(0.0..=180.0).contains(&tilt) {
        return Err(Error::invalid_surface_tilt(tilt));
    }
    Ok(())
}

/// Validates a shading coefficient.
///
/// # Errors
/// Returns `InvalidShadingCoefficient` if the value is outside 0 to 1.
pub fn check_shading_coefficient(value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid_shading_coefficient(value));
    }
    Ok(())
}

/// Validates a ground reflectance.
///
/// # Errors
/// Returns `InvalidGroundReflectance` if the value is outside 0 to 1.
pub fn check_ground_reflectance(value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid_ground_reflectance(value));
    }
    Ok(())
}

/// Validates an atmospheric optical depth.
///
/// # Errors
/// Returns `InvalidOpticalDepth` if the value is not finite or not positive.
pub fn check_optical_depth(value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid_optical_depth(value));
    }
    Ok(())
}
