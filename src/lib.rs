//! # Solar Heat Gain Library
//!
//! Clear-sky solar position, irradiance and solar heat gain through glazing, after the ASHRAE
//! Handbook Fundamentals clear-sky model.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given a location, a local clock time, a receiving surface and a climate site, the library
//! computes:
//! - apparent solar time, hour angle, solar declination, altitude and azimuth
//! - clear-sky beam and diffuse normal irradiance from the site's monthly optical depths
//! - whether the surface is sunlit, and the beam, sky-diffuse and ground-reflected irradiance on it
//! - transmitted and absorbed solar heat gain through the glazing, scaled by a shading coefficient
//!
//! Each stage is a pure function and can be used on its own. [`evaluate`] runs the whole pipeline
//! and reports whether it is night, the surface is self-shaded, or the surface is illuminated.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Deterministic: no I/O and no global state, every type is `Copy + Send + Sync`
//! - Observable: intermediate values are emitted as `tracing` events
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Build timestamps from chrono date/time types
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-heat-gain = "0.1"
//!
//! # Minimal std (no chrono)
//! solar-heat-gain = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-heat-gain = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - ASHRAE (2013). Handbook Fundamentals, Chapter 14: Climatic Design Information.
//! - ASHRAE (2013). Handbook Fundamentals, Chapter 15: Fenestration.
//! - Oh, J. K.-W. An Effective Algorithm for Transmitted Solar Radiation Calculation through
//!   Window Glazing on a Clear Day. KIEAE Journal.
//!
//! ## Quick Start
//!
//! ### Heat gain through a south window (numeric API)
//! ```rust
//! use solar_heat_gain::{evaluate, ClimateSite, Illumination, Location, Scenario, Surface, Timestamp};
//!
//! // Atlanta, July 21st, 3 pm daylight saving time
//! let location = Location::new(33.64, -84.43, -5.0, true).unwrap();
//! let timestamp = Timestamp::new(2022, 7, 21, 15, 0, 0.0).unwrap();
//! let window = Surface::vertical(0.0).unwrap();
//!
//! let scenario = Scenario::new(location, timestamp, window, ClimateSite::ATLANTA);
//! let evaluation = evaluate(&scenario).unwrap();
//!
//! match evaluation.illumination() {
//!     Illumination::Illuminated { incident, heat_gain } => {
//!         println!("Incidence angle: {:.2}°", incident.incidence_angle);
//!         println!("Transmitted: {:.1} W/m²", heat_gain.transmitted);
//!         println!("Absorbed: {:.1} W/m²", heat_gain.absorbed);
//!     }
//!     Illumination::SelfShaded { .. } => println!("Window in shade"),
//!     Illumination::Night => println!("Sun below horizon"),
//! }
//! ```
//!
//! ### From a chrono date/time
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_heat_gain::{evaluate, ClimateSite, Location, Scenario, Surface, Timestamp};
//! use chrono::NaiveDateTime;
//!
//! let clock = "2022-07-21T09:00:00".parse::<NaiveDateTime>().unwrap();
//! let scenario = Scenario::new(
//!     Location::new(33.64, -84.43, -5.0, true).unwrap(),
//!     Timestamp::from_date_time_like(&clock).unwrap(),
//!     Surface::vertical(-90.0).unwrap(), // east wall
//!     ClimateSite::ATLANTA,
//! );
//!
//! let evaluation = evaluate(&scenario).unwrap();
//! assert!(evaluation.illumination().is_illuminated());
//! # }
//! ```
//!
//! ## Angle Conventions
//!
//! - **Solar azimuth**: 0° = South, negative toward East (morning), positive toward West
//! - **Surface azimuth**: direction of the outward normal, same convention (-180° to 180°)
//! - **Tilt**: 0° = horizontal facing up, 90° = vertical
//! - **Altitude**: 0° = horizon, 90° = directly overhead

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of tabulated constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::atmosphere::ClimateSite;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::evaluation::{Evaluation, Scenario, evaluate};
pub use crate::glazing::GlazingCoefficients;
pub use crate::time::Timestamp;
pub use crate::types::{
    DEFAULT_GROUND_REFLECTANCE, HeatGain, IncidentIrradiance, Illumination, Location,
    SolarPosition, Surface,
};

// Pipeline stages
pub mod atmosphere;
pub mod glazing;
pub mod irradiance;
pub mod position;
pub mod surface;
pub mod time;

// Core modules
pub mod error;
pub mod evaluation;
pub mod types;

// Internal modules
mod math;
