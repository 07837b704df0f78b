//! Civil and solar time.
//!
//! This module converts a local clock reading into apparent solar time (AST), the time scale in
//! which the sun crosses the local meridian at exactly 12:00. The correction combines the
//! daylight saving shift, the equation of time and the longitude offset from the local standard
//! time meridian, following ASHRAE Handbook Fundamentals, Ch. 14.

#![allow(clippy::unreadable_literal)]

use crate::error::check_day_of_year;
use crate::math::{cos, degrees_to_radians, floor, sin};
use crate::{Error, Location, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds per hour
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Hour angle swept by the sun per hour of solar time
const DEGREES_PER_HOUR: f64 = 15.0;

/// Earliest supported year
pub const MIN_YEAR: i32 = -9999;

/// Latest supported year
pub const MAX_YEAR: i32 = 9999;

/// A calendar date and clock time in the proleptic Gregorian calendar.
///
/// Carries no time zone; its meaning (local clock time, local standard time or apparent solar
/// time) depends on where it appears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl Timestamp {
    /// Creates a timestamp from its calendar components.
    ///
    /// # Arguments
    /// * `year` - Year (-9999 to 9999)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range, including days past
    /// the end of the month.
    ///
    /// # Example
    /// ```
    /// # use solar_heat_gain::time::Timestamp;
    /// let timestamp = Timestamp::new(2022, 7, 21, 15, 0, 0.0).unwrap();
    /// assert_eq!(timestamp.day_of_year(), 202);
    /// assert!(Timestamp::new(2023, 2, 29, 0, 0, 0.0).is_err());
    /// ```
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::invalid_datetime("year must be between -9999 and 9999"));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }
        if day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a timestamp from any chrono type carrying a date and a time of day.
    ///
    /// The time zone of `value`, if any, is ignored: its local date and clock time are used as is.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the components cannot be represented (leap seconds).
    ///
    /// # Example
    /// ```
    /// # use solar_heat_gain::time::Timestamp;
    /// # use chrono::NaiveDate;
    /// let datetime = NaiveDate::from_ymd_opt(2022, 7, 21).unwrap().and_hms_opt(15, 0, 0).unwrap();
    /// let timestamp = Timestamp::from_date_time_like(&datetime).unwrap();
    /// assert_eq!(timestamp, Timestamp::new(2022, 7, 21, 15, 0, 0.0).unwrap());
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_date_time_like<D: Datelike + Timelike>(value: &D) -> Result<Self> {
        Self::new(
            value.year(),
            value.month(),
            value.day(),
            value.hour(),
            value.minute(),
            f64::from(value.second()) + f64::from(value.nanosecond()) / 1e9,
        )
    }

    /// Converts to a chrono `NaiveDateTime`, rounding the seconds to whole nanoseconds.
    ///
    /// Returns `None` if the year is outside the range chrono supports.
    #[cfg(feature = "chrono")]
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
        let whole_seconds = floor(self.second);
        let nanos = floor((self.second - whole_seconds) * 1e9 + 0.5).min(999_999_999.0);
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_nano_opt(
            self.hour,
            self.minute,
            whole_seconds as u32,
            nanos as u32,
        )
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second, including any fractional part.
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }

    /// Day of year (1-366).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        (1..self.month)
            .map(|month| days_in_month(self.year, month))
            .sum::<u32>()
            + self.day
    }

    /// Time of day in fractional hours (0 to < 24).
    #[must_use]
    pub fn hour_of_day(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0 + self.second / SECONDS_PER_HOUR
    }

    /// Shifts the timestamp by a signed number of seconds, rolling over day, month and year.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if `seconds` is not finite or the result falls outside
    /// [`MIN_YEAR`, `MAX_YEAR`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn add_seconds(&self, seconds: f64) -> Result<Self> {
        if !seconds.is_finite() {
            return Err(Error::invalid_datetime("time shift must be finite"));
        }
        let since_midnight = self.hour_of_day() * SECONDS_PER_HOUR + seconds;
        let mut day_offset = floor(since_midnight / SECONDS_PER_DAY);
        let mut remainder = since_midnight - day_offset * SECONDS_PER_DAY;
        if remainder < 0.0 {
            remainder += SECONDS_PER_DAY;
            day_offset -= 1.0;
        } else if remainder >= SECONDS_PER_DAY {
            remainder -= SECONDS_PER_DAY;
            day_offset += 1.0;
        }

        if day_offset.abs() > MAX_SHIFT_DAYS {
            return Err(Error::invalid_datetime(OUT_OF_RANGE));
        }
        let (year, month, day) = shift_date(self.year, self.month, self.day, day_offset as i64)
            .ok_or(Error::invalid_datetime(OUT_OF_RANGE))?;

        let hour = floor(remainder / SECONDS_PER_HOUR);
        let minute = floor((remainder - hour * SECONDS_PER_HOUR) / 60.0);
        // Rounding can leave the seconds a hair under zero or at 60
        let second = (remainder - hour * SECONDS_PER_HOUR - minute * 60.0).clamp(0.0, 59.999_999_999);

        Ok(Self {
            year,
            month,
            day,
            hour: hour as u32,
            minute: minute as u32,
            second,
        })
    }

    /// Shifts the timestamp by a signed number of minutes.
    ///
    /// # Errors
    /// Same as [`Timestamp::add_seconds`].
    pub fn add_minutes(&self, minutes: f64) -> Result<Self> {
        self.add_seconds(minutes * 60.0)
    }

    /// Shifts the timestamp by a signed number of hours.
    ///
    /// # Errors
    /// Same as [`Timestamp::add_seconds`].
    pub fn add_hours(&self, hours: f64) -> Result<Self> {
        self.add_seconds(hours * SECONDS_PER_HOUR)
    }
}

const OUT_OF_RANGE: &str = "shifted timestamp is outside the supported year range";

/// Longest shift that can stay inside the supported years
#[allow(clippy::cast_lossless)]
const MAX_SHIFT_DAYS: f64 = ((MAX_YEAR - MIN_YEAR + 1) * 366) as f64;

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Moves a date by whole days, `None` once it leaves [`MIN_YEAR`, `MAX_YEAR`].
fn shift_date(year: i32, month: u32, day: u32, days: i64) -> Option<(i32, u32, u32)> {
    let (mut year, mut month, mut day) = (year, month, day);
    for _ in 0..days.unsigned_abs() {
        if days > 0 {
            if day < days_in_month(year, month) {
                day += 1;
            } else if month < 12 {
                month += 1;
                day = 1;
            } else if year < MAX_YEAR {
                year += 1;
                month = 1;
                day = 1;
            } else {
                return None;
            }
        } else if day > 1 {
            day -= 1;
        } else if month > 1 {
            month -= 1;
            day = days_in_month(year, month);
        } else if year > MIN_YEAR {
            year -= 1;
            month = 12;
            day = 31;
        } else {
            return None;
        }
    }
    Some((year, month, day))
}

/// North American standard time zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardTimeZone {
    /// Newfoundland (UTC-3:30)
    Newfoundland,
    /// Atlantic (UTC-4)
    Atlantic,
    /// Eastern (UTC-5)
    Eastern,
    /// Central (UTC-6)
    Central,
    /// Mountain (UTC-7)
    Mountain,
    /// Pacific (UTC-8)
    Pacific,
    /// Alaska (UTC-9)
    Alaska,
    /// Hawaii-Aleutian (UTC-10)
    HawaiiAleutian,
}

impl StandardTimeZone {
    /// Standard time offset from UTC in hours.
    #[must_use]
    pub const fn utc_offset(&self) -> f64 {
        match self {
            Self::Newfoundland => -3.5,
            Self::Atlantic => -4.0,
            Self::Eastern => -5.0,
            Self::Central => -6.0,
            Self::Mountain => -7.0,
            Self::Pacific => -8.0,
            Self::Alaska => -9.0,
            Self::HawaiiAleutian => -10.0,
        }
    }

    /// Longitude of the standard time meridian in degrees east.
    #[must_use]
    pub fn standard_meridian(&self) -> f64 {
        15.0 * self.utc_offset()
    }
}

/// Equation of time in minutes for a day of the year.
///
/// Two-harmonic Fourier fit in the day angle Γ = 360/365·(d − 1).
///
/// # Errors
/// Returns `InvalidDayOfYear` if the day is outside 1-366.
///
/// # Example
/// ```
/// # use solar_heat_gain::time::equation_of_time;
/// // Around February 11th the sun runs about 14 minutes late
/// assert!((equation_of_time(42).unwrap() + 14.2).abs() < 0.1);
/// ```
pub fn equation_of_time(day_of_year: u32) -> Result<f64> {
    check_day_of_year(day_of_year)?;
    Ok(calculate_equation_of_time(day_of_year))
}

fn calculate_equation_of_time(day_of_year: u32) -> f64 {
    let gamma = degrees_to_radians(360.0 / 365.0 * (f64::from(day_of_year) - 1.0));
    2.2918
        * (0.0075 + 0.1868 * cos(gamma)
            - 3.2077 * sin(gamma)
            - 1.4615 * cos(2.0 * gamma)
            - 4.089 * sin(2.0 * gamma))
}

/// Hour angle in degrees for an apparent solar time: zero at solar noon, negative in the morning.
///
/// Only the hour and minute count; seconds are dropped.
#[must_use]
pub fn hour_angle(apparent_solar_time: &Timestamp) -> f64 {
    let hour = f64::from(apparent_solar_time.hour()) + f64::from(apparent_solar_time.minute()) / 60.0;
    DEGREES_PER_HOUR * (hour - 12.0)
}

/// Local clock time resolved into solar time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTime {
    day_of_year: u32,
    local_standard_time: Timestamp,
    apparent_solar_time: Timestamp,
    equation_of_time: f64,
    hour_angle: f64,
}

impl SolarTime {
    /// Day of year of the clock reading.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Clock reading with any daylight saving shift removed.
    #[must_use]
    pub const fn local_standard_time(&self) -> Timestamp {
        self.local_standard_time
    }

    /// Apparent solar time.
    #[must_use]
    pub const fn apparent_solar_time(&self) -> Timestamp {
        self.apparent_solar_time
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Hour angle in degrees, positive after solar noon.
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }
}

/// Converts a local clock reading into solar time.
///
/// AST = LST + EoT + (longitude − standard meridian) / 15 h, where LST is the clock time minus
/// one hour when the location observes daylight saving time.
///
/// # Errors
/// Returns `InvalidDateTime` if a shift moves the time outside the supported years.
///
/// # Example
/// ```
/// # use solar_heat_gain::{Location, time::{solar_time, Timestamp}};
/// let atlanta = Location::new(33.64, -84.43, -5.0, true).unwrap();
/// let clock = Timestamp::new(2022, 7, 21, 15, 0, 0.0).unwrap();
///
/// let solar = solar_time(&clock, &atlanta).unwrap();
/// assert_eq!(solar.local_standard_time().hour(), 14);
/// assert_eq!(solar.apparent_solar_time().hour(), 13);
/// assert_eq!(solar.hour_angle(), 18.75);
/// ```
pub fn solar_time(clock: &Timestamp, location: &Location) -> Result<SolarTime> {
    let day_of_year = clock.day_of_year();
    let equation_of_time = calculate_equation_of_time(day_of_year);

    let local_standard_time = if location.daylight_saving() {
        clock.add_hours(-1.0)?
    } else {
        *clock
    };

    let longitude_correction =
        (location.longitude() - location.standard_meridian()) / DEGREES_PER_HOUR;
    let apparent_solar_time = local_standard_time
        .add_minutes(equation_of_time)?
        .add_hours(longitude_correction)?;
    let hour_angle = hour_angle(&apparent_solar_time);

    tracing::trace!(
        day_of_year,
        equation_of_time,
        longitude_correction,
        hour_angle,
        "resolved apparent solar time"
    );

    Ok(SolarTime {
        day_of_year,
        local_standard_time,
        apparent_solar_time,
        equation_of_time,
        hour_angle,
    })
}
