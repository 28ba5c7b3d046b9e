//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the canonical input representation for the
//! pipeline. Input time is UT; there is no timezone or leap-second
//! handling.

use crate::error::TimeError;
use crate::julian::{calendar_to_mjd, day_fraction, days_in_month};

/// UTC calendar date with sub-second precision.
///
/// `hour` < 24, `minute` < 60 and `second` < 60.0 are a caller
/// contract; only the calendar date itself is validated (see
/// [`UtcTime::validate`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that month and day form a real Gregorian calendar date.
    pub fn validate(&self) -> Result<(), TimeError> {
        match days_in_month(self.year, self.month) {
            Some(len) if (1..=len).contains(&self.day) => Ok(()),
            _ => Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            }),
        }
    }

    /// Convert to Modified Julian Date, validating the calendar date.
    pub fn to_mjd(&self) -> Result<f64, TimeError> {
        self.validate()?;
        Ok(calendar_to_mjd(
            self.year,
            self.month,
            self.day,
            day_fraction(self.hour, self.minute, self.second),
        ))
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
