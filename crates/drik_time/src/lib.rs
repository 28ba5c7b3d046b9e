//! Time scales for the apparent-position pipeline.
//!
//! This crate provides:
//! - proleptic Gregorian calendar ↔ JD/MJD conversions
//! - Greenwich Sidereal Time from MJD
//! - local sidereal time and hour angle for an observer/target pair
//! - `UtcTime`, the validated civil date/time input type
//!
//! Everything here is pure arithmetic on scalars: no I/O, no state, no
//! allocation. All functions are safe to call from any thread.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    calendar_to_jd, calendar_to_mjd, day_fraction, days_in_month, is_leap_year, jd_to_mjd,
    mjd_to_jd, J2000_MJD, MJD_JD_OFFSET,
};
pub use sidereal::{gst_hours, local_hour_angle_hours, local_sidereal_time_hours};
pub use utc_time::UtcTime;
