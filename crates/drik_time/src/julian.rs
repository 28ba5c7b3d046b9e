//! Julian Date and Modified Julian Date conversions.
//!
//! The calendar → Julian Day Number step is the standard integer
//! algorithm with the January/February month shift (Fliegel & Van
//! Flandern 1968), applied to the proleptic Gregorian calendar.

/// MJD of the J2000.0 epoch, 2000-01-01 12:00 UT.
pub const J2000_MJD: f64 = 51544.5;

/// Offset between Julian Date and Modified Julian Date: MJD = JD − offset.
pub const MJD_JD_OFFSET: f64 = 2_400_000.5;

/// Julian Day Number of a proleptic Gregorian calendar date.
///
/// The JDN labels the Julian day that *starts at noon* of the given
/// civil date. January and February are treated as months 13 and 14 of
/// the preceding year.
///
/// Integer divisions truncate toward zero, which agrees with floor
/// division for every year ≥ −4712; earlier years are unsupported.
pub fn gregorian_jdn(year: i64, month: i64, day: i64) -> i64 {
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Calendar date plus elapsed day fraction to Julian Date.
///
/// `day_fraction` is the elapsed fraction of the civil day in [0, 1):
/// 0.0 is midnight, 0.5 is noon. The civil day begins half a Julian day
/// before its JDN, hence the −0.5.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, day_fraction: f64) -> f64 {
    gregorian_jdn(i64::from(year), i64::from(month), i64::from(day)) as f64 - 0.5 + day_fraction
}

/// Calendar date plus elapsed day fraction to Modified Julian Date.
pub fn calendar_to_mjd(year: i32, month: u32, day: u32, day_fraction: f64) -> f64 {
    calendar_to_jd(year, month, day, day_fraction) - MJD_JD_OFFSET
}

/// Elapsed fraction of a civil day for a time of day.
pub fn day_fraction(hour: u32, minute: u32, second: f64) -> f64 {
    (f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0) / 24.0
}

/// Julian Date to Modified Julian Date.
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - MJD_JD_OFFSET
}

/// Modified Julian Date to Julian Date.
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + MJD_JD_OFFSET
}

/// Gregorian leap-year rule, proleptic for years before adoption.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a Gregorian month, or `None` for month ∉ [1, 12].
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jdn_j2000() {
        assert_eq!(gregorian_jdn(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn jdn_mjd_zero_epoch() {
        // MJD 0.0 = 1858-11-17 00:00; its JDN labels noon of that day.
        assert_eq!(gregorian_jdn(1858, 11, 17), 2_400_001);
    }

    #[test]
    fn jdn_gregorian_adoption() {
        assert_eq!(gregorian_jdn(1582, 10, 15), 2_299_161);
    }

    #[test]
    fn mjd_j2000_noon_exact() {
        assert_eq!(calendar_to_mjd(2000, 1, 1, 0.5), J2000_MJD);
    }

    #[test]
    fn mjd_zero_at_epoch_midnight() {
        assert_eq!(calendar_to_mjd(1858, 11, 17, 0.0), 0.0);
    }

    #[test]
    fn mjd_advances_one_per_day() {
        let a = calendar_to_mjd(2024, 5, 19, 0.0);
        let b = calendar_to_mjd(2024, 5, 20, 0.0);
        assert_eq!(b - a, 1.0);
    }

    #[test]
    fn mjd_across_leap_day() {
        let feb29 = calendar_to_mjd(2024, 2, 29, 0.0);
        let mar01 = calendar_to_mjd(2024, 3, 1, 0.0);
        assert_eq!(mar01 - feb29, 1.0);
    }

    #[test]
    fn day_fraction_noon() {
        assert_eq!(day_fraction(12, 0, 0.0), 0.5);
    }

    #[test]
    fn day_fraction_evening() {
        let f = day_fraction(22, 0, 0.0);
        assert!((f - 22.0 / 24.0).abs() < 1e-15, "got {f}");
    }

    #[test]
    fn jd_mjd_roundtrip() {
        let jd = 2_460_450.416_666_666_5;
        assert_eq!(mjd_to_jd(jd_to_mjd(jd)), jd);
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn proleptic_negative_year() {
        // Year −1000, March 1: formula stays in the positive-y regime
        // where truncation equals floor, so consecutive days differ by 1.
        let a = gregorian_jdn(-1000, 3, 1);
        let b = gregorian_jdn(-1000, 3, 2);
        assert_eq!(b - a, 1);
    }
}
