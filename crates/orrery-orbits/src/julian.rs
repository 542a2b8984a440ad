//! Gregorian calendar to Julian day conversion.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::elements::SECONDS_PER_DAY;

/// Julian Day Number of a Gregorian calendar date (the day starting at noon).
///
/// Integer floor-division formula, valid for any year after 4800 BC.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// How an instant is turned into the Julian day the solver works with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DayCount {
    /// Integer Julian Day Number of the instant's UTC calendar date.
    /// Positions change once per day.
    #[default]
    DayNumber,
    /// [`julian_day`], including the fraction of the day.
    Continuous,
}

impl DayCount {
    /// Julian day of `at` under this day count.
    pub fn julian_day(self, at: DateTime<Utc>) -> f64 {
        match self {
            Self::DayNumber => julian_day_number(at.year(), at.month(), at.day()) as f64,
            Self::Continuous => julian_day(at),
        }
    }
}

/// Continuous Julian day of a UTC instant, including the fraction of the day.
///
/// No leap-second correction is applied.
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    let jdn = julian_day_number(at.year(), at.month(), at.day());
    let seconds =
        f64::from(at.num_seconds_from_midnight()) + f64::from(at.nanosecond()) * 1e-9;
    // The JDN changes at noon; midnight is half a day earlier.
    jdn as f64 - 0.5 + seconds / SECONDS_PER_DAY
}
