//! Julian day number arithmetic for civil (Gregorian) dates.
//!
//! The day pillar of a saju chart is a pure function of the Julian day
//! number, so conversions here are integer-exact and time-zone naive.

/// Days in each Gregorian month (index 0 = January), non-leap year.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// True for Gregorian leap years.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month (1-12).
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

/// Julian day number of a Gregorian calendar date (noon-based integer JDN).
///
/// Fliegel & Van Flandern algorithm; exact for all dates in the supported
/// almanac span.
pub const fn jdn_from_gregorian(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (14 - m) / 12;
    let yy = y + 4800 - a;
    let mm = m + 12 * a - 3;
    d + (153 * mm + 2) / 5 + 365 * yy + yy / 4 - yy / 100 + yy / 400 - 32045
}

/// Inverse of [`jdn_from_gregorian`].
pub const fn gregorian_from_jdn(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - (146097 * b) / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;
    let day = (e - (153 * m + 2) / 5 + 1) as u32;
    let month = (m + 3 - 12 * (m / 10)) as u32;
    let year = (100 * b + d - 4800 + m / 10) as i32;
    (year, month, day)
}

/// Weekday index for a JDN: 0 = Monday .. 6 = Sunday.
pub const fn weekday_from_jdn(jdn: i64) -> u32 {
    (jdn.rem_euclid(7)) as u32
}

/// English weekday names, index per [`weekday_from_jdn`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
