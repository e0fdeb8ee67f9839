//! Solar ↔ lunar conversion over the packed almanac table.
//!
//! Conversion counts days from the fixed anchor (solar 1900-01-31 = lunar
//! 1900-01-01) through the per-year month-length data in [`crate::table`].

use crate::error::CalendarError;
use crate::julian::{days_in_month, jdn_from_gregorian};
use crate::table::{
    leap_month, leap_month_days, lunar_month_days, lunar_year_days, year_in_table,
    LUNAR_EPOCH_SOLAR,
};
use crate::terms::{month_order, Season};

/// A civil (Gregorian) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Julian day number of this date.
    pub const fn jdn(&self) -> i64 {
        jdn_from_gregorian(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A lunar calendar date; `is_leap_month` marks the intercalary month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    pub const fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "L" } else { "" };
        write!(f, "{:04}-{leap}{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Canonical calendar representation of a birth instant's date: the solar
/// date, its lunar counterpart, and the solar-term season. Immutable once
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub solar: SolarDate,
    pub lunar: LunarDate,
    pub season: Season,
}

/// Resolve a civil input date (solar or lunar, possibly leap-month) into a
/// [`CalendarDate`].
///
/// A claimed leap month that does not exist for the lunar year is silently
/// corrected to the regular month; the flag is re-validated here regardless
/// of any client-side check.
pub fn resolve(
    year: i32,
    month: u32,
    day: u32,
    is_lunar: bool,
    is_leap_month: bool,
) -> Result<CalendarDate, CalendarError> {
    if !year_in_table(year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    if is_lunar {
        let lunar = validate_leap(LunarDate::new(year, month, day, is_leap_month))?;
        let solar = lunar_to_solar(lunar)?;
        Ok(from_parts(solar, lunar))
    } else {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        let solar = SolarDate::new(year, month, day);
        let lunar = solar_to_lunar(solar)?;
        Ok(from_parts(solar, lunar))
    }
}

fn from_parts(solar: SolarDate, lunar: LunarDate) -> CalendarDate {
    let order = month_order(solar.month, solar.day);
    CalendarDate {
        solar,
        lunar,
        season: Season::from_month_order(order),
    }
}

/// Leap month of a lunar year (0 = none). Errors outside the table span.
pub fn leap_month_of(year: i32) -> Result<u32, CalendarError> {
    if !year_in_table(year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    Ok(leap_month(year))
}

fn validate_leap(lunar: LunarDate) -> Result<LunarDate, CalendarError> {
    let mut lunar = lunar;
    if lunar.is_leap_month && leap_month(lunar.year) != lunar.month {
        lunar.is_leap_month = false;
    }
    let len = if lunar.is_leap_month {
        leap_month_days(lunar.year)
    } else if (1..=12).contains(&lunar.month) {
        lunar_month_days(lunar.year, lunar.month)
    } else {
        0
    };
    if lunar.day == 0 || lunar.day > len {
        return Err(CalendarError::InvalidDate {
            year: lunar.year,
            month: lunar.month,
            day: lunar.day,
        });
    }
    Ok(lunar)
}

/// The (month, is_leap, length) sequence of a lunar year, with the leap
/// month inserted after its regular month.
fn month_sequence(year: i32) -> Vec<(u32, bool, u32)> {
    let leap = leap_month(year);
    let mut seq = Vec::with_capacity(13);
    for month in 1..=12 {
        seq.push((month, false, lunar_month_days(year, month)));
        if month == leap {
            seq.push((month, true, leap_month_days(year)));
        }
    }
    seq
}

/// Convert a solar date to its lunar counterpart.
pub fn solar_to_lunar(solar: SolarDate) -> Result<LunarDate, CalendarError> {
    if !year_in_table(solar.year) {
        return Err(CalendarError::YearOutOfRange(solar.year));
    }
    let epoch = SolarDate::new(LUNAR_EPOCH_SOLAR.0, LUNAR_EPOCH_SOLAR.1, LUNAR_EPOCH_SOLAR.2);
    let mut offset = solar.jdn() - epoch.jdn();
    if offset < 0 {
        // Early January 1900 precedes the almanac anchor.
        return Err(CalendarError::YearOutOfRange(solar.year - 1));
    }
    let mut year = LUNAR_EPOCH_SOLAR.0;
    loop {
        let days = i64::from(lunar_year_days(year));
        if offset < days {
            break;
        }
        offset -= days;
        year += 1;
        if !year_in_table(year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
    }
    for (month, is_leap, len) in month_sequence(year) {
        if offset < i64::from(len) {
            return Ok(LunarDate::new(year, month, offset as u32 + 1, is_leap));
        }
        offset -= i64::from(len);
    }
    unreachable!("month sequence covers the whole lunar year");
}

/// Convert a lunar date to its solar counterpart. The leap flag must have
/// been validated (see [`resolve`]); an unknown leap month errors here.
pub fn lunar_to_solar(lunar: LunarDate) -> Result<SolarDate, CalendarError> {
    if !year_in_table(lunar.year) {
        return Err(CalendarError::YearOutOfRange(lunar.year));
    }
    let mut offset: i64 = 0;
    for year in LUNAR_EPOCH_SOLAR.0..lunar.year {
        offset += i64::from(lunar_year_days(year));
    }
    for (month, is_leap, len) in month_sequence(lunar.year) {
        if month == lunar.month && is_leap == lunar.is_leap_month {
            if lunar.day == 0 || lunar.day > len {
                return Err(CalendarError::InvalidDate {
                    year: lunar.year,
                    month: lunar.month,
                    day: lunar.day,
                });
            }
            let epoch_jdn =
                jdn_from_gregorian(LUNAR_EPOCH_SOLAR.0, LUNAR_EPOCH_SOLAR.1, LUNAR_EPOCH_SOLAR.2);
            let (y, m, d) =
                crate::julian::gregorian_from_jdn(epoch_jdn + offset + i64::from(lunar.day) - 1);
            return Ok(SolarDate::new(y, m, d));
        }
        offset += i64::from(len);
    }
    Err(CalendarError::InvalidDate {
        year: lunar.year,
        month: lunar.month,
        day: lunar.day,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_anchor() {
        let lunar = solar_to_lunar(SolarDate::new(1900, 1, 31)).unwrap();
        assert_eq!(lunar, LunarDate::new(1900, 1, 1, false));
    }

    #[test]
    fn known_conversion_1990() {
        let lunar = solar_to_lunar(SolarDate::new(1990, 5, 15)).unwrap();
        assert_eq!(lunar, LunarDate::new(1990, 4, 21, false));
    }

    #[test]
    fn new_year_boundary_1990() {
        // CNY 1990 fell on January 27.
        let before = solar_to_lunar(SolarDate::new(1990, 1, 26)).unwrap();
        assert_eq!(before.year, 1989);
        let after = solar_to_lunar(SolarDate::new(1990, 1, 27)).unwrap();
        assert_eq!(after, LunarDate::new(1990, 1, 1, false));
    }

    #[test]
    fn leap_month_round_trip_2023() {
        // 2023 has a leap second month; its first day was solar March 22.
        let solar = lunar_to_solar(LunarDate::new(2023, 2, 1, true)).unwrap();
        assert_eq!(solar, SolarDate::new(2023, 3, 22));
        let back = solar_to_lunar(solar).unwrap();
        assert_eq!(back, LunarDate::new(2023, 2, 1, true));
    }

    #[test]
    fn bogus_leap_flag_is_corrected() {
        // Lunar 1991 has no leap month at all.
        let date = resolve(1991, 5, 10, true, true).unwrap();
        assert!(!date.lunar.is_leap_month);
        assert_eq!(date.lunar.month, 5);
    }

    #[test]
    fn leap_flag_for_wrong_month_is_corrected() {
        // 1990's leap month is 5, not 4.
        let date = resolve(1990, 4, 10, true, true).unwrap();
        assert!(!date.lunar.is_leap_month);
        let genuine = resolve(1990, 5, 10, true, true).unwrap();
        assert!(genuine.lunar.is_leap_month);
    }

    #[test]
    fn out_of_range_years() {
        assert_eq!(
            resolve(1899, 6, 1, false, false),
            Err(CalendarError::YearOutOfRange(1899))
        );
        assert_eq!(
            resolve(2101, 6, 1, false, false),
            Err(CalendarError::YearOutOfRange(2101))
        );
        assert!(resolve(1900, 6, 1, false, false).is_ok());
        assert!(resolve(2100, 6, 1, false, false).is_ok());
    }

    #[test]
    fn invalid_solar_date_rejected() {
        assert!(matches!(
            resolve(2023, 2, 29, false, false),
            Err(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn season_labels() {
        assert_eq!(resolve(1990, 5, 15, false, false).unwrap().season, Season::Summer);
        assert_eq!(resolve(2024, 1, 10, false, false).unwrap().season, Season::Transition);
        assert_eq!(resolve(2024, 12, 20, false, false).unwrap().season, Season::Winter);
    }

    #[test]
    fn round_trip_across_decades() {
        for &(y, m, d) in &[
            (1900, 2, 1),
            (1944, 7, 20),
            (1984, 12, 1),
            (2024, 2, 10),
            (2060, 6, 15),
            (2100, 11, 30),
        ] {
            let lunar = solar_to_lunar(SolarDate::new(y, m, d)).unwrap();
            let solar = lunar_to_solar(lunar).unwrap();
            assert_eq!(solar, SolarDate::new(y, m, d));
        }
    }
}
