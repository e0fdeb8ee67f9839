//! Calendar layer for the saju engine.
//!
//! This crate provides:
//! - Julian day number ↔ Gregorian calendar conversions
//! - The packed 1900–2100 lunar almanac table and leap-month lookup
//! - Solar ↔ lunar date conversion with leap-month correction
//! - The solar-term month-cutover policy and season labels
//!
//! Everything is pure and table-driven; the almanac is `'static` const data
//! safe for unsynchronized concurrent reads.

pub mod error;
pub mod julian;
pub mod lunar;
pub mod table;
pub mod terms;

pub use error::CalendarError;
pub use julian::{
    days_in_month, gregorian_from_jdn, is_leap_year, jdn_from_gregorian, weekday_from_jdn,
    WEEKDAY_NAMES,
};
pub use lunar::{leap_month_of, lunar_to_solar, resolve, solar_to_lunar, CalendarDate, LunarDate, SolarDate};
pub use table::{LUNAR_TABLE_FIRST_YEAR, LUNAR_TABLE_LAST_YEAR};
pub use terms::{month_order, Season, MONTH_CUTOVERS};
