//! Error types for calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::table::{LUNAR_TABLE_FIRST_YEAR, LUNAR_TABLE_LAST_YEAR};

/// Errors from solar/lunar calendar conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Requested year is outside the almanac table span [1900, 2100].
    YearOutOfRange(i32),
    /// Month or day does not exist in the requested calendar year.
    InvalidDate { year: i32, month: u32, day: u32 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(year) => write!(
                f,
                "year {year} outside supported span [{LUNAR_TABLE_FIRST_YEAR}, {LUNAR_TABLE_LAST_YEAR}]"
            ),
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid calendar date {year}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for CalendarError {}
