//! Error type for chart computation.

use saju_calendar::CalendarError;

/// Errors surfaced while computing or analyzing a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SajuError {
    /// Calendar resolution failed (out-of-range year, invalid date).
    Calendar(CalendarError),
    /// A birth-time field was outside its valid range.
    InvalidInput(&'static str),
    /// An internal lookup produced an index outside its table. Indicates a
    /// defect, never bad user input.
    InternalTable(&'static str),
}

impl std::fmt::Display for SajuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::InvalidInput(what) => write!(f, "invalid input: {what}"),
            Self::InternalTable(what) => write!(f, "internal table lookup failed: {what}"),
        }
    }
}

impl std::error::Error for SajuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for SajuError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
