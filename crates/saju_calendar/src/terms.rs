//! Solar-term month boundaries and season labels.
//!
//! The month pillar changes at the "jie" solar terms, not at civil month
//! boundaries. Exact term tables are out of scope, so the cutover policy is
//! a fixed day per civil month, declared once here so callers and tests can
//! reference it by name. The approximation is at most one day off the
//! astronomical term for the supported span.

/// Cutover day of each civil month (index 0 = January): on or after this
/// day the solar-term month of that civil month begins.
///
/// Jan 6 (소한), Feb 4 (입춘), Mar 6 (경칩), Apr 5 (청명), May 6 (입하),
/// Jun 6 (망종), Jul 7 (소서), Aug 8 (입추), Sep 8 (백로), Oct 8 (한로),
/// Nov 7 (입동), Dec 7 (대설).
pub const MONTH_CUTOVERS: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Number of solar-term months per year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Solar-term month order for a civil date: 0 = the 寅 (tiger) month
/// beginning in February, through 11 = the 丑 (ox) month beginning in
/// January.
pub const fn month_order(month: u32, day: u32) -> u32 {
    let m = if day >= MONTH_CUTOVERS[(month - 1) as usize] {
        month
    } else if month == 1 {
        12
    } else {
        month - 1
    };
    // Civil February maps to order 0.
    (m + 10) % 12
}

/// Seasons attached to a month branch; transition months (辰未戌丑) sit
/// between seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    Transition,
}

impl Season {
    /// Label used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::Transition => "transition",
        }
    }

    /// Season of a solar-term month order (0 = 寅 month).
    pub const fn from_month_order(order: u32) -> Self {
        match order {
            0 | 1 => Self::Spring,
            3 | 4 => Self::Summer,
            6 | 7 => Self::Autumn,
            9 | 10 => Self::Winter,
            _ => Self::Transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_cutover() {
        // Feb 3 still belongs to the ox month of the closing year.
        assert_eq!(month_order(2, 3), 11);
        assert_eq!(month_order(2, 4), 0);
    }

    #[test]
    fn may_is_fourth_term_month() {
        assert_eq!(month_order(5, 15), 3);
        // Before the May 6 cutover the dragon month still runs.
        assert_eq!(month_order(5, 5), 2);
    }

    #[test]
    fn january_wraps_to_ox_month() {
        assert_eq!(month_order(1, 10), 11);
        // Before Jan 6 the rat month of December still runs.
        assert_eq!(month_order(1, 5), 10);
    }

    #[test]
    fn seasons_by_order() {
        assert_eq!(Season::from_month_order(0), Season::Spring);
        assert_eq!(Season::from_month_order(2), Season::Transition);
        assert_eq!(Season::from_month_order(4), Season::Summer);
        assert_eq!(Season::from_month_order(7), Season::Autumn);
        assert_eq!(Season::from_month_order(10), Season::Winter);
        assert_eq!(Season::from_month_order(11), Season::Transition);
    }
}
