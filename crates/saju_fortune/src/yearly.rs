//! Per-year luck scores (세운).

use saju_core::{year_ganzi, Element, Ganzi};

use crate::score::{score_ganzi, Rating};

/// One calendar year's fortune.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyFortune {
    pub year: i32,
    pub ganzi: Ganzi,
    pub score: u32,
    pub rating: Rating,
    pub summary: &'static str,
}

/// One-line summary per rating bucket.
pub const fn summary_for(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "A year of strong tailwinds; commit to the big move.",
        Rating::Good => "Favorable currents; steady effort pays off visibly.",
        Rating::Neutral => "An ordinary year; maintain course and build reserves.",
        Rating::Poor => "Headwinds likely; avoid overreach and guard what you have.",
        Rating::Bad => "A taxing year; postpone risk and look after your health.",
    }
}

/// Score one calendar year against the yongshin/gishin pair.
pub fn yearly_fortune(year: i32, yong: Element, gi: Element) -> YearlyFortune {
    let ganzi = year_ganzi(year);
    let score = score_ganzi(ganzi, yong, gi);
    let rating = Rating::from_score(score);
    YearlyFortune {
        year,
        ganzi,
        score,
        rating,
        summary: summary_for(rating),
    }
}

/// Score an inclusive range of calendar years.
pub fn yearly_fortunes(
    first_year: i32,
    last_year: i32,
    yong: Element,
    gi: Element,
) -> Vec<YearlyFortune> {
    (first_year..=last_year)
        .map(|y| yearly_fortune(y, yong, gi))
        .collect()
}
