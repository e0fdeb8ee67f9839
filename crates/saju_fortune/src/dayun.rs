//! Ten-year luck pillars (대운).
//!
//! The sequence steps through the 60-cycle from the month pillar: forward
//! for yang-year men and yin-year women, backward for the opposite pairing.
//! The first pillar's starting age comes from the distance to the adjacent
//! solar-term cutover at the classical three days per year.

use saju_calendar::{jdn_from_gregorian, CalendarDate, MONTH_CUTOVERS};
use saju_core::{Chart, Element, Gender, Ganzi, Polarity};

use crate::score::{score_ganzi, Rating};

/// Days of term-distance per luck year.
pub const DAYS_PER_LUCK_YEAR: i64 = 3;
/// Years each luck pillar governs.
pub const YEARS_PER_PILLAR: u32 = 10;
/// Number of pillars produced.
pub const PILLAR_COUNT: usize = 10;
/// Starting-age clamp.
pub const MIN_START_AGE: u32 = 1;
pub const MAX_START_AGE: u32 = 10;

/// Direction of travel through the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// One ten-year luck pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaYun {
    pub ganzi: Ganzi,
    /// Korean-age window, inclusive on both ends.
    pub start_age: u32,
    pub end_age: u32,
    pub score: u32,
    pub rating: Rating,
}

/// Travel direction for a subject: yang-year men and yin-year women run
/// forward.
pub const fn direction(gender: Gender, year_stem_polarity: Polarity) -> Direction {
    match (gender, year_stem_polarity) {
        (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => Direction::Forward,
        _ => Direction::Backward,
    }
}

/// Julian day number of the cutover adjacent to `date`: the next one when
/// running forward, the previous one when running backward.
fn adjacent_cutover_jdn(date: &CalendarDate, dir: Direction) -> i64 {
    let solar = date.solar;
    let this_cutover = MONTH_CUTOVERS[(solar.month - 1) as usize];
    match dir {
        Direction::Forward => {
            if solar.day < this_cutover {
                jdn_from_gregorian(solar.year, solar.month, this_cutover)
            } else if solar.month == 12 {
                jdn_from_gregorian(solar.year + 1, 1, MONTH_CUTOVERS[0])
            } else {
                jdn_from_gregorian(solar.year, solar.month + 1, MONTH_CUTOVERS[solar.month as usize])
            }
        }
        Direction::Backward => {
            if solar.day >= this_cutover {
                jdn_from_gregorian(solar.year, solar.month, this_cutover)
            } else if solar.month == 1 {
                jdn_from_gregorian(solar.year - 1, 12, MONTH_CUTOVERS[11])
            } else {
                jdn_from_gregorian(
                    solar.year,
                    solar.month - 1,
                    MONTH_CUTOVERS[(solar.month - 2) as usize],
                )
            }
        }
    }
}

/// Starting age of the first luck pillar: term distance in days over the
/// three-days-per-year constant, rounded, clamped to [1, 10].
pub fn start_age(date: &CalendarDate, dir: Direction) -> u32 {
    let birth = date.solar.jdn();
    let cutover = adjacent_cutover_jdn(date, dir);
    let days = (cutover - birth).abs();
    let years = (days + DAYS_PER_LUCK_YEAR / 2) / DAYS_PER_LUCK_YEAR;
    (years as u32).clamp(MIN_START_AGE, MAX_START_AGE)
}

/// The full ten-pillar luck sequence for a chart.
pub fn compute_da_yun(chart: &Chart, yong: Element, gi: Element) -> Vec<DaYun> {
    let dir = direction(chart.gender, chart.year().stem().polarity());
    let first_age = start_age(&chart.date, dir);
    let month = chart.month().ganzi;

    (1..=PILLAR_COUNT as i64)
        .map(|step| {
            let ganzi = month.step(dir.sign() * step);
            let start = first_age + (step as u32 - 1) * YEARS_PER_PILLAR;
            let score = score_ganzi(ganzi, yong, gi);
            DaYun {
                ganzi,
                start_age: start,
                end_age: start + YEARS_PER_PILLAR - 1,
                score,
                rating: Rating::from_score(score),
            }
        })
        .collect()
}

/// The pillar governing a given Korean age, if any.
pub fn current_da_yun(sequence: &[DaYun], age: u32) -> Option<DaYun> {
    sequence
        .iter()
        .copied()
        .find(|d| (d.start_age..=d.end_age).contains(&age))
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_calendar::resolve;
    use saju_core::compute_chart;

    fn chart(gender: Gender) -> Chart {
        let date = resolve(1990, 5, 15, false, false).unwrap();
        compute_chart("t", gender, date, 10, 0, false).unwrap()
    }

    #[test]
    fn direction_rule() {
        assert_eq!(direction(Gender::Male, Polarity::Yang), Direction::Forward);
        assert_eq!(direction(Gender::Female, Polarity::Yin), Direction::Forward);
        assert_eq!(direction(Gender::Male, Polarity::Yin), Direction::Backward);
        assert_eq!(direction(Gender::Female, Polarity::Yang), Direction::Backward);
    }

    #[test]
    fn golden_male_runs_forward() {
        // 1990 is a 庚 (yang) year, so a man steps forward from 辛巳.
        let sequence = compute_da_yun(&chart(Gender::Male), Element::Earth, Element::Fire);
        assert_eq!(sequence.len(), PILLAR_COUNT);
        assert_eq!(sequence[0].ganzi.label(), "壬午");
        assert_eq!(sequence[1].ganzi.label(), "癸未");
    }

    #[test]
    fn golden_female_runs_backward() {
        let sequence = compute_da_yun(&chart(Gender::Female), Element::Earth, Element::Fire);
        assert_eq!(sequence[0].ganzi.label(), "庚辰");
        assert_eq!(sequence[1].ganzi.label(), "己卯");
    }

    #[test]
    fn age_windows_are_contiguous_decades() {
        let sequence = compute_da_yun(&chart(Gender::Male), Element::Earth, Element::Fire);
        for pair in sequence.windows(2) {
            assert_eq!(pair[0].end_age + 1, pair[1].start_age);
            assert_eq!(pair[0].end_age - pair[0].start_age + 1, YEARS_PER_PILLAR);
        }
        assert!((MIN_START_AGE..=MAX_START_AGE).contains(&sequence[0].start_age));
    }

    #[test]
    fn start_age_from_term_distance() {
        // Born May 15, next cutover Jun 6: 22 days ≈ 7 years forward.
        let date = resolve(1990, 5, 15, false, false).unwrap();
        assert_eq!(start_age(&date, Direction::Forward), 7);
        // Previous cutover May 6: 9 days = 3 years backward.
        assert_eq!(start_age(&date, Direction::Backward), 3);
    }

    #[test]
    fn current_pillar_lookup() {
        let sequence = compute_da_yun(&chart(Gender::Male), Element::Earth, Element::Fire);
        let first = sequence[0];
        assert_eq!(current_da_yun(&sequence, first.start_age), Some(first));
        assert_eq!(current_da_yun(&sequence, first.start_age.wrapping_sub(1)), None);
    }
}
