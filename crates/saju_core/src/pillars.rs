//! Four-pillar (사주팔자) chart computation.
//!
//! Pillar derivation is entirely arithmetic over the calendar layer:
//! - year pillar from the lunar year's position in the 60-cycle
//! - month pillar from the solar-term month order and the five-tigers rule
//! - day pillar from the Julian day number
//! - hour pillar from the two-hour block and the five-rats rule

use saju_calendar::{month_order, CalendarDate};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::ganzi::Ganzi;
use crate::stem::Stem;

/// Subject gender; steers the luck-cycle direction, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

/// Which of the four pillars a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillarSlot {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarSlot {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// One pillar of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub slot: PillarSlot,
    pub ganzi: Ganzi,
}

impl Pillar {
    pub const fn stem(self) -> Stem {
        self.ganzi.stem()
    }

    pub const fn branch(self) -> Branch {
        self.ganzi.branch()
    }
}

/// A complete chart: the four pillars plus the birth data they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub name: String,
    pub gender: Gender,
    pub date: CalendarDate,
    pub hour: u32,
    pub minute: u32,
    pub is_lunar_input: bool,
    pub pillars: [Pillar; 4],
}

impl Chart {
    pub const fn year(&self) -> Pillar {
        self.pillars[0]
    }

    pub const fn month(&self) -> Pillar {
        self.pillars[1]
    }

    pub const fn day(&self) -> Pillar {
        self.pillars[2]
    }

    pub const fn hour_pillar(&self) -> Pillar {
        self.pillars[3]
    }

    /// The day stem, axis of all strength and god analysis.
    pub const fn day_master(&self) -> Stem {
        self.pillars[2].ganzi.stem()
    }

    pub fn stems(&self) -> [Stem; 4] {
        [
            self.pillars[0].stem(),
            self.pillars[1].stem(),
            self.pillars[2].stem(),
            self.pillars[3].stem(),
        ]
    }

    pub fn branches(&self) -> [Branch; 4] {
        [
            self.pillars[0].branch(),
            self.pillars[1].branch(),
            self.pillars[2].branch(),
            self.pillars[3].branch(),
        ]
    }
}

/// First month stem index per year-stem class (five-tigers rule, 오호둔).
/// Indexed by `year_stem.index() % 5`.
const FIRST_MONTH_STEM: [usize; 5] = [2, 4, 6, 8, 0];

/// First hour stem index per day-stem class (five-rats rule, 오서둔).
/// Indexed by `day_stem.index() % 5`.
const FIRST_HOUR_STEM: [usize; 5] = [0, 2, 4, 6, 8];

/// JDN-to-cycle offset: JDN 0 falls 49 terms before a 甲子 day.
const DAY_CYCLE_OFFSET: i64 = 49;

/// Year-to-cycle offset: lunar year 4 CE was a 甲子 year.
const YEAR_CYCLE_OFFSET: i64 = 4;

/// Year pillar of a lunar year.
pub const fn year_ganzi(lunar_year: i32) -> Ganzi {
    Ganzi::from_cycle_index(lunar_year as i64 - YEAR_CYCLE_OFFSET)
}

/// Day pillar of a Julian day number.
pub const fn day_ganzi(jdn: i64) -> Ganzi {
    Ganzi::from_cycle_index(jdn + DAY_CYCLE_OFFSET)
}

/// Month pillar from the year stem and the solar-term month order
/// (0 = the 寅 month).
fn month_ganzi(year_stem: Stem, order: u32) -> Result<Ganzi, SajuError> {
    let branch = Branch::from_index((order as usize + 2) % 12)
        .ok_or(SajuError::InternalTable("month branch index"))?;
    let stem_idx = (FIRST_MONTH_STEM[year_stem.index() % 5] + order as usize) % 10;
    let stem = Stem::from_index(stem_idx).ok_or(SajuError::InternalTable("month stem index"))?;
    Ganzi::new(stem, branch).ok_or(SajuError::InternalTable("month stem/branch parity"))
}

/// Hour pillar from the day stem and the clock hour. The 子 block spans
/// 23:00 through 00:59.
fn hour_ganzi(day_stem: Stem, hour: u32) -> Result<Ganzi, SajuError> {
    let branch_idx = (((hour + 1) / 2) % 12) as usize;
    let branch =
        Branch::from_index(branch_idx).ok_or(SajuError::InternalTable("hour branch index"))?;
    let stem_idx = (FIRST_HOUR_STEM[day_stem.index() % 5] + branch_idx) % 10;
    let stem = Stem::from_index(stem_idx).ok_or(SajuError::InternalTable("hour stem index"))?;
    Ganzi::new(stem, branch).ok_or(SajuError::InternalTable("hour stem/branch parity"))
}

/// Compute the four pillars for a resolved birth date and clock time.
pub fn compute_chart(
    name: &str,
    gender: Gender,
    date: CalendarDate,
    hour: u32,
    minute: u32,
    is_lunar_input: bool,
) -> Result<Chart, SajuError> {
    if hour > 23 {
        return Err(SajuError::InvalidInput("hour must be 0..=23"));
    }
    if minute > 59 {
        return Err(SajuError::InvalidInput("minute must be 0..=59"));
    }

    let year = year_ganzi(date.lunar.year);
    let order = month_order(date.solar.month, date.solar.day);
    let month = month_ganzi(year.stem(), order)?;
    let day = day_ganzi(date.solar.jdn());
    let hour_gz = hour_ganzi(day.stem(), hour)?;

    Ok(Chart {
        name: name.to_owned(),
        gender,
        date,
        hour,
        minute,
        is_lunar_input,
        pillars: [
            Pillar { slot: PillarSlot::Year, ganzi: year },
            Pillar { slot: PillarSlot::Month, ganzi: month },
            Pillar { slot: PillarSlot::Day, ganzi: day },
            Pillar { slot: PillarSlot::Hour, ganzi: hour_gz },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_calendar::resolve;

    fn chart_for(y: i32, m: u32, d: u32, hour: u32) -> Chart {
        let date = resolve(y, m, d, false, false).unwrap();
        compute_chart("test", Gender::Male, date, hour, 0, false).unwrap()
    }

    #[test]
    fn golden_chart_1990_05_15() {
        let chart = chart_for(1990, 5, 15, 10);
        assert_eq!(chart.year().ganzi.label(), "庚午");
        assert_eq!(chart.month().ganzi.label(), "辛巳");
        assert_eq!(chart.day().ganzi.label(), "庚辰");
        assert_eq!(chart.hour_pillar().ganzi.label(), "辛巳");
        assert_eq!(chart.day_master(), Stem::Gyeong);
    }

    #[test]
    fn year_cycle_anchors() {
        // 1984 opened a cycle; 1990 was 庚午.
        assert_eq!(year_ganzi(1984).label(), "甲子");
        assert_eq!(year_ganzi(1990).label(), "庚午");
        assert_eq!(year_ganzi(2024).label(), "甲辰");
    }

    #[test]
    fn day_cycle_anchors() {
        // 1949-10-01 was a 甲子 day.
        let jdn = saju_calendar::jdn_from_gregorian(1949, 10, 1);
        assert_eq!(day_ganzi(jdn).label(), "甲子");
        // 1900-01-01 was a 甲戌 day.
        let jdn = saju_calendar::jdn_from_gregorian(1900, 1, 1);
        assert_eq!(day_ganzi(jdn).label(), "甲戌");
    }

    #[test]
    fn year_pillar_follows_lunar_new_year() {
        // Jan 26 1990 is still lunar 1989 (己巳); Jan 27 starts 庚午.
        let before = chart_for(1990, 1, 26, 12);
        assert_eq!(before.year().ganzi.label(), "己巳");
        let after = chart_for(1990, 1, 27, 12);
        assert_eq!(after.year().ganzi.label(), "庚午");
    }

    #[test]
    fn midnight_hour_block() {
        // 23:00 and 00:30 both fall in the 子 block.
        let late = chart_for(1990, 5, 15, 23);
        assert_eq!(late.hour_pillar().branch(), Branch::Ja);
        let early = chart_for(1990, 5, 15, 0);
        assert_eq!(early.hour_pillar().branch(), Branch::Ja);
        // A 庚 day starts its hours at 丙子 (five-rats rule).
        assert_eq!(early.hour_pillar().stem(), Stem::Byeong);
    }

    #[test]
    fn hour_out_of_range_rejected() {
        let date = resolve(1990, 5, 15, false, false).unwrap();
        assert_eq!(
            compute_chart("t", Gender::Male, date, 24, 0, false),
            Err(SajuError::InvalidInput("hour must be 0..=23"))
        );
    }

    #[test]
    fn five_tigers_rule_examples() {
        // 甲 year: first month stem 丙; 庚 year: 戊.
        assert_eq!(month_ganzi(Stem::Gap, 0).unwrap().label(), "丙寅");
        assert_eq!(month_ganzi(Stem::Gyeong, 0).unwrap().label(), "戊寅");
        // 1990-05-15 falls in month order 3 of a 庚 year: 辛巳.
        assert_eq!(month_ganzi(Stem::Gyeong, 3).unwrap().label(), "辛巳");
    }

    #[test]
    fn parity_invariant_on_all_pillars() {
        for hour in [0, 5, 10, 15, 22, 23] {
            let chart = chart_for(2024, 8, 9, hour);
            for p in chart.pillars {
                assert_eq!(p.stem().index() % 2, p.branch().index() % 2);
            }
        }
    }
}
