//! Full-pipeline assembly: birth payload in, analysis report out.
//!
//! Runs the calendar, pillar, element, strength, yongshin, ten-gods,
//! interaction and fortune stages in order and serializes the result into
//! the JSON-shaped contract consumed by the narrative and UI collaborators.

pub mod records;
pub mod text;

use serde::Deserialize;

use saju_calendar::{leap_month_of as calendar_leap_month, resolve, SolarDate};
use saju_core::{
    analyze_elements, analyze_interactions, analyze_strength, analyze_ten_gods, compute_chart,
    select_yongshin, Chart, Gender, SajuError, YongShinResult,
};
use saju_fortune::{
    compute_da_yun, current_da_yun, daily_fortune, direction, korean_age, start_age,
    yearly_fortune, yearly_fortunes,
};

pub use records::{AnalysisReport, DailyReport, LeapMonthInfo};
pub use text::report_to_text;

/// Calendar years of yearly fortune shown ahead of the current year.
pub const YEARLY_FORTUNE_SPAN: i32 = 4;

/// The birth payload accepted by every operation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BirthInput {
    pub name: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    /// `"남"` / `"여"`, with `male` / `female` accepted as aliases.
    pub gender: String,
    #[serde(default)]
    pub is_lunar: bool,
    #[serde(default)]
    pub is_leap_month: bool,
}

/// Parse the payload's gender field.
pub fn parse_gender(raw: &str) -> Result<Gender, SajuError> {
    match raw {
        "남" | "male" | "M" | "m" => Ok(Gender::Male),
        "여" | "female" | "F" | "f" => Ok(Gender::Female),
        _ => Err(SajuError::InvalidInput("gender must be 남/여 or male/female")),
    }
}

/// Stages 1–5: resolve the calendar date, compute the chart and select the
/// yongshin. Shared by the full analysis and the daily endpoint.
fn chart_and_yongshin(input: &BirthInput) -> Result<(Chart, saju_core::ElementStats, saju_core::StrengthResult, YongShinResult), SajuError> {
    let gender = parse_gender(&input.gender)?;
    let date = resolve(
        input.year,
        input.month,
        input.day,
        input.is_lunar,
        input.is_leap_month,
    )?;
    let chart = compute_chart(&input.name, gender, date, input.hour, input.minute, input.is_lunar)?;
    let stats = analyze_elements(&chart);
    let strength = analyze_strength(&chart, &stats);
    let yongshin = select_yongshin(&chart, &stats, &strength);
    Ok((chart, stats, strength, yongshin))
}

/// Run the whole pipeline for a subject; `today` anchors ages and the
/// yearly fortune window.
pub fn analyze(input: &BirthInput, today: SolarDate) -> Result<AnalysisReport, SajuError> {
    let (chart, stats, strength, yongshin) = chart_and_yongshin(input)?;
    let gods = analyze_ten_gods(&chart);
    let relations = analyze_interactions(&chart);

    let dir = direction(chart.gender, chart.year().stem().polarity());
    let first_age = start_age(&chart.date, dir);
    let sequence = compute_da_yun(&chart, yongshin.yong_shin, yongshin.gi_shin);
    let current_age = korean_age(chart.date.solar.year, today.year);
    let current = current_da_yun(&sequence, current_age);

    let current_year = yearly_fortune(today.year, yongshin.yong_shin, yongshin.gi_shin);
    let years = yearly_fortunes(
        today.year,
        today.year + YEARLY_FORTUNE_SPAN,
        yongshin.yong_shin,
        yongshin.gi_shin,
    );

    Ok(AnalysisReport {
        eight_characters: records::EightCharactersRecord::from_chart(&chart),
        element_analysis: records::ElementAnalysisRecord::from_stats(&stats),
        strength_analysis: records::StrengthAnalysisRecord::from_strength(&strength),
        ten_gods_analysis: records::TenGodsAnalysisRecord::from_result(&gods),
        interactions_analysis: records::InteractionsAnalysisRecord::from_result(&relations),
        yong_shin_analysis: records::YongShinAnalysisRecord::from_result(&yongshin),
        fortune_analysis: records::FortuneAnalysisRecord {
            direction: dir.name(),
            start_age: first_age,
            current_age,
            current_year: today.year,
            da_yun_list: sequence.iter().map(records::DaYunRecord::from_da_yun).collect(),
            current_da_yun: current.as_ref().map(records::DaYunRecord::from_da_yun),
            current_year_fortune: records::YearlyFortuneRecord::from_yearly(&current_year),
            yearly_fortunes: years
                .iter()
                .map(records::YearlyFortuneRecord::from_yearly)
                .collect(),
        },
    })
}

/// The flat daily-fortune object for one subject and calendar day.
pub fn daily(input: &BirthInput, date: SolarDate) -> Result<DailyReport, SajuError> {
    let (chart, _, _, yongshin) = chart_and_yongshin(input)?;
    let fortune = daily_fortune(&chart, &yongshin, date);
    Ok(DailyReport::from_daily(&fortune))
}

/// Leap-month lookup for a lunar year (0 = none).
pub fn leap_month_of(year: i32) -> Result<LeapMonthInfo, SajuError> {
    let leap_month = calendar_leap_month(year)?;
    Ok(LeapMonthInfo { year, leap_month })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_aliases() {
        assert_eq!(parse_gender("남").unwrap(), Gender::Male);
        assert_eq!(parse_gender("여").unwrap(), Gender::Female);
        assert_eq!(parse_gender("male").unwrap(), Gender::Male);
        assert_eq!(parse_gender("F").unwrap(), Gender::Female);
        assert!(parse_gender("x").is_err());
    }

    #[test]
    fn leap_month_lookup() {
        assert_eq!(
            leap_month_of(2023).unwrap(),
            LeapMonthInfo { year: 2023, leap_month: 2 }
        );
        assert_eq!(leap_month_of(1991).unwrap().leap_month, 0);
        assert!(leap_month_of(1899).is_err());
    }
}
