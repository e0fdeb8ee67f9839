//! End-to-end golden tests of the assembled report against the reference
//! payload.

use saju_calendar::SolarDate;
use saju_report::{analyze, daily, leap_month_of, report_to_text, BirthInput};

fn reference_input() -> BirthInput {
    BirthInput {
        name: "테스트".to_owned(),
        year: 1990,
        month: 5,
        day: 15,
        hour: 10,
        minute: 0,
        gender: "남".to_owned(),
        is_lunar: false,
        is_leap_month: false,
    }
}

const TODAY: SolarDate = SolarDate::new(2026, 8, 31);

#[test]
fn reference_payload_report_shape() {
    let report = analyze(&reference_input(), TODAY).unwrap();

    let ec = &report.eight_characters;
    assert_eq!(ec.pillars.year.ganzi, "庚午");
    assert_eq!(ec.pillars.month.ganzi, "辛巳");
    assert_eq!(ec.pillars.day.ganzi, "庚辰");
    assert_eq!(ec.pillars.hour.ganzi, "辛巳");
    assert_eq!(ec.day_stem.stem, "庚");
    assert_eq!(ec.gender, "남");
    assert_eq!(ec.solar_date, "1990-05-15");
    assert_eq!(ec.lunar_date, "1990-04-21");

    let ea = &report.element_analysis;
    assert_eq!(ea.element_stats.len(), 5);
    let ratio_sum: u32 = ea.element_stats.values().map(|s| s.ratio).sum();
    assert_eq!(ratio_sum, 100);
    assert_eq!(ea.strongest_element, "Metal");

    assert_eq!(report.strength_analysis.strength_status, "신강(身强)");
    assert_eq!(report.yong_shin_analysis.yong_shin, "Earth");
    assert_eq!(report.yong_shin_analysis.selection_method, "tonggwan");

    let fa = &report.fortune_analysis;
    assert_eq!(fa.direction, "forward");
    assert_eq!(fa.da_yun_list.len(), 10);
    assert_eq!(fa.yearly_fortunes.len(), 5);
    assert_eq!(fa.current_age, 37);
}

#[test]
fn serialized_output_is_deterministic() {
    let a = serde_json::to_string(&analyze(&reference_input(), TODAY).unwrap()).unwrap();
    let b = serde_json::to_string(&analyze(&reference_input(), TODAY).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn json_contract_top_level_sections() {
    let report = analyze(&reference_input(), TODAY).unwrap();
    let value: serde_json::Value = serde_json::to_value(&report).unwrap();
    for key in [
        "eight_characters",
        "element_analysis",
        "strength_analysis",
        "ten_gods_analysis",
        "interactions_analysis",
        "yong_shin_analysis",
        "fortune_analysis",
    ] {
        assert!(value.get(key).is_some(), "missing section {key}");
    }
    assert_eq!(
        value["eight_characters"]["pillars"]
            .as_object()
            .unwrap()
            .len(),
        4
    );
}

#[test]
fn lunar_input_with_bogus_leap_flag_recovers() {
    let mut input = reference_input();
    input.is_lunar = true;
    input.is_leap_month = true;
    input.month = 4;
    input.day = 21;
    // Lunar 1990's leap month is 5, not 4: the flag is dropped and the
    // chart equals the solar-input chart.
    let report = analyze(&input, TODAY).unwrap();
    assert!(!report.eight_characters.is_leap_month);
    assert_eq!(report.eight_characters.solar_date, "1990-05-15");
    assert_eq!(report.eight_characters.pillars.day.ganzi, "庚辰");
}

#[test]
fn out_of_range_year_fails() {
    let mut input = reference_input();
    input.year = 1899;
    assert!(analyze(&input, TODAY).is_err());
    input.year = 2101;
    assert!(analyze(&input, TODAY).is_err());
    input.year = 1900;
    assert!(analyze(&input, TODAY).is_ok());
    input.year = 2100;
    assert!(analyze(&input, TODAY).is_ok());
}

#[test]
fn daily_report_for_reference_subject() {
    let report = daily(&reference_input(), TODAY).unwrap();
    assert_eq!(report.date, "2026-08-31");
    assert_eq!(report.weekday, "Monday");
    assert_eq!(report.day_ganzi, "丁丑");
    assert!(report.luck_index <= 100);
    assert_eq!(report.name, "테스트");

    let again = daily(&reference_input(), TODAY).unwrap();
    assert_eq!(report, again);
}

#[test]
fn leap_month_endpoint() {
    let info = leap_month_of(2020).unwrap();
    assert_eq!(info.leap_month, 4);
    let none = leap_month_of(1992).unwrap();
    assert_eq!(none.leap_month, 0);
}

#[test]
fn text_rendering_covers_sections() {
    let report = analyze(&reference_input(), TODAY).unwrap();
    let text = report_to_text(&report);
    for header in [
        "[Subject]",
        "[Four Pillars]",
        "[Elements]",
        "[Strength]",
        "[Ten Gods]",
        "[Interactions]",
        "[YongShin]",
        "[Fortune Cycles]",
    ] {
        assert!(text.contains(header), "missing {header}");
    }
    assert!(text.contains("庚辰"));
    assert!(text.contains("테스트"));
}
