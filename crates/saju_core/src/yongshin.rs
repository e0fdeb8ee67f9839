//! Useful-element selection (용신 선정).
//!
//! The primary rule is strength-based (억부): a weak day master wants its
//! resource, a strong one wants to be suppressed or drained. Two override
//! rules take precedence when their conditions fire: mediation (통관) when
//! two dominant camps fight through the control cycle, and climate (조후)
//! when the month branch sits at a temperature extreme.

use crate::analysis::ElementStats;
use crate::branch::Temperature;
use crate::element::{Element, ALL_ELEMENTS};
use crate::pillars::Chart;
use crate::strength::{StrengthLevel, StrengthResult};

/// Minimum percentage both camps need for the mediation rule.
pub const MEDIATION_MIN_RATIO: u32 = 30;

/// Which rule branch selected the yongshin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMethod {
    /// Strength-based suppress-or-support rule.
    Eokbu,
    /// Climate correction for temperature extremes.
    Johu,
    /// Mediation between two dominant, mutually hostile camps.
    Tonggwan,
}

impl SelectionMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eokbu => "eokbu",
            Self::Johu => "johu",
            Self::Tonggwan => "tonggwan",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Eokbu => "억부용신(抑扶用神)",
            Self::Johu => "조후용신(調候用神)",
            Self::Tonggwan => "통관용신(通關用神)",
        }
    }
}

/// Deterministic lifestyle recommendations keyed by the yongshin element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendations {
    pub colors: &'static [&'static str],
    pub direction: &'static str,
    pub numbers: [u8; 2],
    pub career: &'static str,
    pub item: &'static str,
}

/// Lucky colors of an element.
pub const fn lucky_colors(element: Element) -> &'static [&'static str] {
    match element {
        Element::Wood => &["green", "teal"],
        Element::Fire => &["red", "orange", "pink"],
        Element::Earth => &["yellow", "beige", "brown"],
        Element::Metal => &["white", "gold", "silver"],
        Element::Water => &["black", "navy", "blue"],
    }
}

/// Lucky compass direction of an element.
pub const fn lucky_direction(element: Element) -> &'static str {
    match element {
        Element::Wood => "East",
        Element::Fire => "South",
        Element::Earth => "Center",
        Element::Metal => "West",
        Element::Water => "North",
    }
}

/// Lucky number pair of an element (the river-chart pairing).
pub const fn lucky_numbers(element: Element) -> [u8; 2] {
    match element {
        Element::Water => [1, 6],
        Element::Fire => [2, 7],
        Element::Wood => [3, 8],
        Element::Metal => [4, 9],
        Element::Earth => [5, 10],
    }
}

/// Career fields resonating with an element.
pub const fn career_advice(element: Element) -> &'static str {
    match element {
        Element::Wood => "education, publishing, design, healthcare",
        Element::Fire => "media, arts, energy, food service",
        Element::Earth => "real estate, construction, agriculture, consulting",
        Element::Metal => "finance, machinery, law, medicine",
        Element::Water => "trade, logistics, research, IT",
    }
}

/// A small talisman object of an element.
pub const fn lucky_item(element: Element) -> &'static str {
    match element {
        Element::Wood => "wooden accessories or plants",
        Element::Fire => "candles or sunny artwork",
        Element::Earth => "ceramics or natural stones",
        Element::Metal => "metal jewelry or a watch",
        Element::Water => "an aquarium or fountain",
    }
}

/// Full recommendation record of an element.
pub const fn recommendations(element: Element) -> Recommendations {
    Recommendations {
        colors: lucky_colors(element),
        direction: lucky_direction(element),
        numbers: lucky_numbers(element),
        career: career_advice(element),
        item: lucky_item(element),
    }
}

/// Outcome of the yongshin selection.
#[derive(Debug, Clone, PartialEq)]
pub struct YongShinResult {
    /// Primary useful element.
    pub yong_shin: Element,
    /// Secondary supportive element.
    pub hee_shin: Element,
    /// Harmful element.
    pub gi_shin: Element,
    pub method: SelectionMethod,
    pub reason: String,
    /// Month-branch climate that fed the johu check.
    pub temperature: Temperature,
    pub recommendations: Recommendations,
}

/// Select yongshin, heeshin and gishin. The three are always pairwise
/// distinct.
pub fn select_yongshin(
    chart: &Chart,
    stats: &ElementStats,
    strength: &StrengthResult,
) -> YongShinResult {
    let day = chart.day_master().element();
    let temperature = chart.month().branch().temperature();

    let (mut yong, mut hee, mut gi, method, reason) =
        if let Some(target) = johu_target(temperature) {
            let yong = target;
            (
                yong,
                yong.generated_by(),
                yong.controlled_by(),
                SelectionMethod::Johu,
                format!(
                    "The {} month branch makes the chart {}; {} corrects the climate first.",
                    chart.month().branch().symbol(),
                    temperature.name(),
                    yong.name(),
                ),
            )
        } else if let Some((controller, victim)) = dominant_feud(stats) {
            // The mediator drains the aggressor and feeds the victim.
            let yong = controller.generates();
            (
                yong,
                victim,
                controller,
                SelectionMethod::Tonggwan,
                format!(
                    "{} and {} both exceed {}% and fight through the control cycle; {} mediates between them.",
                    controller.name(),
                    victim.name(),
                    MEDIATION_MIN_RATIO,
                    yong.name(),
                ),
            )
        } else {
            eokbu(day, stats, strength)
        };

    // Repair any collision so the triple stays pairwise distinct.
    if hee == yong {
        hee = yong.generated_by();
    }
    if gi == yong || gi == hee {
        gi = [
            yong.controlled_by(),
            yong.controls(),
            yong.generates(),
            yong.generated_by(),
        ]
        .into_iter()
        .find(|e| *e != yong && *e != hee)
        .unwrap_or(yong.controlled_by());
    }

    YongShinResult {
        yong_shin: yong,
        hee_shin: hee,
        gi_shin: gi,
        method,
        reason,
        temperature,
        recommendations: recommendations(yong),
    }
}

/// Climate override target, if the month branch is at an extreme.
const fn johu_target(temperature: Temperature) -> Option<Element> {
    match temperature {
        Temperature::VeryHot => Some(Element::Water),
        Temperature::VeryCold => Some(Element::Fire),
        _ => None,
    }
}

/// Two elements both at or above the mediation ratio where one controls the
/// other, strongest pair first.
fn dominant_feud(stats: &ElementStats) -> Option<(Element, Element)> {
    let mut heavy: Vec<Element> = ALL_ELEMENTS
        .into_iter()
        .filter(|e| stats.ratio(*e) >= MEDIATION_MIN_RATIO)
        .collect();
    heavy.sort_by_key(|e| std::cmp::Reverse(stats.ratio(*e)));
    for &a in &heavy {
        for &b in &heavy {
            if a.controls() == b {
                return Some((a, b));
            }
        }
    }
    None
}

/// Strength-based rule: support the weak, suppress the strong, rebalance
/// the balanced.
fn eokbu(
    day: Element,
    stats: &ElementStats,
    strength: &StrengthResult,
) -> (Element, Element, Element, SelectionMethod, String) {
    match strength.level {
        StrengthLevel::Weak | StrengthLevel::VeryWeak => {
            // Resource feeds the weak day master; the heavier of drain and
            // overwhelm is the enemy.
            let drain = day.generates();
            let overwhelm = day.controlled_by();
            let gi = if stats.score(drain) >= stats.score(overwhelm) {
                drain
            } else {
                overwhelm
            };
            (
                day.generated_by(),
                day,
                gi,
                SelectionMethod::Eokbu,
                format!(
                    "A {} day master with only {:.0}% self-support needs its resource {}.",
                    strength.level.status(),
                    strength.self_support_ratio * 100.0,
                    day.generated_by().name(),
                ),
            )
        }
        StrengthLevel::Strong | StrengthLevel::VeryStrong => {
            // The heavier of officer and wealth suppresses the strong day
            // master; its own camp is the enemy.
            let officer = day.controlled_by();
            let wealth = day.controls();
            let yong = if stats.score(officer) >= stats.score(wealth) {
                officer
            } else {
                wealth
            };
            let gi = if stats.score(day) >= stats.score(day.generated_by()) {
                day
            } else {
                day.generated_by()
            };
            (
                yong,
                day.generates(),
                gi,
                SelectionMethod::Eokbu,
                format!(
                    "A {} day master with {:.0}% self-support is best suppressed by {}.",
                    strength.level.status(),
                    strength.self_support_ratio * 100.0,
                    yong.name(),
                ),
            )
        }
        StrengthLevel::Balanced => (
            stats.weakest,
            stats.weakest.generated_by(),
            stats.strongest,
            SelectionMethod::Eokbu,
            format!(
                "A {} chart leans on its thinnest element {} to hold the balance.",
                strength.level.status(),
                stats.weakest.name(),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_elements;
    use crate::pillars::{compute_chart, Gender};
    use crate::strength::analyze_strength;
    use saju_calendar::resolve;

    fn select_for(y: i32, m: u32, d: u32, hour: u32) -> YongShinResult {
        let date = resolve(y, m, d, false, false).unwrap();
        let chart = compute_chart("t", Gender::Male, date, hour, 0, false).unwrap();
        let stats = analyze_elements(&chart);
        let strength = analyze_strength(&chart, &stats);
        select_yongshin(&chart, &stats, &strength)
    }

    #[test]
    fn triple_is_pairwise_distinct() {
        for &(y, m, d, h) in &[
            (1990, 5, 15, 10),
            (1984, 2, 5, 0),
            (2000, 12, 31, 23),
            (1955, 8, 20, 14),
            (2024, 6, 21, 12),
        ] {
            let r = select_for(y, m, d, h);
            assert_ne!(r.yong_shin, r.hee_shin);
            assert_ne!(r.yong_shin, r.gi_shin);
            assert_ne!(r.hee_shin, r.gi_shin);
        }
    }

    #[test]
    fn december_birth_gets_climate_override() {
        // A mid-December chart sits in the 子 month: very cold, fire first.
        let r = select_for(1985, 12, 20, 12);
        assert_eq!(r.method, SelectionMethod::Johu);
        assert_eq!(r.yong_shin, Element::Fire);
        assert_eq!(r.temperature, Temperature::VeryCold);
    }

    #[test]
    fn june_birth_gets_water() {
        // Mid-June is the 午 month: very hot.
        let r = select_for(1992, 6, 21, 12);
        assert_eq!(r.method, SelectionMethod::Johu);
        assert_eq!(r.yong_shin, Element::Water);
    }

    #[test]
    fn golden_chart_mediates_fire_and_metal() {
        // Metal (40%) and fire (30%) both clear the mediation bar and fire
        // controls metal, so earth bridges the feud.
        let r = select_for(1990, 5, 15, 10);
        assert_eq!(r.method, SelectionMethod::Tonggwan);
        assert_eq!(r.yong_shin, Element::Earth);
        assert_eq!(r.hee_shin, Element::Metal);
        assert_eq!(r.gi_shin, Element::Fire);
    }

    #[test]
    fn recommendations_follow_yongshin() {
        let r = select_for(1990, 5, 15, 10);
        assert_eq!(r.recommendations.colors, lucky_colors(r.yong_shin));
        assert_eq!(r.recommendations.numbers, lucky_numbers(r.yong_shin));
        assert_eq!(r.recommendations.direction, lucky_direction(r.yong_shin));
    }

    #[test]
    fn reason_names_the_method() {
        let r = select_for(1985, 12, 20, 12);
        assert!(r.reason.contains("climate"));
    }
}
