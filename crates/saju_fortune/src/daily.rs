//! Same-day luck index and commentary (오늘의 운세).
//!
//! Pure in (subject, date): the same subject and calendar day always
//! produce the same record, so callers may cache by (subject, date).

use saju_calendar::{weekday_from_jdn, SolarDate, WEEKDAY_NAMES};
use saju_core::day_ganzi;
use saju_core::yongshin::{lucky_colors, lucky_item, lucky_numbers};
use saju_core::{Chart, Ganzi, YongShinResult};

use crate::score::{score_ganzi, Rating};

/// One day's fortune for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyFortune {
    pub date: SolarDate,
    pub weekday: &'static str,
    pub name: String,
    pub ganzi: Ganzi,
    /// 0–100 luck index.
    pub luck_index: u32,
    pub rating: Rating,
    pub overall: String,
    pub love: &'static str,
    pub work: &'static str,
    pub health: &'static str,
    pub warning: &'static str,
    pub lucky_color: &'static str,
    pub lucky_number: u8,
    pub lucky_item: &'static str,
}

const fn love_text(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "Hearts open easily today; say the thing you've been holding back.",
        Rating::Good => "Warm exchanges come naturally; a small gesture lands well.",
        Rating::Neutral => "Keep things light; listening matters more than charm today.",
        Rating::Poor => "Misreadings are easy; double-check tone before you send.",
        Rating::Bad => "Friction is cheap today; postpone the difficult conversation.",
    }
}

const fn work_text(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "Decisions land; push the project you believe in.",
        Rating::Good => "Colleagues cooperate; good day to ask for what you need.",
        Rating::Neutral => "Routine work flows; leave the bold pitch for another day.",
        Rating::Poor => "Details slip; re-read everything before it goes out.",
        Rating::Bad => "Hold signatures and commitments; clear the backlog instead.",
    }
}

const fn health_text(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "Energy runs high; a harder workout suits you.",
        Rating::Good => "Body and mood align; keep the regular rhythm.",
        Rating::Neutral => "Ordinary condition; mind your posture and water intake.",
        Rating::Poor => "Fatigue builds fast; trade intensity for a walk.",
        Rating::Bad => "Rest is the agenda; sleep early and eat simply.",
    }
}

const fn warning_text(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "Confidence can tip into excess; keep one ear open.",
        Rating::Good => "Don't promise beyond today's momentum.",
        Rating::Neutral => "Impulse purchases look better than they are.",
        Rating::Poor => "Avoid lending money or name today.",
        Rating::Bad => "Steer clear of disputes; let provocations pass.",
    }
}

/// Compute one day's fortune for a subject against their selected yongshin.
pub fn daily_fortune(chart: &Chart, yongshin: &YongShinResult, date: SolarDate) -> DailyFortune {
    let ganzi = day_ganzi(date.jdn());
    let luck_index = score_ganzi(ganzi, yongshin.yong_shin, yongshin.gi_shin);
    let rating = Rating::from_score(luck_index);

    let numbers = lucky_numbers(yongshin.yong_shin);
    let overall = format!(
        "A {} {} day ({}): the day's {} energy meets your {} yongshin.",
        rating.name(),
        rating.label(),
        ganzi,
        ganzi.stem().element().name(),
        yongshin.yong_shin.name(),
    );

    DailyFortune {
        date,
        weekday: WEEKDAY_NAMES[weekday_from_jdn(date.jdn()) as usize],
        name: chart.name.clone(),
        ganzi,
        luck_index,
        rating,
        overall,
        love: love_text(rating),
        work: work_text(rating),
        health: health_text(rating),
        warning: warning_text(rating),
        lucky_color: lucky_colors(yongshin.yong_shin)[0],
        lucky_number: numbers[luck_index as usize % 2],
        lucky_item: lucky_item(yongshin.yong_shin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_calendar::resolve;
    use saju_core::{
        analyze_elements, analyze_strength, compute_chart, select_yongshin, Gender,
    };

    fn subject() -> (Chart, YongShinResult) {
        let date = resolve(1990, 5, 15, false, false).unwrap();
        let chart = compute_chart("테스트", Gender::Male, date, 10, 0, false).unwrap();
        let stats = analyze_elements(&chart);
        let strength = analyze_strength(&chart, &stats);
        let ys = select_yongshin(&chart, &stats, &strength);
        (chart, ys)
    }

    #[test]
    fn same_day_same_result() {
        let (chart, ys) = subject();
        let today = SolarDate::new(2026, 8, 31);
        let a = daily_fortune(&chart, &ys, today);
        let b = daily_fortune(&chart, &ys, today);
        assert_eq!(a, b);
    }

    #[test]
    fn known_day_term_and_weekday() {
        let (chart, ys) = subject();
        // 2026-08-31 is a Monday; its day term is 丁丑.
        let f = daily_fortune(&chart, &ys, SolarDate::new(2026, 8, 31));
        assert_eq!(f.weekday, "Monday");
        assert_eq!(f.ganzi.label(), "丁丑");
        assert!(f.luck_index <= 100);
    }

    #[test]
    fn lucky_attributes_keyed_by_yongshin() {
        let (chart, ys) = subject();
        let f = daily_fortune(&chart, &ys, SolarDate::new(2026, 8, 31));
        assert_eq!(f.lucky_color, lucky_colors(ys.yong_shin)[0]);
        assert!(lucky_numbers(ys.yong_shin).contains(&f.lucky_number));
        assert_eq!(f.lucky_item, lucky_item(ys.yong_shin));
    }

    #[test]
    fn texts_follow_rating() {
        let (chart, ys) = subject();
        let f = daily_fortune(&chart, &ys, SolarDate::new(2026, 8, 31));
        assert_eq!(f.love, love_text(f.rating));
        assert_eq!(f.work, work_text(f.rating));
        assert_eq!(f.health, health_text(f.rating));
        assert_eq!(f.warning, warning_text(f.rating));
        assert!(f.overall.contains(f.rating.name()));
    }
}
