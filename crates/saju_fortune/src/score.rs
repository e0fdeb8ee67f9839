//! Compatibility scoring of a cycle term against the chart's useful and
//! harmful elements. Shared by the luck-cycle, yearly and daily stages.

use saju_core::{Element, Ganzi};

/// Neutral starting score.
pub const BASE_SCORE: i32 = 50;
/// Bonus when a term's element is the yongshin itself.
pub const YONGSHIN_MATCH_BONUS: i32 = 25;
/// Bonus when it generates the yongshin.
pub const FEEDS_YONGSHIN_BONUS: i32 = 15;
/// Bonus when the yongshin generates it.
pub const FED_BY_YONGSHIN_BONUS: i32 = 5;
/// Penalty when it is the gishin itself.
pub const GISHIN_MATCH_PENALTY: i32 = 20;
/// Penalty when it generates the gishin.
pub const FEEDS_GISHIN_PENALTY: i32 = 10;

/// Rating buckets over the 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    Neutral,
    Poor,
    Bad,
}

/// Lowest score of each bucket, top down.
pub const RATING_EXCELLENT_MIN: u32 = 85;
pub const RATING_GOOD_MIN: u32 = 70;
pub const RATING_NEUTRAL_MIN: u32 = 55;
pub const RATING_POOR_MIN: u32 = 40;

impl Rating {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Poor => "poor",
            Self::Bad => "bad",
        }
    }

    /// Traditional luck label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "대길(大吉)",
            Self::Good => "길(吉)",
            Self::Neutral => "평(平)",
            Self::Poor => "흉(凶)",
            Self::Bad => "대흉(大凶)",
        }
    }

    /// Bucket of a 0–100 score.
    pub const fn from_score(score: u32) -> Self {
        if score >= RATING_EXCELLENT_MIN {
            Self::Excellent
        } else if score >= RATING_GOOD_MIN {
            Self::Good
        } else if score >= RATING_NEUTRAL_MIN {
            Self::Neutral
        } else if score >= RATING_POOR_MIN {
            Self::Poor
        } else {
            Self::Bad
        }
    }
}

fn element_delta(element: Element, yong: Element, gi: Element) -> i32 {
    let mut delta = 0;
    if element == yong {
        delta += YONGSHIN_MATCH_BONUS;
    } else if element.generates() == yong {
        delta += FEEDS_YONGSHIN_BONUS;
    } else if yong.generates() == element {
        delta += FED_BY_YONGSHIN_BONUS;
    }
    if element == gi {
        delta -= GISHIN_MATCH_PENALTY;
    } else if element.generates() == gi {
        delta -= FEEDS_GISHIN_PENALTY;
    }
    delta
}

/// Score a cycle term against the yongshin/gishin pair; stem and branch
/// elements each contribute, clamped to [0, 100].
pub fn score_ganzi(ganzi: Ganzi, yong: Element, gi: Element) -> u32 {
    let score = BASE_SCORE
        + element_delta(ganzi.stem().element(), yong, gi)
        + element_delta(ganzi.branch().element(), yong, gi);
    score.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_yongshin_match_is_excellent() {
        // 戊辰: earth stem, earth branch against an earth yongshin.
        let g = Ganzi::from_cycle_index(4);
        assert_eq!(g.label(), "戊辰");
        let score = score_ganzi(g, Element::Earth, Element::Water);
        assert_eq!(score, 100);
        assert_eq!(Rating::from_score(score), Rating::Excellent);
    }

    #[test]
    fn double_gishin_match_is_bad() {
        // 壬子: water stem and branch against a water gishin feeding-wood
        // yongshin gives +15+15−20−20.
        let g = Ganzi::from_cycle_index(48);
        assert_eq!(g.label(), "壬子");
        let score = score_ganzi(g, Element::Wood, Element::Water);
        assert_eq!(score, 40);
        assert_eq!(Rating::from_score(score), Rating::Poor);
    }

    #[test]
    fn neutral_term_keeps_base() {
        // 甲寅 wood against a metal yongshin / earth gishin: wood neither
        // feeds nor fights either camp directly.
        let g = Ganzi::from_cycle_index(50);
        assert_eq!(g.label(), "甲寅");
        assert_eq!(score_ganzi(g, Element::Metal, Element::Earth), 50);
    }

    #[test]
    fn score_never_leaves_bounds() {
        for i in 0..60 {
            let g = Ganzi::from_cycle_index(i);
            for &y in &saju_core::ALL_ELEMENTS {
                for &gi in &saju_core::ALL_ELEMENTS {
                    assert!(score_ganzi(g, y, gi) <= 100);
                }
            }
        }
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(Rating::from_score(85), Rating::Excellent);
        assert_eq!(Rating::from_score(84), Rating::Good);
        assert_eq!(Rating::from_score(70), Rating::Good);
        assert_eq!(Rating::from_score(69), Rating::Neutral);
        assert_eq!(Rating::from_score(55), Rating::Neutral);
        assert_eq!(Rating::from_score(54), Rating::Poor);
        assert_eq!(Rating::from_score(40), Rating::Poor);
        assert_eq!(Rating::from_score(39), Rating::Bad);
        assert_eq!(Rating::from_score(0), Rating::Bad);
    }
}
