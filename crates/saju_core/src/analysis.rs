//! Weighted element distribution of a chart.
//!
//! Each of the eight characters contributes its element score by position;
//! branch weight is split across the hidden stems in proportion to their
//! day-weights. Ratios are integer percentages summing to exactly 100.

use crate::element::{Element, ALL_ELEMENTS};
use crate::pillars::Chart;

/// Position weights (stem, branch) for year, month, day, hour. The month
/// branch (월령) dominates; the day stem is scored separately as the day
/// master.
pub const POSITION_WEIGHTS: [(f64, f64); 4] = [(10.0, 10.0), (10.0, 35.0), (0.0, 18.0), (7.0, 10.0)];

/// Flat score added for the day master itself.
pub const DAY_MASTER_BASE_SCORE: f64 = 5.0;

/// An element whose ratio falls below this percentage counts as missing.
pub const MISSING_RATIO_MAX: u32 = 5;

/// Per-element tally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStat {
    /// Raw character count (stems and branch main elements, day stem included).
    pub count: u32,
    /// Weighted score.
    pub score: f64,
    /// Integer percentage of the total score.
    pub ratio: u32,
}

/// Element distribution of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStats {
    stats: [ElementStat; 5],
    pub total_score: f64,
    pub strongest: Element,
    pub weakest: Element,
    pub missing: Vec<Element>,
    pub day_element: Element,
}

impl ElementStats {
    pub fn get(&self, element: Element) -> ElementStat {
        self.stats[element.index()]
    }

    pub fn score(&self, element: Element) -> f64 {
        self.stats[element.index()].score
    }

    pub fn ratio(&self, element: Element) -> u32 {
        self.stats[element.index()].ratio
    }
}

/// Score every element across the eight characters.
pub fn analyze_elements(chart: &Chart) -> ElementStats {
    let mut score = [0.0f64; 5];
    let mut count = [0u32; 5];

    for (pillar, &(stem_w, branch_w)) in chart.pillars.iter().zip(POSITION_WEIGHTS.iter()) {
        let stem_elem = pillar.stem().element();
        score[stem_elem.index()] += stem_w;
        count[stem_elem.index()] += 1;

        let branch = pillar.branch();
        count[branch.element().index()] += 1;
        // Branch weight splits across hidden stems by day-weight.
        let total_weight: f64 = branch
            .hidden_stems()
            .iter()
            .map(|(_, w)| f64::from(*w))
            .sum();
        for &(hidden, w) in branch.hidden_stems() {
            score[hidden.element().index()] += branch_w * f64::from(w) / total_weight;
        }
    }

    let day_element = chart.day_master().element();
    score[day_element.index()] += DAY_MASTER_BASE_SCORE;

    let total_score: f64 = score.iter().sum();
    let ratio = integer_ratios(&score, total_score);

    let mut strongest = Element::Wood;
    let mut weakest = Element::Wood;
    for e in ALL_ELEMENTS {
        if score[e.index()] > score[strongest.index()] {
            strongest = e;
        }
        if score[e.index()] < score[weakest.index()] {
            weakest = e;
        }
    }
    let missing: Vec<Element> = ALL_ELEMENTS
        .into_iter()
        .filter(|e| ratio[e.index()] < MISSING_RATIO_MAX)
        .collect();

    let stats = std::array::from_fn(|i| ElementStat {
        count: count[i],
        score: score[i],
        ratio: ratio[i],
    });

    ElementStats {
        stats,
        total_score,
        strongest,
        weakest,
        missing,
        day_element,
    }
}

/// Integer percentages by largest remainder; always sums to 100. Ties in
/// remainder break toward the earlier element in cycle order.
fn integer_ratios(score: &[f64; 5], total: f64) -> [u32; 5] {
    if total <= 0.0 {
        return [20, 20, 20, 20, 20];
    }
    let mut floor = [0u32; 5];
    let mut remainder = [0.0f64; 5];
    let mut assigned = 0u32;
    for i in 0..5 {
        let exact = score[i] / total * 100.0;
        floor[i] = exact.floor() as u32;
        remainder[i] = exact - exact.floor();
        assigned += floor[i];
    }
    let mut order: [usize; 5] = [0, 1, 2, 3, 4];
    order.sort_by(|&a, &b| remainder[b].partial_cmp(&remainder[a]).unwrap_or(std::cmp::Ordering::Equal));
    let mut left = 100u32.saturating_sub(assigned);
    for &i in &order {
        if left == 0 {
            break;
        }
        floor[i] += 1;
        left -= 1;
    }
    floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillars::{compute_chart, Gender};
    use saju_calendar::resolve;

    fn chart_1990() -> Chart {
        let date = resolve(1990, 5, 15, false, false).unwrap();
        compute_chart("t", Gender::Male, date, 10, 0, false).unwrap()
    }

    #[test]
    fn ratios_sum_to_hundred() {
        let stats = analyze_elements(&chart_1990());
        let sum: u32 = ALL_ELEMENTS.iter().map(|e| stats.ratio(*e)).sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn total_score_is_position_weights_plus_base() {
        let stats = analyze_elements(&chart_1990());
        // 10+10 + 10+35 + 0+18 + 7+10 + 5 = 105.
        assert!((stats.total_score - 105.0).abs() < 1e-9);
    }

    #[test]
    fn day_element_is_metal_for_gyeong_day() {
        let stats = analyze_elements(&chart_1990());
        assert_eq!(stats.day_element, Element::Metal);
        // 庚午 辛巳 庚辰 辛巳 is metal- and fire-heavy.
        assert!(stats.score(Element::Metal) > 0.0);
        assert!(stats.score(Element::Fire) > 0.0);
    }

    #[test]
    fn strongest_and_weakest_disagree() {
        let stats = analyze_elements(&chart_1990());
        assert_ne!(stats.strongest, stats.weakest);
        assert!(stats.score(stats.strongest) >= stats.score(stats.weakest));
    }

    #[test]
    fn missing_elements_have_low_ratio() {
        let stats = analyze_elements(&chart_1990());
        for e in &stats.missing {
            assert!(stats.ratio(*e) < MISSING_RATIO_MAX);
        }
    }

    #[test]
    fn integer_ratio_largest_remainder() {
        let ratios = integer_ratios(&[1.0, 1.0, 1.0, 0.0, 0.0], 3.0);
        assert_eq!(ratios.iter().sum::<u32>(), 100);
        // 33.33 each, two rounded up.
        assert_eq!(ratios[3], 0);
        assert_eq!(ratios[4], 0);
        assert!(ratios[..3].iter().all(|&r| r == 33 || r == 34));
    }

    #[test]
    fn zero_total_splits_evenly() {
        assert_eq!(integer_ratios(&[0.0; 5], 0.0), [20; 5]);
    }
}
