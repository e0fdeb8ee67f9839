//! Day-master strength verdict (신강/신약 판정).
//!
//! Combines the three classical criteria, 득령 (seasonal command), 득지
//! (rooting in the day or hour branch) and 득세 (numerical support), with
//! the self-support ratio from the element distribution.

use crate::analysis::ElementStats;
use crate::element::{Element, ElementRelation};
use crate::pillars::Chart;

/// Ratio at or above which the chart is very strong (극강).
pub const VERY_STRONG_MIN_RATIO: f64 = 0.70;
/// Ratio at or above which the chart is strong outright.
pub const STRONG_MIN_RATIO: f64 = 0.55;
/// Strong with two or more deuk flags from this ratio up.
pub const STRONG_WITH_SUPPORT_MIN_RATIO: f64 = 0.50;
/// Weak with one or fewer deuk flags from this ratio down.
pub const WEAK_WITH_NO_SUPPORT_MAX_RATIO: f64 = 0.45;
/// Ratio at or below which the chart is weak outright.
pub const WEAK_MAX_RATIO: f64 = 0.40;
/// Ratio at or below which the chart is very weak (극약).
pub const VERY_WEAK_MAX_RATIO: f64 = 0.25;
/// Majority threshold for the 득세 criterion.
pub const DEUK_SE_MIN_RATIO: f64 = 0.5;

/// Five-step strength verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    VeryStrong,
    Strong,
    Balanced,
    Weak,
    VeryWeak,
}

impl StrengthLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryStrong => "very_strong",
            Self::Strong => "strong",
            Self::Balanced => "balanced",
            Self::Weak => "weak",
            Self::VeryWeak => "very_weak",
        }
    }

    /// Traditional status label.
    pub const fn status(self) -> &'static str {
        match self {
            Self::VeryStrong => "극강(極强)",
            Self::Strong => "신강(身强)",
            Self::Balanced => "중화(中和)",
            Self::Weak => "신약(身弱)",
            Self::VeryWeak => "극약(極弱)",
        }
    }

    /// True for the two strong buckets.
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::VeryStrong | Self::Strong)
    }
}

/// Outcome of the strength analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthResult {
    pub level: StrengthLevel,
    /// Day element score plus its generator's score.
    pub self_support_score: f64,
    /// `self_support_score / total_score`, in [0, 1].
    pub self_support_ratio: f64,
    pub deuk_ryeong: bool,
    pub deuk_ji: bool,
    pub deuk_se: bool,
    pub deuk_count: u8,
    pub description: String,
}

fn supports(day: Element, other: Element) -> bool {
    matches!(
        day.relation_to(other),
        ElementRelation::Same | ElementRelation::GeneratesMe
    )
}

/// Judge the day master's strength from the chart and its element stats.
pub fn analyze_strength(chart: &Chart, stats: &ElementStats) -> StrengthResult {
    let day = chart.day_master().element();

    // 득령: the month branch's principal stem commands the season for us.
    let deuk_ryeong = supports(day, chart.month().branch().principal_stem().element());

    // 득지: any hidden stem of the day or hour branch roots the day master.
    let deuk_ji = [chart.day().branch(), chart.hour_pillar().branch()]
        .iter()
        .flat_map(|b| b.hidden_stems())
        .any(|(hidden, _)| hidden.element() == day);

    let self_support_score = stats.score(day) + stats.score(day.generated_by());
    let self_support_ratio = if stats.total_score > 0.0 {
        self_support_score / stats.total_score
    } else {
        0.0
    };

    // 득세: the supporting camp holds the majority of the score.
    let deuk_se = self_support_ratio >= DEUK_SE_MIN_RATIO;

    let deuk_count = u8::from(deuk_ryeong) + u8::from(deuk_ji) + u8::from(deuk_se);

    let level = if self_support_ratio >= VERY_STRONG_MIN_RATIO {
        StrengthLevel::VeryStrong
    } else if self_support_ratio >= STRONG_MIN_RATIO
        || (self_support_ratio >= STRONG_WITH_SUPPORT_MIN_RATIO && deuk_count >= 2)
    {
        StrengthLevel::Strong
    } else if self_support_ratio <= VERY_WEAK_MAX_RATIO {
        StrengthLevel::VeryWeak
    } else if self_support_ratio <= WEAK_MAX_RATIO
        || (self_support_ratio <= WEAK_WITH_NO_SUPPORT_MAX_RATIO && deuk_count <= 1)
    {
        StrengthLevel::Weak
    } else {
        StrengthLevel::Balanced
    };

    let description = describe(level, day, deuk_ryeong, deuk_ji, deuk_se, self_support_ratio);

    StrengthResult {
        level,
        self_support_score,
        self_support_ratio,
        deuk_ryeong,
        deuk_ji,
        deuk_se,
        deuk_count,
        description,
    }
}

fn describe(
    level: StrengthLevel,
    day: Element,
    deuk_ryeong: bool,
    deuk_ji: bool,
    deuk_se: bool,
    ratio: f64,
) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if deuk_ryeong {
        parts.push("commands the season");
    }
    if deuk_ji {
        parts.push("is rooted in the branches");
    }
    if deuk_se {
        parts.push("holds a supporting majority");
    }
    let support = if parts.is_empty() {
        "stands without seasonal command, rooting or majority support".to_owned()
    } else {
        parts.join(", ")
    };
    format!(
        "The {} day master {} (self-support {:.0}%), giving a {} chart.",
        day.name(),
        support,
        ratio * 100.0,
        level.status(),
    )
}
