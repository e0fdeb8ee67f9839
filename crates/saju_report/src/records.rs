//! Serialized record shapes of the analysis output contract.
//!
//! Field names and nesting mirror the JSON consumed by the narrative and
//! UI collaborators; everything here is plain values, no binary framing.

use std::collections::BTreeMap;

use serde::Serialize;

use saju_core::{
    Chart, Element, ElementStats, InteractionsResult, Pillar, StrengthResult, TenGodsResult,
    YongShinResult, ALL_ELEMENTS,
};
use saju_fortune::{DaYun, DailyFortune, YearlyFortune};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PillarRecord {
    pub ganzi: String,
    pub stem: &'static str,
    pub branch: &'static str,
    pub stem_element: &'static str,
    pub branch_element: &'static str,
    pub stem_polarity: &'static str,
    pub branch_polarity: &'static str,
    pub hidden_stems: Vec<HiddenStemRecord>,
    pub nayin: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HiddenStemRecord {
    pub stem: &'static str,
    pub element: &'static str,
    pub weight: u8,
}

impl PillarRecord {
    pub fn from_pillar(pillar: &Pillar) -> Self {
        let stem = pillar.stem();
        let branch = pillar.branch();
        Self {
            ganzi: pillar.ganzi.label(),
            stem: stem.symbol(),
            branch: branch.symbol(),
            stem_element: stem.element().name(),
            branch_element: branch.element().name(),
            stem_polarity: stem.polarity().name(),
            branch_polarity: branch.polarity().name(),
            hidden_stems: branch
                .hidden_stems()
                .iter()
                .map(|&(s, w)| HiddenStemRecord {
                    stem: s.symbol(),
                    element: s.element().name(),
                    weight: w,
                })
                .collect(),
            nayin: pillar.ganzi.nayin().name,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PillarsRecord {
    pub year: PillarRecord,
    pub month: PillarRecord,
    pub day: PillarRecord,
    pub hour: PillarRecord,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayStemRecord {
    pub stem: &'static str,
    pub name: &'static str,
    pub element: &'static str,
    pub polarity: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EightCharactersRecord {
    pub name: String,
    pub gender: &'static str,
    pub solar_date: String,
    pub lunar_date: String,
    pub is_lunar_input: bool,
    pub is_leap_month: bool,
    pub season: &'static str,
    pub pillars: PillarsRecord,
    pub day_stem: DayStemRecord,
}

impl EightCharactersRecord {
    pub fn from_chart(chart: &Chart) -> Self {
        let day = chart.day_master();
        Self {
            name: chart.name.clone(),
            gender: chart.gender.korean(),
            solar_date: chart.date.solar.to_string(),
            lunar_date: chart.date.lunar.to_string(),
            is_lunar_input: chart.is_lunar_input,
            is_leap_month: chart.date.lunar.is_leap_month,
            season: chart.date.season.name(),
            pillars: PillarsRecord {
                year: PillarRecord::from_pillar(&chart.year()),
                month: PillarRecord::from_pillar(&chart.month()),
                day: PillarRecord::from_pillar(&chart.day()),
                hour: PillarRecord::from_pillar(&chart.hour_pillar()),
            },
            day_stem: DayStemRecord {
                stem: day.symbol(),
                name: day.name(),
                element: day.element().name(),
                polarity: day.polarity().name(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ElementStatRecord {
    pub element: &'static str,
    pub symbol: &'static str,
    pub count: u32,
    pub score: f64,
    pub ratio: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ElementAnalysisRecord {
    /// Keyed by element name; always exactly five entries.
    pub element_stats: BTreeMap<&'static str, ElementStatRecord>,
    pub total_score: f64,
    pub strongest_element: &'static str,
    pub weakest_element: &'static str,
    pub missing_elements: Vec<&'static str>,
    pub day_element: &'static str,
}

impl ElementAnalysisRecord {
    pub fn from_stats(stats: &ElementStats) -> Self {
        let element_stats = ALL_ELEMENTS
            .into_iter()
            .map(|e| {
                let s = stats.get(e);
                (
                    e.name(),
                    ElementStatRecord {
                        element: e.name(),
                        symbol: e.symbol(),
                        count: s.count,
                        score: s.score,
                        ratio: s.ratio,
                    },
                )
            })
            .collect();
        Self {
            element_stats,
            total_score: stats.total_score,
            strongest_element: stats.strongest.name(),
            weakest_element: stats.weakest.name(),
            missing_elements: stats.missing.iter().map(|e| e.name()).collect(),
            day_element: stats.day_element.name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StrengthAnalysisRecord {
    pub strength_status: &'static str,
    pub strength_level: &'static str,
    pub self_support_score: f64,
    pub self_support_ratio: f64,
    pub deuk_ryeong: bool,
    pub deuk_ji: bool,
    pub deuk_se: bool,
    pub deuk_count: u8,
    pub description: String,
}

impl StrengthAnalysisRecord {
    pub fn from_strength(strength: &StrengthResult) -> Self {
        Self {
            strength_status: strength.level.status(),
            strength_level: strength.level.name(),
            self_support_score: strength.self_support_score,
            self_support_ratio: strength.self_support_ratio,
            deuk_ryeong: strength.deuk_ryeong,
            deuk_ji: strength.deuk_ji,
            deuk_se: strength.deuk_se,
            deuk_count: strength.deuk_count,
            description: strength.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GodPlacementRecord {
    pub position: &'static str,
    pub symbol: &'static str,
    /// Absent only for the day stem.
    pub god: Option<&'static str>,
    pub god_korean: Option<&'static str>,
    pub category: Option<&'static str>,
    pub hidden: Vec<HiddenGodRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HiddenGodRecord {
    pub stem: &'static str,
    pub god: &'static str,
    pub weight: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TenGodsAnalysisRecord {
    pub placements: Vec<GodPlacementRecord>,
    /// Category name → count over the seven non-day-master positions.
    pub distribution: BTreeMap<&'static str, u32>,
    pub dominant_category: &'static str,
    pub interpretation: String,
}

impl TenGodsAnalysisRecord {
    pub fn from_result(gods: &TenGodsResult) -> Self {
        let placements = gods
            .placements
            .iter()
            .map(|p| GodPlacementRecord {
                position: p.position,
                symbol: p.symbol,
                god: p.god.map(|g| g.name()),
                god_korean: p.god.map(|g| g.korean()),
                category: p.god.map(|g| g.category().name()),
                hidden: p
                    .hidden
                    .iter()
                    .map(|&(s, g, w)| HiddenGodRecord {
                        stem: s.symbol(),
                        god: g.korean(),
                        weight: w,
                    })
                    .collect(),
            })
            .collect();
        let distribution = saju_core::ten_gods::ALL_CATEGORIES
            .into_iter()
            .map(|c| (c.name(), gods.distribution[c.index()]))
            .collect();
        Self {
            placements,
            distribution,
            dominant_category: gods.dominant.name(),
            interpretation: gods.interpretation.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionRecord {
    pub kind: &'static str,
    pub kind_korean: &'static str,
    pub impact: &'static str,
    pub positions: Vec<&'static str>,
    pub symbols: Vec<&'static str>,
    pub result_element: Option<&'static str>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionsAnalysisRecord {
    pub interactions: Vec<InteractionRecord>,
    pub total_count: usize,
    pub has_major_clash: bool,
    pub has_harmony: bool,
}

impl InteractionsAnalysisRecord {
    pub fn from_result(relations: &InteractionsResult) -> Self {
        let interactions: Vec<InteractionRecord> = relations
            .interactions
            .iter()
            .map(|x| InteractionRecord {
                kind: x.kind.name(),
                kind_korean: x.kind.korean(),
                impact: x.kind.impact().name(),
                positions: x.positions.clone(),
                symbols: x.symbols.clone(),
                result_element: x.result.map(Element::name),
                description: x.description.clone(),
            })
            .collect();
        Self {
            total_count: interactions.len(),
            interactions,
            has_major_clash: relations.has_major_clash,
            has_harmony: relations.has_harmony,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationsRecord {
    pub lucky_colors: Vec<&'static str>,
    pub lucky_direction: &'static str,
    pub lucky_numbers: [u8; 2],
    pub career_advice: &'static str,
    pub lucky_item: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YongShinAnalysisRecord {
    pub yong_shin: &'static str,
    pub yong_shin_symbol: &'static str,
    pub hee_shin: &'static str,
    pub gi_shin: &'static str,
    pub selection_method: &'static str,
    pub selection_method_label: &'static str,
    pub selection_reason: String,
    pub month_temperature: &'static str,
    pub recommendations: RecommendationsRecord,
}

impl YongShinAnalysisRecord {
    pub fn from_result(ys: &YongShinResult) -> Self {
        Self {
            yong_shin: ys.yong_shin.name(),
            yong_shin_symbol: ys.yong_shin.symbol(),
            hee_shin: ys.hee_shin.name(),
            gi_shin: ys.gi_shin.name(),
            selection_method: ys.method.name(),
            selection_method_label: ys.method.label(),
            selection_reason: ys.reason.clone(),
            month_temperature: ys.temperature.name(),
            recommendations: RecommendationsRecord {
                lucky_colors: ys.recommendations.colors.to_vec(),
                lucky_direction: ys.recommendations.direction,
                lucky_numbers: ys.recommendations.numbers,
                career_advice: ys.recommendations.career,
                lucky_item: ys.recommendations.item,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DaYunRecord {
    pub ganzi: String,
    pub start_age: u32,
    pub end_age: u32,
    pub score: u32,
    pub rating: &'static str,
}

impl DaYunRecord {
    pub fn from_da_yun(d: &DaYun) -> Self {
        Self {
            ganzi: d.ganzi.label(),
            start_age: d.start_age,
            end_age: d.end_age,
            score: d.score,
            rating: d.rating.name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearlyFortuneRecord {
    pub year: i32,
    pub ganzi: String,
    pub score: u32,
    pub rating: &'static str,
    pub summary: &'static str,
}

impl YearlyFortuneRecord {
    pub fn from_yearly(y: &YearlyFortune) -> Self {
        Self {
            year: y.year,
            ganzi: y.ganzi.label(),
            score: y.score,
            rating: y.rating.name(),
            summary: y.summary,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FortuneAnalysisRecord {
    pub direction: &'static str,
    pub start_age: u32,
    pub current_age: u32,
    pub current_year: i32,
    pub da_yun_list: Vec<DaYunRecord>,
    pub current_da_yun: Option<DaYunRecord>,
    pub current_year_fortune: YearlyFortuneRecord,
    pub yearly_fortunes: Vec<YearlyFortuneRecord>,
}

/// The full analysis object returned to callers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisReport {
    pub eight_characters: EightCharactersRecord,
    pub element_analysis: ElementAnalysisRecord,
    pub strength_analysis: StrengthAnalysisRecord,
    pub ten_gods_analysis: TenGodsAnalysisRecord,
    pub interactions_analysis: InteractionsAnalysisRecord,
    pub yong_shin_analysis: YongShinAnalysisRecord,
    pub fortune_analysis: FortuneAnalysisRecord,
}

/// Flat record of the daily-fortune endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyReport {
    pub date: String,
    pub weekday: &'static str,
    pub name: String,
    pub day_ganzi: String,
    pub luck_index: u32,
    pub rating: &'static str,
    pub rating_label: &'static str,
    pub fortune: String,
    pub love: &'static str,
    pub work: &'static str,
    pub health: &'static str,
    pub warning: &'static str,
    pub lucky_color: &'static str,
    pub lucky_number: u8,
    pub lucky_item: &'static str,
}

impl DailyReport {
    pub fn from_daily(d: &DailyFortune) -> Self {
        Self {
            date: d.date.to_string(),
            weekday: d.weekday,
            name: d.name.clone(),
            day_ganzi: d.ganzi.label(),
            luck_index: d.luck_index,
            rating: d.rating.name(),
            rating_label: d.rating.label(),
            fortune: d.overall.clone(),
            love: d.love,
            work: d.work,
            health: d.health,
            warning: d.warning,
            lucky_color: d.lucky_color,
            lucky_number: d.lucky_number,
            lucky_item: d.lucky_item,
        }
    }
}

/// Leap-month lookup result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LeapMonthInfo {
    pub year: i32,
    /// 0 when the lunar year has no leap month.
    pub leap_month: u32,
}
