//! Ten-gods (십성) placement analysis.
//!
//! Every character is classified by its element's relation to the day
//! master and by polarity agreement: same polarity takes the "indirect"
//! god of the pair, opposite polarity the "direct" one.

use crate::element::{Element, ElementRelation, Polarity};
use crate::pillars::Chart;
use crate::stem::Stem;

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenGod {
    Peer,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectSeal,
    DirectSeal,
}

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "peer",
            Self::RobWealth => "rob_wealth",
            Self::EatingGod => "eating_god",
            Self::HurtingOfficer => "hurting_officer",
            Self::IndirectWealth => "indirect_wealth",
            Self::DirectWealth => "direct_wealth",
            Self::SevenKillings => "seven_killings",
            Self::DirectOfficer => "direct_officer",
            Self::IndirectSeal => "indirect_seal",
            Self::DirectSeal => "direct_seal",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Peer => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectSeal => "편인",
            Self::DirectSeal => "정인",
        }
    }

    /// Five-way grouping of the ten gods.
    pub const fn category(self) -> GodCategory {
        match self {
            Self::Peer | Self::RobWealth => GodCategory::Peers,
            Self::EatingGod | Self::HurtingOfficer => GodCategory::Output,
            Self::IndirectWealth | Self::DirectWealth => GodCategory::Wealth,
            Self::SevenKillings | Self::DirectOfficer => GodCategory::Authority,
            Self::IndirectSeal | Self::DirectSeal => GodCategory::Resource,
        }
    }
}

/// The five god categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GodCategory {
    Peers,
    Output,
    Wealth,
    Authority,
    Resource,
}

/// All categories in traditional order.
pub const ALL_CATEGORIES: [GodCategory; 5] = [
    GodCategory::Peers,
    GodCategory::Output,
    GodCategory::Wealth,
    GodCategory::Authority,
    GodCategory::Resource,
];

impl GodCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peers => "peers",
            Self::Output => "output",
            Self::Wealth => "wealth",
            Self::Authority => "authority",
            Self::Resource => "resource",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::Peers => "비겁",
            Self::Output => "식상",
            Self::Wealth => "재성",
            Self::Authority => "관성",
            Self::Resource => "인성",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-line reading of a dominant category.
    pub const fn interpretation(self) -> &'static str {
        match self {
            Self::Peers => "Strong self-reliance and competitive drive; thrives among rivals.",
            Self::Output => "Expressive and creative; talent flows outward into craft and speech.",
            Self::Wealth => "Practical and acquisitive; manages people and property well.",
            Self::Authority => "Disciplined and duty-bound; carries responsibility naturally.",
            Self::Resource => "Studious and receptive; draws strength from learning and patrons.",
        }
    }
}

/// Classify one element+polarity against a day master.
pub const fn ten_god_of(day: Stem, element: Element, polarity: Polarity) -> TenGod {
    let same_polarity = day.polarity() as u8 == polarity as u8;
    match day.element().relation_to(element) {
        ElementRelation::Same => {
            if same_polarity {
                TenGod::Peer
            } else {
                TenGod::RobWealth
            }
        }
        ElementRelation::IGenerate => {
            if same_polarity {
                TenGod::EatingGod
            } else {
                TenGod::HurtingOfficer
            }
        }
        ElementRelation::IControl => {
            if same_polarity {
                TenGod::IndirectWealth
            } else {
                TenGod::DirectWealth
            }
        }
        ElementRelation::ControlsMe => {
            if same_polarity {
                TenGod::SevenKillings
            } else {
                TenGod::DirectOfficer
            }
        }
        ElementRelation::GeneratesMe => {
            if same_polarity {
                TenGod::IndirectSeal
            } else {
                TenGod::DirectSeal
            }
        }
    }
}

/// God of another stem relative to the day master.
pub const fn stem_god(day: Stem, other: Stem) -> TenGod {
    ten_god_of(day, other.element(), other.polarity())
}

/// One classified chart position.
#[derive(Debug, Clone, PartialEq)]
pub struct GodPlacement {
    /// Position key, e.g. `year_stem`, `month_branch`.
    pub position: &'static str,
    /// Hanja of the character at that position.
    pub symbol: &'static str,
    /// `None` only for the day stem, which is the subject itself.
    pub god: Option<TenGod>,
    /// For branches, every hidden stem with its god and day-weight.
    pub hidden: Vec<(Stem, TenGod, u8)>,
}

/// Full placement map with category distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct TenGodsResult {
    pub placements: Vec<GodPlacement>,
    /// Counts per category, day stem excluded, branches counted by their
    /// principal hidden stem.
    pub distribution: [u32; 5],
    pub dominant: GodCategory,
    pub interpretation: String,
}

/// Classify all eight characters against the day master.
pub fn analyze_ten_gods(chart: &Chart) -> TenGodsResult {
    let day = chart.day_master();
    let mut placements = Vec::with_capacity(8);
    let mut distribution = [0u32; 5];

    let stem_positions = ["year_stem", "month_stem", "day_stem", "hour_stem"];
    let branch_positions = ["year_branch", "month_branch", "day_branch", "hour_branch"];

    for (pillar, position) in chart.pillars.iter().zip(stem_positions) {
        let stem = pillar.stem();
        let god = if position == "day_stem" {
            None
        } else {
            let g = stem_god(day, stem);
            distribution[g.category().index()] += 1;
            Some(g)
        };
        placements.push(GodPlacement {
            position,
            symbol: stem.symbol(),
            god,
            hidden: Vec::new(),
        });
    }

    for (pillar, position) in chart.pillars.iter().zip(branch_positions) {
        let branch = pillar.branch();
        let principal = stem_god(day, branch.principal_stem());
        distribution[principal.category().index()] += 1;
        let hidden = branch
            .hidden_stems()
            .iter()
            .map(|&(s, w)| (s, stem_god(day, s), w))
            .collect();
        placements.push(GodPlacement {
            position,
            symbol: branch.symbol(),
            god: Some(principal),
            hidden,
        });
    }

    let mut dominant = GodCategory::Peers;
    for c in ALL_CATEGORIES {
        if distribution[c.index()] > distribution[dominant.index()] {
            dominant = c;
        }
    }
    let interpretation = format!(
        "{}({}) leads the chart: {}",
        dominant.korean(),
        dominant.name(),
        dominant.interpretation(),
    );

    TenGodsResult {
        placements,
        distribution,
        dominant,
        interpretation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::pillars::{compute_chart, Gender};
    use saju_calendar::resolve;

    #[test]
    fn same_stem_is_peer() {
        assert_eq!(stem_god(Stem::Gap, Stem::Gap), TenGod::Peer);
        // Opposite polarity of the same element robs wealth.
        assert_eq!(stem_god(Stem::Gap, Stem::Eul), TenGod::RobWealth);
    }

    #[test]
    fn parity_flips_direct_and_indirect() {
        // 庚 metal day: 丙 fire controls it with matching yang polarity.
        assert_eq!(stem_god(Stem::Gyeong, Stem::Byeong), TenGod::SevenKillings);
        assert_eq!(stem_god(Stem::Gyeong, Stem::Jeong), TenGod::DirectOfficer);
        // 壬 water drains 庚: same polarity gives the eating god.
        assert_eq!(stem_god(Stem::Gyeong, Stem::Im), TenGod::EatingGod);
        assert_eq!(stem_god(Stem::Gyeong, Stem::Gye), TenGod::HurtingOfficer);
    }

    #[test]
    fn golden_chart_placements() {
        let date = resolve(1990, 5, 15, false, false).unwrap();
        let chart = compute_chart("t", Gender::Male, date, 10, 0, false).unwrap();
        let r = analyze_ten_gods(&chart);
        assert_eq!(r.placements.len(), 8);

        // Year stem 庚 equals the 庚 day master.
        assert_eq!(r.placements[0].god, Some(TenGod::Peer));
        // Day stem carries no god.
        assert_eq!(r.placements[2].god, None);
        // Month stem 辛 is yin metal: rob wealth.
        assert_eq!(r.placements[1].god, Some(TenGod::RobWealth));
        // Distribution counts 7 positions (8 minus the day stem).
        assert_eq!(r.distribution.iter().sum::<u32>(), 7);
    }

    #[test]
    fn branch_placements_carry_hidden_stems() {
        let date = resolve(1990, 5, 15, false, false).unwrap();
        let chart = compute_chart("t", Gender::Male, date, 10, 0, false).unwrap();
        let r = analyze_ten_gods(&chart);
        let day_branch = &r.placements[6];
        assert_eq!(day_branch.position, "day_branch");
        assert_eq!(day_branch.symbol, Branch::Jin.symbol());
        assert_eq!(day_branch.hidden.len(), 3);
    }

    #[test]
    fn interpretation_names_dominant_category() {
        let date = resolve(1990, 5, 15, false, false).unwrap();
        let chart = compute_chart("t", Gender::Male, date, 10, 0, false).unwrap();
        let r = analyze_ten_gods(&chart);
        assert!(r.interpretation.contains(r.dominant.name()));
    }
}
