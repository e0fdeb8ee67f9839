//! Combination, clash, punishment and break relations (합충형파) between
//! the chart's stems and branches.

use crate::branch::Branch;
use crate::element::Element;
use crate::pillars::Chart;

/// Relation families, in display-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InteractionKind {
    DirectionalHarmony,
    ThreeHarmony,
    HalfThreeHarmony,
    StemCombination,
    SixHarmony,
    Clash,
    Punishment,
    SelfPunishment,
    Break,
}

impl InteractionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DirectionalHarmony => "directional_harmony",
            Self::ThreeHarmony => "three_harmony",
            Self::HalfThreeHarmony => "half_three_harmony",
            Self::StemCombination => "stem_combination",
            Self::SixHarmony => "six_harmony",
            Self::Clash => "clash",
            Self::Punishment => "punishment",
            Self::SelfPunishment => "self_punishment",
            Self::Break => "break",
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::DirectionalHarmony => "방합(方合)",
            Self::ThreeHarmony => "삼합(三合)",
            Self::HalfThreeHarmony => "반삼합(半三合)",
            Self::StemCombination => "천간합(天干合)",
            Self::SixHarmony => "육합(六合)",
            Self::Clash => "충(沖)",
            Self::Punishment => "형(刑)",
            Self::SelfPunishment => "자형(自刑)",
            Self::Break => "파(破)",
        }
    }

    /// How strongly the relation colors the chart.
    pub const fn impact(self) -> Impact {
        match self {
            Self::DirectionalHarmony => Impact::VeryHigh,
            Self::ThreeHarmony | Self::Clash => Impact::High,
            Self::HalfThreeHarmony
            | Self::StemCombination
            | Self::SixHarmony
            | Self::Punishment
            | Self::SelfPunishment => Impact::Medium,
            Self::Break => Impact::Low,
        }
    }

    /// True for the harmony families.
    pub const fn is_harmony(self) -> bool {
        matches!(
            self,
            Self::DirectionalHarmony
                | Self::ThreeHarmony
                | Self::HalfThreeHarmony
                | Self::StemCombination
                | Self::SixHarmony
        )
    }
}

/// Weight grade of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl Impact {
    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryHigh => "very_high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One detected relation.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Chart positions involved, e.g. `["year_branch", "day_branch"]`.
    pub positions: Vec<&'static str>,
    /// Hanja of the involved characters.
    pub symbols: Vec<&'static str>,
    /// Element the combination produces, for the harmony families.
    pub result: Option<Element>,
    pub description: String,
}

/// All findings for a chart, sorted by kind priority.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionsResult {
    pub interactions: Vec<Interaction>,
    pub has_major_clash: bool,
    pub has_harmony: bool,
}

/// Produced element of the five stem combinations, indexed by the lower
/// stem index (甲己 = 0 … 戊癸 = 4).
const STEM_COMBO_ELEMENT: [Element; 5] = [
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
    Element::Fire,
];

/// Six-harmony pairs with their produced element.
const SIX_HARMONY: [(Branch, Branch, Element); 6] = [
    (Branch::Ja, Branch::Chuk, Element::Earth),
    (Branch::In, Branch::Hae, Element::Wood),
    (Branch::Myo, Branch::Sul, Element::Fire),
    (Branch::Jin, Branch::Yu, Element::Metal),
    (Branch::Sa, Branch::Sin, Element::Water),
    (Branch::O, Branch::Mi, Element::Earth),
];

/// Three-harmony sets (growth, peak, storage) with their produced element.
const THREE_HARMONY: [([Branch; 3], Element); 4] = [
    ([Branch::Sin, Branch::Ja, Branch::Jin], Element::Water),
    ([Branch::Hae, Branch::Myo, Branch::Mi], Element::Wood),
    ([Branch::In, Branch::O, Branch::Sul], Element::Fire),
    ([Branch::Sa, Branch::Yu, Branch::Chuk], Element::Metal),
];

/// Directional (seasonal) sets with their element.
const DIRECTIONAL: [([Branch; 3], Element); 4] = [
    ([Branch::In, Branch::Myo, Branch::Jin], Element::Wood),
    ([Branch::Sa, Branch::O, Branch::Mi], Element::Fire),
    ([Branch::Sin, Branch::Yu, Branch::Sul], Element::Metal),
    ([Branch::Hae, Branch::Ja, Branch::Chuk], Element::Water),
];

/// Punishment pairs, drawn from the 寅巳申 and 丑戌未 sets plus 子卯.
const PUNISHMENTS: [(Branch, Branch); 7] = [
    (Branch::In, Branch::Sa),
    (Branch::Sa, Branch::Sin),
    (Branch::In, Branch::Sin),
    (Branch::Chuk, Branch::Sul),
    (Branch::Sul, Branch::Mi),
    (Branch::Chuk, Branch::Mi),
    (Branch::Ja, Branch::Myo),
];

/// Branches that punish themselves when doubled.
const SELF_PUNISHMENTS: [Branch; 4] = [Branch::Jin, Branch::O, Branch::Yu, Branch::Hae];

/// Break pairs.
const BREAKS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Yu),
    (Branch::Chuk, Branch::Jin),
    (Branch::In, Branch::Hae),
    (Branch::Myo, Branch::O),
    (Branch::Sa, Branch::Sin),
    (Branch::Mi, Branch::Sul),
];

const BRANCH_POSITIONS: [&str; 4] = ["year_branch", "month_branch", "day_branch", "hour_branch"];
const STEM_POSITIONS: [&str; 4] = ["year_stem", "month_stem", "day_stem", "hour_stem"];

/// Detect every relation among the chart's stems and branches.
pub fn analyze_interactions(chart: &Chart) -> InteractionsResult {
    let mut found: Vec<Interaction> = Vec::new();
    let stems = chart.stems();
    let branches = chart.branches();

    // Stem combinations: the five 甲己-style pairs sit five indexes apart.
    for i in 0..4 {
        for j in (i + 1)..4 {
            let (a, b) = (stems[i], stems[j]);
            if a != b && a.index() % 5 == b.index() % 5 {
                let result = STEM_COMBO_ELEMENT[a.index() % 5];
                found.push(Interaction {
                    kind: InteractionKind::StemCombination,
                    positions: vec![STEM_POSITIONS[i], STEM_POSITIONS[j]],
                    symbols: vec![a.symbol(), b.symbol()],
                    result: Some(result),
                    description: format!(
                        "{} and {} combine toward {}.",
                        a.symbol(),
                        b.symbol(),
                        result.symbol(),
                    ),
                });
            }
        }
    }

    // Full triples first so their pairs aren't double-reported as halves.
    let mut three_harmony_hit = [false; 4];
    for (set, element) in DIRECTIONAL.iter() {
        if let Some(positions) = triple_positions(&branches, set) {
            found.push(triple_interaction(
                InteractionKind::DirectionalHarmony,
                positions,
                set,
                *element,
            ));
        }
    }
    for (set_idx, (set, element)) in THREE_HARMONY.iter().enumerate() {
        if let Some(positions) = triple_positions(&branches, set) {
            three_harmony_hit[set_idx] = true;
            found.push(triple_interaction(
                InteractionKind::ThreeHarmony,
                positions,
                set,
                *element,
            ));
        }
    }

    // Half three-harmony: the peak branch plus one companion.
    for (set_idx, (set, element)) in THREE_HARMONY.iter().enumerate() {
        if three_harmony_hit[set_idx] {
            continue;
        }
        let peak = set[1];
        for &other in &[set[0], set[2]] {
            for (i, j) in branch_pairs(&branches, peak, other) {
                found.push(Interaction {
                    kind: InteractionKind::HalfThreeHarmony,
                    positions: vec![BRANCH_POSITIONS[i], BRANCH_POSITIONS[j]],
                    symbols: vec![branches[i].symbol(), branches[j].symbol()],
                    result: Some(*element),
                    description: format!(
                        "{} and {} form a half {} harmony.",
                        branches[i].symbol(),
                        branches[j].symbol(),
                        element.symbol(),
                    ),
                });
            }
        }
    }

    for &(a, b, element) in &SIX_HARMONY {
        for (i, j) in branch_pairs(&branches, a, b) {
            found.push(Interaction {
                kind: InteractionKind::SixHarmony,
                positions: vec![BRANCH_POSITIONS[i], BRANCH_POSITIONS[j]],
                symbols: vec![branches[i].symbol(), branches[j].symbol()],
                result: Some(element),
                description: format!(
                    "{} and {} join in six-harmony toward {}.",
                    branches[i].symbol(),
                    branches[j].symbol(),
                    element.symbol(),
                ),
            });
        }
    }

    // Clashes: branches six apart oppose each other.
    for i in 0..4 {
        for j in (i + 1)..4 {
            if (branches[i].index() + 6) % 12 == branches[j].index() {
                found.push(pair_interaction(
                    InteractionKind::Clash,
                    &branches,
                    i,
                    j,
                    format!("{} clashes with {}.", branches[i].symbol(), branches[j].symbol()),
                ));
            }
        }
    }

    for &(a, b) in &PUNISHMENTS {
        for (i, j) in branch_pairs(&branches, a, b) {
            found.push(pair_interaction(
                InteractionKind::Punishment,
                &branches,
                i,
                j,
                format!("{} punishes {}.", branches[i].symbol(), branches[j].symbol()),
            ));
        }
    }

    for &b in &SELF_PUNISHMENTS {
        for (i, j) in branch_pairs(&branches, b, b) {
            found.push(pair_interaction(
                InteractionKind::SelfPunishment,
                &branches,
                i,
                j,
                format!("Doubled {} punishes itself.", b.symbol()),
            ));
        }
    }

    for &(a, b) in &BREAKS {
        for (i, j) in branch_pairs(&branches, a, b) {
            found.push(pair_interaction(
                InteractionKind::Break,
                &branches,
                i,
                j,
                format!("{} breaks {}.", branches[i].symbol(), branches[j].symbol()),
            ));
        }
    }

    found.sort_by_key(|x| x.kind);
    let has_major_clash = found
        .iter()
        .any(|x| matches!(x.kind, InteractionKind::Clash | InteractionKind::Punishment));
    let has_harmony = found.iter().any(|x| x.kind.is_harmony());

    InteractionsResult {
        interactions: found,
        has_major_clash,
        has_harmony,
    }
}

/// Positions of an unordered pair among the four branches, each slot used
/// once per finding.
fn branch_pairs(branches: &[Branch; 4], a: Branch, b: Branch) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..4 {
        for j in (i + 1)..4 {
            if (branches[i] == a && branches[j] == b) || (branches[i] == b && branches[j] == a) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Positions covering all three branches of a set, if present.
fn triple_positions(branches: &[Branch; 4], set: &[Branch; 3]) -> Option<[usize; 3]> {
    let mut positions = [usize::MAX; 3];
    for (k, want) in set.iter().enumerate() {
        positions[k] = branches.iter().position(|b| b == want)?;
    }
    Some(positions)
}

fn triple_interaction(
    kind: InteractionKind,
    positions: [usize; 3],
    set: &[Branch; 3],
    element: Element,
) -> Interaction {
    let mut ordered = positions;
    ordered.sort_unstable();
    Interaction {
        kind,
        positions: ordered.iter().map(|&i| BRANCH_POSITIONS[i]).collect(),
        symbols: set.iter().map(|b| b.symbol()).collect(),
        result: Some(element),
        description: format!(
            "{}{}{} unite into a {} frame.",
            set[0].symbol(),
            set[1].symbol(),
            set[2].symbol(),
            element.symbol(),
        ),
    }
}

fn pair_interaction(
    kind: InteractionKind,
    branches: &[Branch; 4],
    i: usize,
    j: usize,
    description: String,
) -> Interaction {
    Interaction {
        kind,
        positions: vec![BRANCH_POSITIONS[i], BRANCH_POSITIONS[j]],
        symbols: vec![branches[i].symbol(), branches[j].symbol()],
        result: None,
        description,
    }
}
