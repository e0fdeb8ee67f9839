//! The twelve earthly branches (지지), their hidden stems, and the
//! month-branch temperature scale used for climate-based yongshin selection.

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// One of the twelve earthly branches, in cycle order 子 through 亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All twelve branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// 0-based cycle index (子 = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Branch for a cycle index, if in range.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index])
        } else {
            None
        }
    }

    /// Hanja symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Romanized Korean reading.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Hangul reading.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    /// Element of this branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Even-indexed branches are yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Hidden stems (지장간) with their day-weights; the last entry is the
    /// dominant (본기) stem. Weights per branch sum to 30.
    pub const fn hidden_stems(self) -> &'static [(Stem, u8)] {
        match self {
            Self::Ja => &[(Stem::Im, 10), (Stem::Gye, 20)],
            Self::Chuk => &[(Stem::Gye, 9), (Stem::Sin, 3), (Stem::Gi, 18)],
            Self::In => &[(Stem::Mu, 7), (Stem::Byeong, 7), (Stem::Gap, 16)],
            Self::Myo => &[(Stem::Gap, 10), (Stem::Eul, 20)],
            Self::Jin => &[(Stem::Eul, 9), (Stem::Gye, 3), (Stem::Mu, 18)],
            Self::Sa => &[(Stem::Mu, 7), (Stem::Gyeong, 7), (Stem::Byeong, 16)],
            Self::O => &[(Stem::Byeong, 10), (Stem::Gi, 9), (Stem::Jeong, 11)],
            Self::Mi => &[(Stem::Jeong, 9), (Stem::Eul, 3), (Stem::Gi, 18)],
            Self::Sin => &[(Stem::Mu, 7), (Stem::Im, 7), (Stem::Gyeong, 16)],
            Self::Yu => &[(Stem::Gyeong, 10), (Stem::Sin, 20)],
            Self::Sul => &[(Stem::Sin, 9), (Stem::Jeong, 3), (Stem::Mu, 18)],
            Self::Hae => &[(Stem::Mu, 7), (Stem::Gap, 7), (Stem::Im, 16)],
        }
    }

    /// Dominant hidden stem (본기).
    pub const fn principal_stem(self) -> Stem {
        let hidden = self.hidden_stems();
        hidden[hidden.len() - 1].0
    }

    /// Climatic temperature of the month this branch governs.
    pub const fn temperature(self) -> Temperature {
        match self {
            Self::O => Temperature::VeryHot,
            Self::Mi => Temperature::Hot,
            Self::Sa => Temperature::Warm,
            Self::Sin => Temperature::SlightlyWarm,
            Self::Myo | Self::Jin | Self::Yu => Temperature::Mild,
            Self::In | Self::Sul => Temperature::SlightlyCold,
            Self::Hae => Temperature::Cold,
            Self::Ja | Self::Chuk => Temperature::VeryCold,
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Climatic temperature scale of the twelve month branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temperature {
    VeryHot,
    Hot,
    Warm,
    SlightlyWarm,
    Mild,
    SlightlyCold,
    Cold,
    VeryCold,
}

impl Temperature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryHot => "very hot",
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::SlightlyWarm => "slightly warm",
            Self::Mild => "mild",
            Self::SlightlyCold => "slightly cold",
            Self::Cold => "cold",
            Self::VeryCold => "very cold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, branch) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(branch.index(), i);
            assert_eq!(Branch::from_index(i), Some(*branch));
        }
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn hidden_stem_weights_sum_to_thirty() {
        for branch in ALL_BRANCHES {
            let sum: u32 = branch.hidden_stems().iter().map(|(_, w)| u32::from(*w)).sum();
            assert_eq!(sum, 30, "{}", branch.symbol());
        }
    }

    #[test]
    fn principal_stem_matches_branch_element() {
        // The dominant hidden stem carries the branch's own element.
        for branch in ALL_BRANCHES {
            assert_eq!(branch.principal_stem().element(), branch.element());
        }
    }

    #[test]
    fn temperature_extremes() {
        assert_eq!(Branch::O.temperature(), Temperature::VeryHot);
        assert_eq!(Branch::Ja.temperature(), Temperature::VeryCold);
        assert_eq!(Branch::Chuk.temperature(), Temperature::VeryCold);
        assert_eq!(Branch::Yu.temperature(), Temperature::Mild);
    }
}
