//! The sexagenary cycle (육십갑자) and the thirty nayin sound-elements.

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// A stem-branch pair from the 60-term cycle. Only parity-matched pairs
/// exist: stem and branch indexes are always both even or both odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganzi {
    stem: Stem,
    branch: Branch,
}

/// Number of terms in the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

impl Ganzi {
    /// Pair a stem with a branch; `None` when their parities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Term at a cycle position (0 = 甲子); any integer is reduced mod 60.
    pub const fn from_cycle_index(index: i64) -> Self {
        let i = index.rem_euclid(60) as usize;
        // i % 10 < 10 and i % 12 < 12, so both lookups are in range.
        let stem = crate::stem::ALL_STEMS[i % 10];
        let branch = crate::branch::ALL_BRANCHES[i % 12];
        Self { stem, branch }
    }

    /// Position of this term in the cycle (甲子 = 0).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (s * 6 - b * 5).rem_euclid(60) as u8
    }

    /// Term `offset` steps away in the cycle (negative steps backwards).
    pub const fn step(self, offset: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + offset)
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Two-character hanja form, e.g. `庚辰`.
    pub fn label(self) -> String {
        format!("{}{}", self.stem.symbol(), self.branch.symbol())
    }

    /// Nayin sound-element of this term.
    pub const fn nayin(self) -> Nayin {
        NAYIN_TABLE[(self.cycle_index() / 2) as usize]
    }
}

impl std::fmt::Display for Ganzi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

/// One of the thirty nayin sound-elements, shared by consecutive cycle pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nayin {
    pub name: &'static str,
    pub element: Element,
}

/// Nayin for cycle pairs 甲子乙丑 through 壬戌癸亥, indexed by
/// `cycle_index / 2`.
pub const NAYIN_TABLE: [Nayin; 30] = [
    Nayin { name: "海中金", element: Element::Metal },
    Nayin { name: "爐中火", element: Element::Fire },
    Nayin { name: "大林木", element: Element::Wood },
    Nayin { name: "路傍土", element: Element::Earth },
    Nayin { name: "劍鋒金", element: Element::Metal },
    Nayin { name: "山頭火", element: Element::Fire },
    Nayin { name: "澗下水", element: Element::Water },
    Nayin { name: "城頭土", element: Element::Earth },
    Nayin { name: "白蠟金", element: Element::Metal },
    Nayin { name: "楊柳木", element: Element::Wood },
    Nayin { name: "泉中水", element: Element::Water },
    Nayin { name: "屋上土", element: Element::Earth },
    Nayin { name: "霹靂火", element: Element::Fire },
    Nayin { name: "松柏木", element: Element::Wood },
    Nayin { name: "長流水", element: Element::Water },
    Nayin { name: "沙中金", element: Element::Metal },
    Nayin { name: "山下火", element: Element::Fire },
    Nayin { name: "平地木", element: Element::Wood },
    Nayin { name: "壁上土", element: Element::Earth },
    Nayin { name: "金箔金", element: Element::Metal },
    Nayin { name: "覆燈火", element: Element::Fire },
    Nayin { name: "天河水", element: Element::Water },
    Nayin { name: "大驛土", element: Element::Earth },
    Nayin { name: "釵釧金", element: Element::Metal },
    Nayin { name: "桑柘木", element: Element::Wood },
    Nayin { name: "大溪水", element: Element::Water },
    Nayin { name: "沙中土", element: Element::Earth },
    Nayin { name: "天上火", element: Element::Fire },
    Nayin { name: "石榴木", element: Element::Wood },
    Nayin { name: "大海水", element: Element::Water },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_round_trip() {
        for i in 0..60 {
            let g = Ganzi::from_cycle_index(i);
            assert_eq!(i64::from(g.cycle_index()), i);
        }
    }

    #[test]
    fn parity_invariant_holds() {
        for i in 0..60 {
            let g = Ganzi::from_cycle_index(i);
            assert_eq!(g.stem().index() % 2, g.branch().index() % 2);
        }
    }

    #[test]
    fn mismatched_parity_rejected() {
        assert!(Ganzi::new(Stem::Gap, Branch::Chuk).is_none());
        assert!(Ganzi::new(Stem::Gap, Branch::Ja).is_some());
    }

    #[test]
    fn cycle_endpoints() {
        let first = Ganzi::from_cycle_index(0);
        assert_eq!(first.label(), "甲子");
        let last = Ganzi::from_cycle_index(59);
        assert_eq!(last.label(), "癸亥");
        assert_eq!(last.step(1), first);
        assert_eq!(first.step(-1), last);
    }

    #[test]
    fn negative_index_wraps() {
        assert_eq!(Ganzi::from_cycle_index(-1).label(), "癸亥");
        assert_eq!(Ganzi::from_cycle_index(-60).label(), "甲子");
    }

    #[test]
    fn nayin_of_known_terms() {
        // 甲子 and 乙丑 share 海中金.
        assert_eq!(Ganzi::from_cycle_index(0).nayin().name, "海中金");
        assert_eq!(Ganzi::from_cycle_index(1).nayin().name, "海中金");
        assert_eq!(Ganzi::from_cycle_index(1).nayin().element, Element::Metal);
        // 庚辰 (index 16) is 白蠟金.
        assert_eq!(Ganzi::from_cycle_index(16).nayin().name, "白蠟金");
        assert_eq!(Ganzi::from_cycle_index(59).nayin().name, "大海水");
    }
}
