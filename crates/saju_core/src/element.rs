//! The five elements (오행) and their generate/control cycles.
//!
//! Every downstream stage is phrased in terms of the two closed cycles
//! defined here:
//! generation 木→火→土→金→水→木 and control 木→土→水→火→金→木.

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in traditional order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Hanja symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Hangul reading.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// 0-based index into [`ALL_ELEMENTS`].
    pub const fn index(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one generates (상생).
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element that generates this one (its resource).
    pub const fn generated_by(self) -> Self {
        match self {
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
            Self::Wood => Self::Water,
        }
    }

    /// The element this one controls (상극).
    pub const fn controls(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        match self {
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
            Self::Wood => Self::Metal,
        }
    }

    /// Relation of `self` (as the day-master element) to `other`.
    pub const fn relation_to(self, other: Self) -> ElementRelation {
        if self as u8 == other as u8 {
            ElementRelation::Same
        } else if self.generates() as u8 == other as u8 {
            ElementRelation::IGenerate
        } else if self.controls() as u8 == other as u8 {
            ElementRelation::IControl
        } else if other.controls() as u8 == self as u8 {
            ElementRelation::ControlsMe
        } else {
            ElementRelation::GeneratesMe
        }
    }
}

/// The five possible relations between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRelation {
    Same,
    IGenerate,
    IControl,
    ControlsMe,
    GeneratesMe,
}

/// Yin/yang polarity of stems and branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    /// Polarity by index parity (even = yang).
    pub const fn from_parity(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Yang
        } else {
            Self::Yin
        }
    }
}
