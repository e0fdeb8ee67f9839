//! Core four-pillars types and analysis for the saju engine.
//!
//! Builds on [`saju_calendar`] and provides, in pipeline order:
//! - stems, branches, elements and the sexagenary cycle ([`stem`],
//!   [`branch`], [`element`], [`ganzi`])
//! - chart computation ([`pillars`])
//! - weighted element distribution ([`analysis`])
//! - day-master strength verdict ([`strength`])
//! - useful-element selection ([`yongshin`])
//! - ten-gods placement ([`ten_gods`]) and branch relations
//!   ([`interactions`])

pub mod analysis;
pub mod branch;
pub mod element;
pub mod error;
pub mod ganzi;
pub mod interactions;
pub mod pillars;
pub mod stem;
pub mod strength;
pub mod ten_gods;
pub mod yongshin;

pub use analysis::{analyze_elements, ElementStat, ElementStats};
pub use branch::{Branch, Temperature, ALL_BRANCHES};
pub use element::{Element, ElementRelation, Polarity, ALL_ELEMENTS};
pub use error::SajuError;
pub use ganzi::{Ganzi, Nayin, CYCLE_LEN};
pub use interactions::{analyze_interactions, Impact, Interaction, InteractionKind, InteractionsResult};
pub use pillars::{compute_chart, day_ganzi, year_ganzi, Chart, Gender, Pillar, PillarSlot};
pub use stem::{Stem, ALL_STEMS};
pub use strength::{analyze_strength, StrengthLevel, StrengthResult};
pub use ten_gods::{analyze_ten_gods, stem_god, GodCategory, TenGod, TenGodsResult};
pub use yongshin::{select_yongshin, Recommendations, SelectionMethod, YongShinResult};
