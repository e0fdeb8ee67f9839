//! Luck-cycle, yearly and daily fortune for the saju engine.
//!
//! One compatibility score (term element vs. yongshin/gishin, [`score`])
//! feeds three stages: ten-year luck pillars ([`dayun`]), per-year scores
//! ([`yearly`]) and the same-day luck index ([`daily`]).

pub mod daily;
pub mod dayun;
pub mod score;
pub mod yearly;

pub use daily::{daily_fortune, DailyFortune};
pub use dayun::{compute_da_yun, current_da_yun, direction, start_age, DaYun, Direction};
pub use score::{score_ganzi, Rating};
pub use yearly::{yearly_fortune, yearly_fortunes, YearlyFortune};

/// Korean age: the birth year counts as age one.
pub const fn korean_age(birth_year: i32, current_year: i32) -> u32 {
    let age = current_year - birth_year + 1;
    if age < 0 {
        0
    } else {
        age as u32
    }
}
