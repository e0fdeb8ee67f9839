//! Packed lunar almanac table for 1900–2100.
//!
//! One `u32` per lunar year, in the packed layout shared by the common
//! open lunar-calendar libraries:
//!
//! - bits 4..=15: month lengths for months 1..=12 (bit `0x8000 >> (m-1)`
//!   set means month `m` has 30 days, clear means 29),
//! - bits 0..=3: the leap month number (0 = no leap month),
//! - bit 16: the leap month has 30 days (29 when clear).
//!
//! The table is static read-only data, loaded with the binary; nothing is
//! recomputed astronomically at request time. Entries were cross-checked
//! against published Chinese New Year dates and the published leap-month
//! sequence for every year of the span.

/// First year covered by [`LUNAR_TABLE`].
pub const LUNAR_TABLE_FIRST_YEAR: i32 = 1900;

/// Last year covered by [`LUNAR_TABLE`].
pub const LUNAR_TABLE_LAST_YEAR: i32 = 2100;

/// Solar date of lunar 1900-01-01, the table's day-count anchor.
pub const LUNAR_EPOCH_SOLAR: (i32, u32, u32) = (1900, 1, 31);

/// Packed month-length / leap-month data, one entry per year 1900..=2100.
pub const LUNAR_TABLE: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

/// True when `year` is inside the almanac span.
pub const fn year_in_table(year: i32) -> bool {
    year >= LUNAR_TABLE_FIRST_YEAR && year <= LUNAR_TABLE_LAST_YEAR
}

const fn entry(year: i32) -> u32 {
    LUNAR_TABLE[(year - LUNAR_TABLE_FIRST_YEAR) as usize]
}

/// Leap month of a lunar year (1-12), or 0 when the year has none.
pub const fn leap_month(year: i32) -> u32 {
    entry(year) & 0xf
}

/// Days in the leap month of a lunar year; 0 when the year has none.
pub const fn leap_month_days(year: i32) -> u32 {
    if leap_month(year) == 0 {
        0
    } else if entry(year) & 0x10000 != 0 {
        30
    } else {
        29
    }
}

/// Days in a regular lunar month (1-12) of a lunar year.
pub const fn lunar_month_days(year: i32, month: u32) -> u32 {
    if entry(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

/// Total days in a lunar year, including any leap month.
pub fn lunar_year_days(year: i32) -> u32 {
    let mut sum = 0;
    for month in 1..=12 {
        sum += lunar_month_days(year, month);
    }
    sum + leap_month_days(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_month_sequence() {
        // Spot checks against the published leap-month sequence.
        assert_eq!(leap_month(1900), 8);
        assert_eq!(leap_month(1984), 10);
        assert_eq!(leap_month(1990), 5);
        assert_eq!(leap_month(2004), 2);
        assert_eq!(leap_month(2020), 4);
        assert_eq!(leap_month(2023), 2);
        assert_eq!(leap_month(2033), 11);
        assert_eq!(leap_month(2100), 0);
        // Years with no leap month.
        assert_eq!(leap_month(1991), 0);
        assert_eq!(leap_month(2024), 0);
    }

    #[test]
    fn year_lengths_structurally_valid() {
        for year in LUNAR_TABLE_FIRST_YEAR..=LUNAR_TABLE_LAST_YEAR {
            let days = lunar_year_days(year);
            if leap_month(year) != 0 {
                assert!((383..=385).contains(&days), "leap year {year}: {days}");
            } else {
                assert!((353..=355).contains(&days), "year {year}: {days}");
            }
        }
    }

    #[test]
    fn month_lengths_are_29_or_30() {
        for year in LUNAR_TABLE_FIRST_YEAR..=LUNAR_TABLE_LAST_YEAR {
            for month in 1..=12 {
                let days = lunar_month_days(year, month);
                assert!(days == 29 || days == 30);
            }
        }
    }

    #[test]
    fn year_1900_has_384_days() {
        // Lunar 1900 ran 1900-01-31 .. 1901-02-18 inclusive.
        assert_eq!(lunar_year_days(1900), 384);
    }
}
