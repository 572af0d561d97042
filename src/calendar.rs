//! Pure calendar math: leap years, month lengths and day clamping.
//!
//! Months are zero-based (0 = January) throughout, matching the internal
//! representation of the picker state. The display layer is the only place
//! that speaks one-based months.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};

/// Proleptic Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in the given zero-based month of the given year.
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    debug_assert!(month >= 0 && month < 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Clamps a day into the valid range for the given month/year.
/// Only ever lowers the value; a day below 1 passes through unchanged.
pub const fn clamp_day(day: i32, year: i32, month: i32) -> i32 {
    let max = days_in_month(year, month);
    if day > max { max } else { day }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [0, 2, 4, 6, 7, 9, 11] {
            assert_eq!(
                days_in_month(2024, month),
                31,
                "Month index {month} should have 31 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [3, 5, 8, 10] {
            assert_eq!(
                days_in_month(2024, month),
                30,
                "Month index {month} should have 30 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2024, FEBRUARY), 29);
        assert_eq!(days_in_month(2023, FEBRUARY), 28);
        assert_eq!(days_in_month(2020, FEBRUARY), 29);
        assert_eq!(days_in_month(2000, FEBRUARY), 29, "Century divisible by 400");
        assert_eq!(
            days_in_month(1900, FEBRUARY),
            28,
            "Century not divisible by 400"
        );
    }

    #[test]
    fn test_all_months_non_leap_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 0..12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month index {month} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_clamp_day_overflow_hits_month_length() {
        for year in [1900, 2000, 2023, 2024] {
            for month in 0..12 {
                assert_eq!(clamp_day(32, year, month), days_in_month(year, month));
            }
        }
    }

    #[test]
    fn test_clamp_day_keeps_valid_days() {
        assert_eq!(clamp_day(15, 2024, FEBRUARY), 15);
        assert_eq!(clamp_day(29, 2024, FEBRUARY), 29);
        assert_eq!(clamp_day(29, 2023, FEBRUARY), 28);
        assert_eq!(clamp_day(31, 2023, 0), 31);
    }

    #[test]
    fn test_clamp_day_never_raises() {
        // The clamp only lowers; values below 1 are left alone.
        assert_eq!(clamp_day(1, 2024, FEBRUARY), 1);
        assert_eq!(clamp_day(0, 2024, FEBRUARY), 0);
    }
}
