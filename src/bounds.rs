//! Optional min/max date bounds and their correction cascade.
//!
//! A bound only takes effect once all three of its components are set;
//! partially specified bounds are ignored entirely. This mirrors the
//! long-standing picker behavior and callers rely on it, so it is kept
//! even though it looks surprising at first sight.

use tracing::debug;

/// Minimum and maximum (year, month, day) bounds on the composite date.
/// Months are zero-based, matching the picker's internal state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateBounds {
    pub min_year: Option<i32>,
    pub min_month: Option<i32>,
    pub min_day: Option<i32>,
    pub max_year: Option<i32>,
    pub max_month: Option<i32>,
    pub max_day: Option<i32>,
}

impl DateBounds {
    /// True iff the minimum bound is fully specified.
    pub const fn min_active(&self) -> bool {
        self.min_year.is_some() && self.min_month.is_some() && self.min_day.is_some()
    }

    /// True iff the maximum bound is fully specified.
    pub const fn max_active(&self) -> bool {
        self.max_year.is_some() && self.max_month.is_some() && self.max_day.is_some()
    }

    /// Raises the candidate date up to the minimum bound, cascading through
    /// year, then month, then day. Month and day corrections are gated on
    /// equality with the (possibly just-raised) bound year/month, so a date
    /// already past the bound year is left alone below the year level.
    ///
    /// Returns the input unchanged when the bound is not active.
    pub fn apply_min(&self, year: i32, month: i32, day: i32) -> (i32, i32, i32) {
        let (Some(min_year), Some(min_month), Some(min_day)) =
            (self.min_year, self.min_month, self.min_day)
        else {
            return (year, month, day);
        };

        let (mut year, mut month, mut day) = (year, month, day);
        if year < min_year {
            year = min_year;
        }
        if year == min_year && month < min_month {
            month = min_month;
        }
        if year == min_year && month == min_month && day < min_day {
            day = min_day;
        }
        (year, month, day)
    }

    /// Mirror image of [`apply_min`](Self::apply_min): lowers the candidate
    /// date down to the maximum bound.
    pub fn apply_max(&self, year: i32, month: i32, day: i32) -> (i32, i32, i32) {
        let (Some(max_year), Some(max_month), Some(max_day)) =
            (self.max_year, self.max_month, self.max_day)
        else {
            return (year, month, day);
        };

        let (mut year, mut month, mut day) = (year, month, day);
        if year > max_year {
            year = max_year;
        }
        if year == max_year && month > max_month {
            month = max_month;
        }
        if year == max_year && month == max_month && day > max_day {
            day = max_day;
        }
        (year, month, day)
    }

    /// Applies min first, then max to the min-corrected result, so the
    /// maximum bound wins when the two are inconsistent.
    pub fn clamp(&self, year: i32, month: i32, day: i32) -> (i32, i32, i32) {
        let corrected = {
            let (y, m, d) = self.apply_min(year, month, day);
            self.apply_max(y, m, d)
        };
        if corrected != (year, month, day) {
            debug!(
                from = ?(year, month, day),
                to = ?corrected,
                "date corrected to bounds"
            );
        }
        corrected
    }
}
