//! Field-order resolution: which spinner goes where for a given locale,
//! and whether month labels are textual or plain numbers.
//!
//! The actual locale data lives behind the [`LocaleService`] trait; this
//! module only decides which skeleton to ask for, parses the answer into a
//! [`FieldOrder`], and falls back to day-month-year when the service cannot
//! help.

use tracing::debug;

use crate::prelude::*;

/// One of the three spinner fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// Left-to-right arrangement of the three spinners. Always contains all
/// three fields exactly once; the year spinner is simply hidden when the
/// picker shows no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldOrder([Field; 3]);

/// Date-format skeleton the resolver asks the locale service about.
/// We use numeric spinners for year and day but textual months, so the
/// skeleton always carries `MMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Skeleton {
    /// Month and day only
    #[display(fmt = "MMMdd")]
    MonthDay,
    /// Full date
    #[display(fmt = "yyyyMMMdd")]
    YearMonthDay,
}

impl Skeleton {
    pub const fn for_year_presence(has_year: bool) -> Self {
        if has_year {
            Self::YearMonthDay
        } else {
            Self::MonthDay
        }
    }
}

/// Error type for pattern parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// Pattern never mentions a day symbol.
    #[error("pattern {0:?} contains no day field")]
    MissingDay(String),

    /// Pattern never mentions a month symbol.
    #[error("pattern {0:?} contains no month field")]
    MissingMonth(String),
}

/// Locale/format collaborator. Implemented by the host on top of whatever
/// locale data it has (ICU, CLDR tables, hardcoded lists).
pub trait LocaleService {
    /// Best-fit date pattern for the skeleton in the given locale, e.g.
    /// `"d MMM y"` for `en-GB`. `None` means the service cannot resolve
    /// the locale and the caller falls back to the default order.
    fn best_pattern(&self, locale: &str, skeleton: Skeleton) -> Option<String>;

    /// The locale's twelve short month names, January first.
    fn short_month_names(&self, locale: &str) -> [String; 12];

    /// Explicit "this locale names months numerically" capability flag.
    /// `None` (the default) makes the picker fall back to sniffing the
    /// first short month name, see [`has_numeric_months`].
    fn numeric_months(&self, locale: &str) -> Option<bool> {
        let _ = locale;
        None
    }
}

impl FieldOrder {
    /// Fallback order used whenever the locale service cannot help.
    pub const DEFAULT: Self = Self([Field::Day, Field::Month, Field::Year]);

    pub const fn fields(&self) -> [Field; 3] {
        self.0
    }

    /// Extracts the field order from a date pattern by the first occurrence
    /// of each field symbol (`d`, `M`/`L`, `y`). Day and month must both be
    /// present; a pattern without a year symbol gets the year appended at
    /// the end, where it sits hidden when the picker shows no year.
    pub fn from_pattern(pattern: &str) -> Result<Self, OrderError> {
        let mut order: Vec<Field> = Vec::with_capacity(3);
        let mut push = |field: Field, order: &mut Vec<Field>| {
            if !order.contains(&field) {
                order.push(field);
            }
        };

        let mut quoted = false;
        for ch in pattern.chars() {
            match ch {
                // Literal text in date patterns is single-quoted.
                '\'' => quoted = !quoted,
                _ if quoted => {}
                'd' => push(Field::Day, &mut order),
                'M' | 'L' => push(Field::Month, &mut order),
                'y' => push(Field::Year, &mut order),
                _ => {}
            }
        }

        if !order.contains(&Field::Day) {
            return Err(OrderError::MissingDay(pattern.to_owned()));
        }
        if !order.contains(&Field::Month) {
            return Err(OrderError::MissingMonth(pattern.to_owned()));
        }
        if !order.contains(&Field::Year) {
            order.push(Field::Year);
        }

        // Length is exactly 3 here: day, month and year were each pushed
        // at most once and all three are present.
        let mut fields = [Field::Day, Field::Month, Field::Year];
        for (slot, field) in fields.iter_mut().zip(order) {
            *slot = field;
        }
        Ok(Self(fields))
    }
}

impl Default for FieldOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolves the spinner order for the locale, falling back to the default
/// day-month-year order when the service has no pattern or the pattern is
/// unusable.
pub fn resolve_field_order(
    service: &dyn LocaleService,
    locale: &str,
    skeleton: Skeleton,
) -> FieldOrder {
    let Some(pattern) = service.best_pattern(locale, skeleton) else {
        debug!(locale, %skeleton, "no pattern for locale, using default order");
        return FieldOrder::DEFAULT;
    };
    match FieldOrder::from_pattern(&pattern) {
        Ok(order) => order,
        Err(err) => {
            debug!(locale, %err, "unusable pattern, using default order");
            FieldOrder::DEFAULT
        }
    }
}

/// Heuristic for all-numeric month-naming locales: the first short month
/// name starting with the digit 1 means the table is "1月"-style or plain
/// "1".."12". Used only when the service provides no explicit flag.
pub fn has_numeric_months(short_months: &[String; 12]) -> bool {
    short_months[0].starts_with('1')
}

/// The subset of month labels the spinner shows when its floor is raised:
/// labels for one-based display values `floor..=ceil`.
pub fn month_label_window(short_months: &[String; 12], floor: i32, ceil: i32) -> Vec<String> {
    let start = floor.max(1) as usize - 1;
    let end = (ceil.max(0) as usize).min(short_months.len());
    short_months[start.min(end)..end].to_vec()
}
