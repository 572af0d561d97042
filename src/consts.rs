/// Magic year value meaning "no year currently chosen" when the year
/// field is optional.
pub const NO_YEAR: i32 = 0;

/// Lowest year the year spinner offers at construction time.
pub const DEFAULT_START_YEAR: i32 = 1900;

/// Highest year the year spinner offers.
pub const DEFAULT_END_YEAR: i32 = 2800;

/// Year used for day-of-month math while no year is shown.
/// 2000 is a leap year, so February 29th stays selectable.
pub const FALLBACK_LEAP_YEAR: i32 = 2000;

/// Zero-based month index for January
pub const JANUARY: i32 = 0;
/// Zero-based month index for February
pub const FEBRUARY: i32 = 1;
/// Zero-based month index for December
pub const DECEMBER: i32 = 11;

/// Number of months the month spinner displays (values 1..=12)
pub const MONTHS_PER_YEAR: i32 = 12;

/// First valid day of any month
pub const MIN_DAY: i32 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Days in each zero-based month of a non-leap year
/// (February is adjusted by the `is_leap_year` check)
pub const DAYS_IN_MONTH: [i32; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
