//! Date-value constraint engine for a three-wheel spinner date picker.
//!
//! A [`DatePicker`] keeps a (year, month, day) selection mutually
//! consistent while the user moves individual wheels: days are clamped to
//! the month length (leap-year aware), optional min/max date bounds pull
//! the selection back into range, and the wheel order follows the locale's
//! date format. Rendering is entirely the host's job; the picker drives it
//! through the [`Spinner`] and [`SpinnerPanel`] traits and reads the world
//! through [`Clock`] and [`LocaleService`].
//!
//! Months are zero-based everywhere except the month wheel's displayed
//! value, which is one-based.

mod bounds;
mod calendar;
mod clock;
mod consts;
mod order;
mod prelude;
mod snapshot;
mod spinner;
#[cfg(test)]
mod test_utils;

pub use bounds::DateBounds;
pub use calendar::{clamp_day, days_in_month, is_leap_year};
pub use clock::{Clock, SystemClock, Today};
pub use consts::*;
pub use order::{
    Field, FieldOrder, LocaleService, OrderError, Skeleton, has_numeric_months,
    month_label_window, resolve_field_order,
};
pub use snapshot::PickerSnapshot;
pub use spinner::{Spinner, SpinnerPanel};

use tracing::{debug, trace};

use crate::prelude::*;

/// Per-picker configuration, passed at construction instead of living in
/// process-wide statics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Locale identifier handed to the [`LocaleService`], e.g. `"en"`.
    pub locale: String,
    /// Externally-visible year meaning "no year chosen".
    pub no_year_sentinel: i32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_owned(),
            no_year_sentinel: NO_YEAR,
        }
    }
}

/// Payload of a committed change notification. `year` is the sentinel when
/// the year is optional and absent; `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "year {} month {} day {}", year, month, day)]
pub struct DateChange {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

/// Change listener invoked synchronously on every committed change.
pub type OnDateChanged = Box<dyn FnMut(DateChange)>;

/// The authoritative picker state and the logic keeping it consistent.
///
/// Two API tiers exist on purpose: the raw setters ([`set_year`],
/// [`set_month`], [`set_day_of_month`]) assign and resync without any
/// validation or notification, while the interactive path (the
/// `*_spinner_changed` handlers and [`update_date`]) clamps days, enforces
/// bounds and notifies the listener. Unifying the tiers would change
/// observable behavior for existing hosts.
///
/// [`set_year`]: Self::set_year
/// [`set_month`]: Self::set_month
/// [`set_day_of_month`]: Self::set_day_of_month
/// [`update_date`]: Self::update_date
pub struct DatePicker {
    config: WidgetConfig,
    clock: Box<dyn Clock>,
    locale: Box<dyn LocaleService>,
    day_spinner: Box<dyn Spinner>,
    month_spinner: Box<dyn Spinner>,
    year_spinner: Box<dyn Spinner>,
    panel: Box<dyn SpinnerPanel>,
    on_change: Option<OnDateChanged>,
    /// Internal year; stays a real year even when no year is shown.
    year: i32,
    /// Zero-based month
    month: i32,
    day: i32,
    year_optional: bool,
    has_year: bool,
    bounds: DateBounds,
}

impl DatePicker {
    /// Wires the picker to its collaborators and initializes the selection
    /// to today. Fires no notification.
    pub fn new(
        config: WidgetConfig,
        clock: Box<dyn Clock>,
        locale: Box<dyn LocaleService>,
        day_spinner: Box<dyn Spinner>,
        month_spinner: Box<dyn Spinner>,
        year_spinner: Box<dyn Spinner>,
        panel: Box<dyn SpinnerPanel>,
    ) -> Self {
        let today = clock.today();
        let mut picker = Self {
            config,
            clock,
            locale,
            day_spinner,
            month_spinner,
            year_spinner,
            panel,
            on_change: None,
            year: today.year,
            month: today.month,
            day: today.day,
            year_optional: false,
            has_year: true,
            bounds: DateBounds::default(),
        };
        picker.year_spinner.set_range(DEFAULT_START_YEAR, DEFAULT_END_YEAR);
        picker.init(today.year, today.month, today.day, false, None);
        picker.reorder_pickers();
        picker
    }

    /// Sets the selection and registers the change listener. The values are
    /// assigned as-is (no clamping, no bounds check); when `year_optional`
    /// and `year` is the sentinel, the internal year falls back to today's
    /// so day/month math stays valid. Fires no notification.
    pub fn init(
        &mut self,
        year: i32,
        month: i32,
        day: i32,
        year_optional: bool,
        on_change: Option<OnDateChanged>,
    ) {
        self.year = if year_optional && year == self.config.no_year_sentinel {
            self.clock.today().year
        } else {
            year
        };
        self.month = month;
        self.day = day;
        self.year_optional = year_optional;
        self.has_year = !year_optional || year != self.config.no_year_sentinel;
        self.on_change = on_change;
        self.resync_spinners();
    }

    /// Replaces the selection wholesale. A call that matches the current
    /// internal tuple field-by-field is a no-op; anything else assigns the
    /// values (sentinel substitution included, month/day unclamped),
    /// resyncs, re-resolves the field order and fires the change path.
    pub fn update_date(&mut self, year: i32, month: i32, day: i32) {
        if self.year != year || self.month != month || self.day != day {
            self.year = if self.year_optional && year == self.config.no_year_sentinel {
                self.clock.today().year
            } else {
                year
            };
            self.month = month;
            self.day = day;
            self.resync_spinners();
            self.reorder_pickers();
            self.notify_date_changed();
        }
    }

    /// Externally-visible year: the sentinel when the year is optional and
    /// absent, the stored year otherwise.
    pub fn year(&self) -> i32 {
        self.visible_year()
    }

    /// Zero-based month
    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn day_of_month(&self) -> i32 {
        self.day
    }

    pub const fn is_year_optional(&self) -> bool {
        self.year_optional
    }

    pub const fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// Raw setter: assigns and resyncs, nothing else.
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        self.resync_spinners();
    }

    /// Raw setter: assigns the zero-based month and resyncs. The day is
    /// deliberately not clamped here.
    pub fn set_month(&mut self, month: i32) {
        self.month = month;
        self.resync_spinners();
    }

    /// Raw setter: assigns and resyncs, nothing else.
    pub fn set_day_of_month(&mut self, day: i32) {
        self.day = day;
        self.resync_spinners();
    }

    /// Bound components are plain state updates; nothing is validated until
    /// the next change cycle, and a bound only becomes active once all
    /// three of its components are set.
    pub fn set_min_year(&mut self, year: Option<i32>) {
        self.bounds.min_year = year;
    }

    pub fn set_min_month(&mut self, month: Option<i32>) {
        self.bounds.min_month = month;
    }

    pub fn set_min_day(&mut self, day: Option<i32>) {
        self.bounds.min_day = day;
    }

    pub fn set_max_year(&mut self, year: Option<i32>) {
        self.bounds.max_year = year;
    }

    pub fn set_max_month(&mut self, month: Option<i32>) {
        self.bounds.max_month = month;
    }

    pub fn set_max_day(&mut self, day: Option<i32>) {
        self.bounds.max_day = day;
    }

    /// Day wheel moved.
    pub fn day_spinner_changed(&mut self, value: i32) {
        self.day = value;
        self.notify_date_changed();
    }

    /// Month wheel moved. The wheel displays 1..=12, stored state is 0..=11,
    /// so the display value is shifted down before the day is re-clamped to
    /// the new month's length.
    pub fn month_spinner_changed(&mut self, display_value: i32) {
        self.month = display_value - 1;
        self.adjust_max_day();
        self.notify_date_changed();
    }

    /// Year wheel moved. Re-clamps the day (February 29th may have just
    /// become invalid), runs the change path, then brings the day wheel's
    /// range up to date with the new year.
    pub fn year_spinner_changed(&mut self, value: i32) {
        self.year = value;
        self.adjust_max_day();
        self.notify_date_changed();
        self.update_day_spinner();
    }

    /// Snapshot of the restorable state.
    pub const fn save_state(&self) -> PickerSnapshot {
        PickerSnapshot {
            year: self.year,
            month: self.month,
            day: self.day,
            has_year: self.has_year,
            year_optional: self.year_optional,
        }
    }

    /// Restores a snapshot verbatim: raw assignment, no bounds validation,
    /// no notification. Bounds are re-asserted on the next interactive
    /// change.
    pub fn restore_state(&mut self, snapshot: &PickerSnapshot) {
        self.year = snapshot.year;
        self.month = snapshot.month;
        self.day = snapshot.day;
        self.has_year = snapshot.has_year;
        self.year_optional = snapshot.year_optional;
        self.resync_spinners();
    }

    fn visible_year(&self) -> i32 {
        if self.year_optional && !self.has_year {
            self.config.no_year_sentinel
        } else {
            self.year
        }
    }

    /// Year used for day-of-month math; a fixed leap year stands in while
    /// no year is shown.
    const fn effective_year(&self) -> i32 {
        if self.has_year { self.year } else { FALLBACK_LEAP_YEAR }
    }

    fn adjust_max_day(&mut self) {
        let clamped = calendar::clamp_day(self.day, self.effective_year(), self.month);
        if clamped != self.day {
            trace!(from = self.day, to = clamped, "day clamped to month length");
            self.day = clamped;
        }
    }

    /// The committed-change path: bounds are enforced against the
    /// externally-visible year, then the listener hears about it. The
    /// listener receives the visible year as computed before any bound
    /// correction, together with the corrected month and day.
    fn notify_date_changed(&mut self) {
        let visible_year = self.visible_year();
        if self.bounds.min_active() {
            self.limit_min_date(visible_year);
        }
        if self.bounds.max_active() {
            self.limit_max_date(visible_year);
        }
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(DateChange {
                year: visible_year,
                month: self.month,
                day: self.day,
            });
        }
    }

    fn limit_min_date(&mut self, visible_year: i32) {
        let (year, month, day) = self.bounds.apply_min(visible_year, self.month, self.day);
        if year != visible_year {
            debug!(from = visible_year, to = year, "year raised to minimum bound");
            // has_year is left alone: a corrected optional-absent date
            // still reports the sentinel.
            self.year = year;
        }
        self.month = month;
        self.day = day;
        self.resync_spinners();
    }

    fn limit_max_date(&mut self, visible_year: i32) {
        let (year, month, day) = self.bounds.apply_max(visible_year, self.month, self.day);
        if year != visible_year {
            debug!(from = visible_year, to = year, "year lowered to maximum bound");
            self.year = year;
        }
        self.month = month;
        self.day = day;
        self.resync_spinners();
    }

    fn resync_spinners(&mut self) {
        let today = self.clock.today();
        trace!(
            year = self.year,
            month = self.month,
            day = self.day,
            "resyncing spinners"
        );
        self.year_spinner.set_range(today.year, DEFAULT_END_YEAR);
        self.year_spinner.set_value(self.year);
        self.year_spinner.set_visible(self.has_year);
        self.update_day_spinner();
        self.update_month_spinner();
    }

    /// Day wheel range: the ceiling is the month length; the floor follows
    /// the documented rule order — min bound pinning today's day when both
    /// its year and month match the selection, 1 when either mismatches,
    /// today's day when the selection sits on today, 1 otherwise.
    fn update_day_spinner(&mut self) {
        let today = self.clock.today();
        let max = calendar::days_in_month(self.effective_year(), self.month);
        let bounds = self.bounds;

        let min = if bounds.min_year == Some(self.year) && bounds.min_month == Some(self.month) {
            today.day
        } else if bounds.min_year.is_some_and(|year| year != self.year)
            || bounds.min_month.is_some_and(|month| month != self.month)
        {
            MIN_DAY
        } else if today.day == self.day {
            today.day
        } else {
            MIN_DAY
        };

        self.day_spinner.set_range(min, max);
        self.day_spinner.set_value(self.day);
    }

    /// Month wheel range, labels and value. The numeric and textual
    /// branches share the same five-way floor computation but differ in
    /// their fallback (numeric resets to 1, textual keeps the wheel's
    /// previous floor) and in what labels they push. The rule order is
    /// load-bearing; callers depend on which lower bound wins, so the
    /// branches are spelled out rather than folded together.
    fn update_month_spinner(&mut self) {
        let today = self.clock.today();
        let months = self.locale.short_month_names(&self.config.locale);
        let numeric = self
            .locale
            .numeric_months(&self.config.locale)
            .unwrap_or_else(|| order::has_numeric_months(&months));
        let bounds = self.bounds;

        if numeric {
            let floor = if bounds.min_year == Some(self.year) && bounds.min_day == Some(self.day) {
                today.month + 1
            } else if bounds.min_year.is_some_and(|year| year != self.year) {
                1
            } else if bounds.min_year == Some(self.year)
                && bounds.min_day.is_some_and(|day| day != self.day)
            {
                today.month + 1
            } else if today.month == self.month {
                today.month + 1
            } else {
                1
            };
            self.month_spinner.set_range(floor, MONTHS_PER_YEAR);
            self.month_spinner.set_displayed_labels(None);
        } else {
            let floor = if bounds.min_year == Some(self.year) && bounds.min_day == Some(self.day) {
                Some(today.month + 1)
            } else if bounds.min_year.is_some_and(|year| year != self.year) {
                self.month_spinner.set_displayed_labels(Some(months.as_slice()));
                Some(1)
            } else if bounds.min_year == Some(self.year)
                && bounds.min_day.is_some_and(|day| day != self.day)
            {
                Some(today.month + 1)
            } else if today.month == self.month {
                Some(today.month + 1)
            } else {
                None
            };
            // No rule matched: the wheel keeps the floor it already has.
            let floor = floor.unwrap_or_else(|| self.month_spinner.min_value());
            self.month_spinner.set_range(floor, MONTHS_PER_YEAR);
            let window = order::month_label_window(&months, floor, MONTHS_PER_YEAR);
            self.month_spinner.set_displayed_labels(Some(window.as_slice()));
        }

        // Stored zero-based, displayed one-based.
        self.month_spinner.set_value(self.month + 1);
    }

    fn reorder_pickers(&mut self) {
        let skeleton = Skeleton::for_year_presence(self.has_year);
        let order = order::resolve_field_order(self.locale.as_ref(), &self.config.locale, skeleton);
        self.panel.reorder(order);
    }
}
