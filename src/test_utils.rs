//! Shared fakes for the crate's tests: a pinned clock, a stub locale
//! service and recording spinner doubles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::{Clock, Today};
use crate::order::{FieldOrder, LocaleService, Skeleton};
use crate::spinner::{Spinner, SpinnerPanel};
use crate::{DatePicker, WidgetConfig};

/// English short month names, January first.
pub fn month_names() -> [String; 12] {
    [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
    .map(str::to_owned)
}

/// A month table the numeric-month heuristic fires on.
pub fn numeric_month_names() -> [String; 12] {
    ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"].map(str::to_owned)
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Today);

impl Clock for FixedClock {
    fn today(&self) -> Today {
        self.0
    }
}

/// The date most tests pin the clock to: 2026-08-29 (month index 7).
pub const fn fixed_today() -> Today {
    Today {
        year: 2026,
        month: 7,
        day: 29,
    }
}

/// Locale service with canned answers.
#[derive(Debug, Clone)]
pub struct StubLocale {
    pub pattern_full: Option<String>,
    pub pattern_no_year: Option<String>,
    pub months: [String; 12],
    pub numeric_flag: Option<bool>,
}

impl Default for StubLocale {
    fn default() -> Self {
        Self {
            pattern_full: Some("d MMM y".to_owned()),
            pattern_no_year: Some("d MMM".to_owned()),
            months: month_names(),
            numeric_flag: None,
        }
    }
}

impl StubLocale {
    pub fn numeric() -> Self {
        Self {
            months: numeric_month_names(),
            ..Self::default()
        }
    }
}

impl LocaleService for StubLocale {
    fn best_pattern(&self, _locale: &str, skeleton: Skeleton) -> Option<String> {
        match skeleton {
            Skeleton::YearMonthDay => self.pattern_full.clone(),
            Skeleton::MonthDay => self.pattern_no_year.clone(),
        }
    }

    fn short_month_names(&self, _locale: &str) -> [String; 12] {
        self.months.clone()
    }

    fn numeric_months(&self, _locale: &str) -> Option<bool> {
        self.numeric_flag
    }
}

/// Everything a recording spinner saw last.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpinnerLog {
    pub range: Option<(i32, i32)>,
    pub value: Option<i32>,
    pub visible: Option<bool>,
    /// Last label push: `Some(None)` means explicit reset to numeric.
    pub labels: Option<Option<Vec<String>>>,
}

/// Spinner double writing into a shared [`SpinnerLog`].
pub struct RecordingSpinner(pub Rc<RefCell<SpinnerLog>>);

impl Spinner for RecordingSpinner {
    fn set_range(&mut self, min: i32, max: i32) {
        self.0.borrow_mut().range = Some((min, max));
    }

    fn min_value(&self) -> i32 {
        self.0.borrow().range.map_or(0, |(min, _)| min)
    }

    fn set_value(&mut self, value: i32) {
        self.0.borrow_mut().value = Some(value);
    }

    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().visible = Some(visible);
    }

    fn set_displayed_labels(&mut self, labels: Option<&[String]>) {
        self.0.borrow_mut().labels = Some(labels.map(<[String]>::to_vec));
    }
}

/// Panel double recording every reorder.
pub struct RecordingPanel(pub Rc<RefCell<Vec<FieldOrder>>>);

impl SpinnerPanel for RecordingPanel {
    fn reorder(&mut self, order: FieldOrder) {
        self.0.borrow_mut().push(order);
    }
}

/// Handles into the doubles wired into a test picker.
pub struct PickerHarness {
    pub day: Rc<RefCell<SpinnerLog>>,
    pub month: Rc<RefCell<SpinnerLog>>,
    pub year: Rc<RefCell<SpinnerLog>>,
    pub orders: Rc<RefCell<Vec<FieldOrder>>>,
}

/// Builds a picker over recording doubles, pinned to [`fixed_today`].
pub fn picker() -> (DatePicker, PickerHarness) {
    picker_with(fixed_today(), StubLocale::default())
}

pub fn picker_with(today: Today, locale: StubLocale) -> (DatePicker, PickerHarness) {
    let harness = PickerHarness {
        day: Rc::default(),
        month: Rc::default(),
        year: Rc::default(),
        orders: Rc::default(),
    };
    let picker = DatePicker::new(
        WidgetConfig::default(),
        Box::new(FixedClock(today)),
        Box::new(locale),
        Box::new(RecordingSpinner(Rc::clone(&harness.day))),
        Box::new(RecordingSpinner(Rc::clone(&harness.month))),
        Box::new(RecordingSpinner(Rc::clone(&harness.year))),
        Box::new(RecordingPanel(Rc::clone(&harness.orders))),
    );
    (picker, harness)
}
