//! Clock collaborator: the only place the picker reads wall-clock time.

use chrono::Datelike;

use crate::prelude::*;

/// Current date components as seen by the picker (month is zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month + 1", day)]
pub struct Today {
    pub year: i32,
    /// Zero-based month, 0..=11
    pub month: i32,
    /// One-based day of month
    pub day: i32,
}

/// Source of "today", injected so tests and embedders can pin the date.
pub trait Clock {
    fn today(&self) -> Today;
}

/// System clock backed by the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Today {
        let now = chrono::Local::now().date_naive();
        Today {
            year: now.year(),
            month: now.month0() as i32,
            day: now.day() as i32,
        }
    }
}
