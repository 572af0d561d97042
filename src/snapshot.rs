//! Minimal state snapshot for host-driven save/restore.

use serde::{Deserialize, Serialize};

/// Everything needed to bring a picker back to its saved selection.
///
/// Restoring is a raw field assignment: bounds are not re-validated and no
/// change notification fires. The invariants are re-asserted on the next
/// interactive change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickerSnapshot {
    /// Internal year (never the sentinel; see `has_year`).
    pub year: i32,
    /// Zero-based month
    pub month: i32,
    pub day: i32,
    pub has_year: bool,
    pub year_optional: bool,
}
