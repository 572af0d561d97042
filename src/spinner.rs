//! Widget-side collaborators: the three value spinners and the panel that
//! hosts them. The picker core only drives these traits; it never renders
//! anything itself.

use crate::order::FieldOrder;

/// One value wheel (day, month or year). The host wires a real widget
/// behind this and forwards its value-changed events to the matching
/// `*_spinner_changed` method on [`DatePicker`](crate::DatePicker).
pub trait Spinner {
    /// Sets the selectable range, inclusive on both ends.
    fn set_range(&mut self, min: i32, max: i32);

    /// Current lower end of the selectable range. The month-sync logic
    /// reads this back when none of its floor rules applies.
    fn min_value(&self) -> i32;

    /// Moves the wheel to the given value without emitting a change event.
    fn set_value(&mut self, value: i32);

    /// Shows or hides the whole field (used for the optional year).
    fn set_visible(&mut self, visible: bool);

    /// Replaces the numeric display with the given labels, where
    /// `labels[0]` is shown for the range minimum. `None` restores plain
    /// numeric display.
    fn set_displayed_labels(&mut self, labels: Option<&[String]>);
}

/// The container holding the three spinners, re-orderable to match the
/// locale's field order.
pub trait SpinnerPanel {
    fn reorder(&mut self, order: FieldOrder);
}
