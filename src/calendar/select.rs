use time::Date;

/// The one selected day of a calendar view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SelectionState {
    selected: Date,
}

impl SelectionState {
    pub(crate) fn new(initial: Date) -> SelectionState {
        SelectionState { selected: initial }
    }

    pub(crate) fn selected(&self) -> Date {
        self.selected
    }

    /// Records a day-cell activation.  Returns whether the selection
    /// actually changed, so the host knows to refresh anything keyed on
    /// the selected date.
    pub(crate) fn activate(&mut self, date: Date) -> bool {
        if self.selected == date {
            false
        } else {
            self.selected = date;
            true
        }
    }
}
