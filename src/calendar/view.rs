use super::{MonthCursor, NavDirection, SelectionState};
use time::{Date, Duration};

/// Per-view calendar state: the displayed month, the selected day, and a
/// focused day standing in for the pointer.  Owned by a single host view;
/// nothing here is shared or cached across frames.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarView {
    today: Date,
    cursor: MonthCursor,
    selection: SelectionState,
    focus: Date,
}

impl CalendarView {
    pub(crate) fn new(today: Date) -> CalendarView {
        CalendarView {
            today,
            cursor: MonthCursor::new(today.year(), today.month()),
            selection: SelectionState::new(today),
            focus: today,
        }
    }

    /// Overrides the initially selected & focused date, pointing the
    /// displayed month at it.
    pub(crate) fn start_date(mut self, date: Date) -> CalendarView {
        self.cursor = MonthCursor::new(date.year(), date.month());
        self.selection = SelectionState::new(date);
        self.focus = date;
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn cursor(&self) -> &MonthCursor {
        &self.cursor
    }

    pub(crate) fn selected(&self) -> Date {
        self.selection.selected()
    }

    pub(crate) fn focus(&self) -> Date {
        self.focus
    }

    /// Flips to the previous/next month, clamping the focused day number
    /// to the new month's length.  Returns `false` without moving if that
    /// would leave the range `time` can represent.
    pub(crate) fn flip_month(&mut self, direction: NavDirection) -> bool {
        let (year, month) = self.cursor.advance(direction);
        let day = self.focus.day().min(month.length(year));
        match Date::from_calendar_date(year, month, day) {
            Ok(date) => {
                self.focus = date;
                true
            }
            Err(_) => {
                self.cursor.advance(direction.opposite());
                false
            }
        }
    }

    pub(crate) fn focus_next_day(&mut self) -> bool {
        self.move_focus(Duration::days(1))
    }

    pub(crate) fn focus_previous_day(&mut self) -> bool {
        self.move_focus(Duration::days(-1))
    }

    pub(crate) fn focus_next_week(&mut self) -> bool {
        self.move_focus(Duration::weeks(1))
    }

    pub(crate) fn focus_previous_week(&mut self) -> bool {
        self.move_focus(Duration::weeks(-1))
    }

    // Crossing a month boundary drags the displayed month along with the
    // focus.
    fn move_focus(&mut self, delta: Duration) -> bool {
        let Some(date) = self.focus.checked_add(delta) else {
            return false;
        };
        self.focus = date;
        if (date.year(), date.month()) != (self.cursor.year(), self.cursor.month()) {
            self.cursor = MonthCursor::new(date.year(), date.month());
        }
        true
    }

    /// Selects the focused day.  Returns whether the selection changed.
    pub(crate) fn activate_focused(&mut self) -> bool {
        self.selection.activate(self.focus)
    }

    /// Points the view at `date` and selects it.  Used by the jump-to
    /// overlay, where the date has already been validated.
    pub(crate) fn jump_to(&mut self, date: Date) {
        self.cursor = MonthCursor::new(date.year(), date.month());
        self.focus = date;
        self.selection.activate(date);
    }

    /// Brings the displayed month and the focus back to today, leaving
    /// the selection alone.
    pub(crate) fn go_today(&mut self) {
        self.cursor = MonthCursor::new(self.today.year(), self.today.month());
        self.focus = self.today;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month::{February, January, March};

    #[test]
    fn test_focus_across_month_end() {
        let mut view = CalendarView::new(date!(2024 - 01 - 31));
        assert!(view.focus_next_day());
        assert_eq!(view.focus(), date!(2024 - 02 - 01));
        assert_eq!(
            (view.cursor().year(), view.cursor().month()),
            (2024, February)
        );
    }

    #[test]
    fn test_focus_back_across_month_start() {
        let mut view = CalendarView::new(date!(2024 - 03 - 03));
        assert!(view.focus_previous_week());
        assert_eq!(view.focus(), date!(2024 - 02 - 25));
        assert_eq!(
            (view.cursor().year(), view.cursor().month()),
            (2024, February)
        );
    }

    #[test]
    fn test_flip_month_clamps_focus() {
        let mut view = CalendarView::new(date!(2024 - 01 - 31));
        assert!(view.flip_month(NavDirection::Next));
        assert_eq!(view.focus(), date!(2024 - 02 - 29));
        assert!(view.flip_month(NavDirection::Next));
        assert_eq!(view.focus(), date!(2024 - 03 - 29));
        assert_eq!((view.cursor().year(), view.cursor().month()), (2024, March));
    }

    #[test]
    fn test_flip_month_leaves_selection_alone() {
        let mut view = CalendarView::new(date!(2024 - 01 - 15));
        assert!(view.flip_month(NavDirection::Previous));
        assert_eq!(view.selected(), date!(2024 - 01 - 15));
        assert_eq!(
            (view.cursor().year(), view.cursor().month()),
            (2023, time::Month::December)
        );
    }

    #[test]
    fn test_activate_focused_reports_changes() {
        let mut view = CalendarView::new(date!(2024 - 01 - 15));
        assert!(view.focus_next_day());
        assert!(view.activate_focused());
        assert!(!view.activate_focused());
        assert_eq!(view.selected(), date!(2024 - 01 - 16));
    }

    #[test]
    fn test_jump_to_selects() {
        let mut view = CalendarView::new(date!(2024 - 01 - 15));
        view.jump_to(date!(1999 - 12 - 31));
        assert_eq!(view.selected(), date!(1999 - 12 - 31));
        assert_eq!(view.focus(), date!(1999 - 12 - 31));
        assert_eq!(
            (view.cursor().year(), view.cursor().month()),
            (1999, time::Month::December)
        );
    }

    #[test]
    fn test_go_today() {
        let mut view = CalendarView::new(date!(2024 - 01 - 15));
        view.jump_to(date!(2020 - 06 - 01));
        view.go_today();
        assert_eq!(view.focus(), date!(2024 - 01 - 15));
        assert_eq!(
            (view.cursor().year(), view.cursor().month()),
            (2024, January)
        );
        assert_eq!(view.selected(), date!(2020 - 06 - 01));
    }

    #[test]
    fn test_start_date() {
        let view = CalendarView::new(date!(2024 - 01 - 15)).start_date(date!(2024 - 03 - 08));
        assert_eq!(view.today(), date!(2024 - 01 - 15));
        assert_eq!(view.selected(), date!(2024 - 03 - 08));
        assert_eq!((view.cursor().year(), view.cursor().month()), (2024, March));
    }
}
