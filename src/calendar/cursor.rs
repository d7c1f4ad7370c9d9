use time::Month::{self, December, January};

/// One step of month navigation, as delivered by the host's
/// previous/next-month controls.  Larger jumps are not a thing; callers
/// step once per navigation event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    pub(crate) fn opposite(self) -> NavDirection {
        match self {
            NavDirection::Previous => NavDirection::Next,
            NavDirection::Next => NavDirection::Previous,
        }
    }
}

/// The (year, month) pair currently on display.  The month is always a
/// real month; the year is unconstrained.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthCursor {
    year: i32,
    month: Month,
}

impl MonthCursor {
    pub(crate) fn new(year: i32, month: Month) -> MonthCursor {
        MonthCursor { year, month }
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    /// Steps the displayed month forwards or backwards, rolling the year
    /// over at the December/January boundary.  Returns the new
    /// (year, month) for convenience.
    pub(crate) fn advance(&mut self, direction: NavDirection) -> (i32, Month) {
        match direction {
            NavDirection::Next => {
                self.month = self.month.next();
                if self.month == January {
                    self.year += 1;
                }
            }
            NavDirection::Previous => {
                self.month = self.month.previous();
                if self.month == December {
                    self.year -= 1;
                }
            }
        }
        (self.year, self.month)
    }
}
