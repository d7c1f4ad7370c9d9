use super::MonthCursor;
use time::Date;

const WEEK_COLUMNS: usize = 7;
const GRID_ROWS: usize = 6;
const GRID_CELLS: usize = WEEK_COLUMNS * GRID_ROWS;

/// One of the 42 fixed positions of a month layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CalendarCell {
    Blank,
    Day {
        date: Date,
        is_today: bool,
        is_selected: bool,
    },
}

/// A month laid out as a fixed 6×7 grid, row-major with Monday-first
/// columns.  Short months keep their trailing blank rows so the grid
/// height is constant for the renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid([CalendarCell; GRID_CELLS]);

impl MonthGrid {
    /// Lays out the cursor's month.  Pure: identical inputs yield an
    /// identical grid, and nothing is cached between calls.
    ///
    /// # Panics
    ///
    /// Panics if the cursor's year is outside the range `time` can
    /// represent.
    pub(crate) fn build(cursor: &MonthCursor, today: Date, selected: Date) -> MonthGrid {
        let (year, month) = (cursor.year(), cursor.month());
        let first = Date::from_calendar_date(year, month, 1)
            .expect("the first of a displayed month should be a representable date");
        let leading_blanks = usize::from(first.weekday().number_days_from_monday());
        let mut cells = [CalendarCell::Blank; GRID_CELLS];
        let mut day = 1;
        for cell in cells
            .iter_mut()
            .skip(leading_blanks)
            .take(usize::from(month.length(year)))
        {
            let date = Date::from_calendar_date(year, month, day)
                .expect("day numbers up to the month's length should be valid");
            *cell = CalendarCell::Day {
                date,
                is_today: date == today,
                is_selected: date == selected,
            };
            day += 1;
        }
        MonthGrid(cells)
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = CalendarCell> + '_ {
        self.0.iter().copied()
    }

    /// The six rows of the grid, top to bottom.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.0.chunks(WEEK_COLUMNS)
    }
}
