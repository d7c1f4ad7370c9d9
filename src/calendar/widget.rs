use super::{CalendarCell, CalendarView, MonthGrid};
use crate::theme::{SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE};
use crate::YMD_FMT;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Text,
    widgets::{Paragraph, StatefulWidget, Widget},
};
use time::{Date, Month};

static HEADER: &str = " Mo   Tu   We   Th   Fr   Sa   Su ";

/// Number of columns per day of week
const DAY_WIDTH: u16 = 5;

/// Width of the calendar in columns; the last day column has no trailing
/// gutter
const MAIN_WIDTH: u16 = DAY_WIDTH * 7 - 1;

/// Number of lines taken up by the title, the weekday header, and its rule
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by the grid itself; always six rows, even
/// for months that would fit in five
const GRID_LINES: u16 = 6;

/// Line offset of the status line below the grid
const STATUS_LINE: u16 = HEADER_LINES + GRID_LINES + 1;

const ACS_HLINE: char = '─';

/// Renders a [`CalendarView`] as a month grid with a title, a
/// Monday-first weekday header, and a status line naming the selected
/// date.  The grid itself is rebuilt from scratch on every call; at 42
/// cells that is cheaper than any invalidation scheme.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthWidget;

impl StatefulWidget for MonthWidget {
    type State = CalendarView;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [area] = Layout::horizontal([Constraint::Length(MAIN_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(area);
        let grid = MonthGrid::build(state.cursor(), state.today(), state.selected());
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_title(state.cursor().year(), state.cursor().month());
        canvas.draw_header();
        for (row, cells) in std::iter::zip(0u16.., grid.rows()) {
            for (col, cell) in std::iter::zip(0u16.., cells) {
                if let CalendarCell::Day {
                    date,
                    is_today,
                    is_selected,
                } = *cell
                {
                    canvas.draw_day(row, col, date, is_today, is_selected, state.focus());
                }
            }
        }
        canvas.draw_status(state.selected());
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, year: i32, month: Month) {
        let title = format!("{month} {year}");
        let width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        let x = MAIN_WIDTH.saturating_sub(width) / 2;
        self.mvprint(0, x, title, Some(TITLE_STYLE));
    }

    fn draw_header(&mut self) {
        self.mvprint(1, 0, HEADER, Some(WEEKDAY_STYLE));
        self.hline(2, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(
        &mut self,
        row: u16,
        col: u16,
        date: Date,
        is_today: bool,
        is_selected: bool,
        focus: Date,
    ) {
        let s = if is_today {
            format!("[{:2}]", date.day())
        } else {
            format!(" {:2} ", date.day())
        };
        let mut style = if is_selected {
            SELECTED_STYLE
        } else if is_today {
            TODAY_STYLE
        } else {
            Style::new()
        };
        if date == focus {
            style = style.add_modifier(Modifier::REVERSED);
        }
        self.mvprint(row + HEADER_LINES, DAY_WIDTH * col, s, Some(style));
    }

    fn draw_status(&mut self, selected: Date) {
        let date = selected
            .format(&YMD_FMT)
            .expect("year-month-day formatting of a date should not fail");
        self.mvprint(STATUS_LINE, 0, format!("Selected: {date}"), None);
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond
            // the calendar's area, though we need to be sure that the Rect
            // passed to the Paragraph is entirely within the frame lest a
            // panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
