mod cursor;
mod grid;
mod select;
mod view;
mod widget;
pub(crate) use self::cursor::{MonthCursor, NavDirection};
pub(crate) use self::grid::{CalendarCell, MonthGrid};
pub(crate) use self::select::SelectionState;
pub(crate) use self::view::CalendarView;
pub(crate) use self::widget::MonthWidget;
use thiserror::Error;
use time::{Date, Month};

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
pub(crate) struct InvalidDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Validating constructor for dates that originate outside the engine.
/// Rejects months outside 1–12 and days outside the month's real length
/// (leap years included) instead of normalizing them.
pub(crate) fn date_from_ymd(year: i32, month: u8, day: u8) -> Result<Date, InvalidDate> {
    Month::try_from(month)
        .ok()
        .and_then(|m| Date::from_calendar_date(year, m, day).ok())
        .ok_or(InvalidDate { year, month, day })
}
