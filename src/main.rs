mod app;
mod calendar;
mod help;
mod jumpto;
mod theme;
use crate::app::App;
use crate::calendar::CalendarView;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

pub(crate) static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

static USAGE: &str = "\
Usage: moncal [YYYY-MM-DD]

Terminal month-view calendar with keyboard-driven day selection

The optional argument sets the initially selected date; it defaults to
today.

Options:
  -h, --help        Display this help message and exit
  -V, --version     Show the program version and exit";

fn main() -> anyhow::Result<()> {
    match Cli::parse_args(Parser::from_env())? {
        Cli::Run { start } => run(start),
        Cli::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Cli::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run { start: Option<Date> },
    Help,
    Version,
}

impl Cli {
    fn parse_args(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut start = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                Arg::Value(value) if start.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => start = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { start })
    }
}

fn run(start: Option<Date>) -> anyhow::Result<()> {
    let today = OffsetDateTime::now_local()
        .context("failed to determine local date")?
        .date();
    let mut view = CalendarView::new(today);
    if let Some(date) = start {
        view = view.start_date(date);
    }
    with_terminal(|mut terminal| {
        terminal.hide_cursor().context("failed to hide cursor")?;
        App::new(view).run(terminal)?;
        Ok(())
    })
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
