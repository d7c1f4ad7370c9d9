use crate::calendar::{CalendarView, MonthWidget, NavDirection};
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    view: CalendarView,
    state: AppState,
}

impl App {
    pub(crate) fn new(view: CalendarView) -> App {
        App {
            view,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.view.focus_previous_day(),
                KeyCode::Char('l') | KeyCode::Right => self.view.focus_next_day(),
                KeyCode::Char('k') | KeyCode::Up => self.view.focus_previous_week(),
                KeyCode::Char('j') | KeyCode::Down => self.view.focus_next_week(),
                KeyCode::Char('w') | KeyCode::PageUp => {
                    self.view.flip_month(NavDirection::Previous)
                }
                KeyCode::Char('z') | KeyCode::PageDown => self.view.flip_month(NavDirection::Next),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    // The return value only tells us whether the selection
                    // moved; either way the next draw reflects it.
                    self.view.activate_focused();
                    true
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    self.view.go_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c @ '0'..='9') => {
                            let d = c
                                .to_digit(10)
                                .and_then(|d| u8::try_from(d).ok())
                                .unwrap_or_default();
                            state.handle_input(JumpToInput::Digit(d))
                        }
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(date) => {
                            self.state = AppState::Calendar;
                            self.view.jump_to(date);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        MonthWidget.render(area, buf, &mut self.view);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE};
    use ratatui::style::Modifier;
    use time::macros::date;

    #[test]
    fn test_render_january_2024() {
        let view = CalendarView::new(date!(2024 - 01 - 15)).start_date(date!(2024 - 01 - 22));
        let mut app = App::new(view);
        let area = Rect::new(0, 0, 40, 12);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "              January 2024              ",
            "    Mo   Tu   We   Th   Fr   Sa   Su    ",
            "   ──────────────────────────────────   ",
            "     1    2    3    4    5    6    7    ",
            "     8    9   10   11   12   13   14    ",
            "   [15]  16   17   18   19   20   21    ",
            "    22   23   24   25   26   27   28    ",
            "    29   30   31                        ",
            "                                        ",
            "                                        ",
            "   Selected: 2024-01-22                 ",
            "                                        ",
        ]);
        expected.set_style(*expected.area(), BASE_STYLE);
        expected.set_style(Rect::new(14, 0, 12, 1), TITLE_STYLE);
        expected.set_style(Rect::new(3, 1, 34, 1), WEEKDAY_STYLE);
        expected.set_style(Rect::new(3, 5, 4, 1), TODAY_STYLE);
        expected.set_style(
            Rect::new(3, 6, 4, 1),
            SELECTED_STYLE.add_modifier(Modifier::REVERSED),
        );
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_draw_on_test_backend() {
        let view = CalendarView::new(date!(2024 - 01 - 15));
        let mut app = App::new(view);
        let backend = ratatui::backend::TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        app.draw(&mut terminal).unwrap();
        let buffer = terminal.backend().buffer();
        let mut title = String::new();
        for x in 14u16..26 {
            title.push_str(buffer[(x, 0)].symbol());
        }
        assert_eq!(title, "January 2024");
    }

    #[test]
    fn test_page_down_changes_month() {
        let view = CalendarView::new(date!(2024 - 01 - 15));
        let mut app = App::new(view);
        assert!(app.handle_key(KeyCode::PageDown));
        let area = Rect::new(0, 0, 40, 12);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        let mut title = String::new();
        for x in 13u16..26 {
            title.push_str(buffer[(x, 0)].symbol());
        }
        assert_eq!(title, "February 2024");
    }

    #[test]
    fn test_enter_selects_focused_day() {
        let view = CalendarView::new(date!(2024 - 01 - 15));
        let mut app = App::new(view);
        assert!(app.handle_key(KeyCode::Right));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.view.selected(), date!(2024 - 01 - 16));
    }

    #[test]
    fn test_jump_overlay_moves_view() {
        let view = CalendarView::new(date!(2024 - 01 - 15));
        let mut app = App::new(view);
        assert!(app.handle_key(KeyCode::Char('g')));
        for c in "19991231".chars() {
            assert!(app.handle_key(KeyCode::Char(c)));
        }
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Calendar);
        assert_eq!(app.view.selected(), date!(1999 - 12 - 31));
    }

    #[test]
    fn test_quit_keys() {
        let view = CalendarView::new(date!(2024 - 01 - 15));
        let mut app = App::new(view);
        assert!(!app.quitting());
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
    }
}
