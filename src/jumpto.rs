use crate::calendar::date_from_ymd;
use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

const OUTER_WIDTH: u16 = 17;
const OUTER_HEIGHT: u16 = 8;

/// Digit slots: four for the year, two for the month, two for the day
const DIGITS: usize = 8;
const YEAR_DIGITS: usize = 4;
const MONTH_DIGITS: usize = 2;

/// Slot index at which the entry is complete and ENTER commits it
const ENTER_POS: usize = DIGITS;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * .................
     * .┌─ Jump To… ──┐.
     * .│             │.
     * .│ -YYYY-MM-DD │.
     * .│             │.
     * .│   [ENTER]   │.
     * .└─────────────┘.
     * .................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Jump To… ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

/// Entry state for the jump-to overlay: an optional sign plus eight digit
/// slots filled strictly left to right.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    negative: bool,
    digits: [Option<u8>; DIGITS],
    pos: usize,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn to_text(self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Style a span and convert it to a line rather than creating a
            // styled line directly so that only the "[ENTER]" text and not
            // any of its centering padding will be underlined:
            Line::from(Span::styled(
                "[ENTER]",
                if self.pos == ENTER_POS {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(self) -> Line<'static> {
        let mut spans = Vec::new();
        spans.push(Span::styled(
            if self.negative { "-" } else { " " },
            BASE_STYLE,
        ));
        let (year, rest) = self.digits.split_at(YEAR_DIGITS);
        let (month, day) = rest.split_at(MONTH_DIGITS);
        let mut first = true;
        for (fallback, digits) in [("Y", year), ("M", month), ("D", day)] {
            if !std::mem::replace(&mut first, false) {
                spans.push(Span::styled("-", BASE_STYLE));
            }
            for dg in digits {
                spans.push(match dg {
                    Some(d) => Span::styled(format!("{d}"), BASE_STYLE),
                    None => Span::styled(fallback, UNFILLED_CELL_STYLE),
                });
            }
        }
        Line::from_iter(spans)
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match (input, self.pos) {
            (JumpToInput::Negative, 0) => {
                self.negative = !self.negative;
                JumpToOutput::Ok
            }
            (JumpToInput::Positive, 0) => {
                self.negative = false;
                JumpToOutput::Ok
            }
            (JumpToInput::Digit(d), 0..ENTER_POS) => {
                self.digits[self.pos] = Some(d);
                self.pos += 1;
                JumpToOutput::Ok
            }
            (JumpToInput::Backspace, 1..) => {
                self.pos -= 1;
                self.digits[self.pos] = None;
                JumpToOutput::Ok
            }
            (JumpToInput::Enter, ENTER_POS) => {
                let filled = |dg: &Option<u8>| dg.expect("all digit slots are filled at ENTER_POS");
                let (year, rest) = self.digits.split_at(YEAR_DIGITS);
                let (month, day) = rest.split_at(MONTH_DIGITS);
                let mut y = 0i32;
                for dg in year {
                    y = y * 10 + i32::from(filled(dg));
                }
                if self.negative {
                    y *= -1;
                }
                let fold_u8 = |digits: &[Option<u8>]| digits.iter().fold(0u8, |n, dg| n * 10 + filled(dg));
                match date_from_ymd(y, fold_u8(month), fold_u8(day)) {
                    Ok(date) => JumpToOutput::Jump(date),
                    Err(_) => JumpToOutput::Invalid,
                }
            }
            _ => JumpToOutput::Invalid,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Negative,
    Positive,
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(time::Date),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn enter_digits(state: &mut JumpToState, digits: &[u8]) {
        for &d in digits {
            assert_eq!(state.handle_input(JumpToInput::Digit(d)), JumpToOutput::Ok);
        }
    }

    #[test]
    fn test_full_entry_jumps() {
        let mut state = JumpToState::new();
        enter_digits(&mut state, &[2, 0, 2, 4, 0, 2, 2, 9]);
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(2024 - 02 - 29))
        );
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let mut state = JumpToState::new();
        enter_digits(&mut state, &[2, 0, 2, 3, 0, 2, 2, 9]);
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Invalid
        );
    }

    #[test]
    fn test_enter_requires_all_digits() {
        let mut state = JumpToState::new();
        enter_digits(&mut state, &[2, 0, 2, 4]);
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Invalid
        );
    }

    #[test]
    fn test_backspace_reopens_slot() {
        let mut state = JumpToState::new();
        enter_digits(&mut state, &[2, 0, 2, 4, 0, 2, 2, 9]);
        assert_eq!(
            state.handle_input(JumpToInput::Backspace),
            JumpToOutput::Ok
        );
        enter_digits(&mut state, &[8]);
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(2024 - 02 - 28))
        );
    }
}
