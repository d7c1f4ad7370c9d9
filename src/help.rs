use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::Flex,
    layout::{Alignment, Layout, Rect},
    widgets::{Block, Clear, Paragraph, Widget},
};

static TEXT: &str = "\
h, LEFT         Focus the previous day
l, RIGHT        Focus the next day
k, UP           Focus one week back
j, DOWN         Focus one week ahead
w, PAGE UP      Show the previous month
z, PAGE DOWN    Show the next month
ENTER, SPACE    Select the focused day
0, HOME         Go back to today
g               Input date to jump to
?               Show this help
q, ESC          Quit

Press the Any Key to dismiss.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help;

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let para = Paragraph::new(TEXT)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE);
        let height = u16::try_from(TEXT.lines().count())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let width = u16::try_from(TEXT.lines().map(str::len).max().unwrap_or_default())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.width);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        para.render(help_area, buf);
    }
}
