use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusLevel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    message: &'a str,
    level: StatusLevel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(message: &'a str, level: StatusLevel) -> Self {
        Self { message, level }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(inner);

        let status = Line::from(Span::styled(
            self.message,
            Style::default().fg(status_level_to_color(self.level)),
        ));
        Paragraph::new(status).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help = Line::from(vec![
            Span::styled("[Tab]", key),
            Span::raw("focus "),
            Span::styled("[c]", key),
            Span::raw("copy "),
            Span::styled("[←/→]", key),
            Span::raw("scroll "),
            Span::styled("[b]", key),
            Span::raw("ack "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
