use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::HeaderViewModel;

/// Page title, sender identity and the back control.
pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.model.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title(
                Line::from(vec![
                    Span::styled("[b]", Style::default().fg(Color::Yellow)),
                    Span::raw(format!(" ← {} ", self.model.back_label)),
                ])
                .alignment(Alignment::Right),
            );

        let sender = Line::from(vec![
            Span::styled("Sender of this mail - ", Style::default().fg(Color::DarkGray)),
            Span::styled(&self.model.sender_address, Style::default().fg(Color::Cyan)),
        ]);

        Paragraph::new(sender).block(block).render(area, buf);
    }
}
