use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{capitalize_words, truncate};
use crate::presentation::view_models::CardViewModel;

/// Width of one dynamic field card, borders included.
pub const FIELD_CARD_WIDTH: u16 = 28;

/// How many field cards fit side by side in `width` columns (at least one).
pub fn visible_field_cards(width: u16) -> usize {
    usize::from((width / FIELD_CARD_WIDTH).max(1))
}

/// One copyable card: title in the border, value inside.
pub struct CardView<'a> {
    title: String,
    value: &'a str,
    focused: bool,
}

impl<'a> CardView<'a> {
    pub fn new(title: impl Into<String>, value: &'a str) -> Self {
        Self {
            title: title.into(),
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for CardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title_width = usize::from(area.width.saturating_sub(4));
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(
                format!(" {} ", truncate(&self.title, title_width)),
                Style::default().fg(Color::Gray),
            ));

        if self.focused {
            block = block.title_bottom(
                Line::from(Span::styled(" [c] copy ", Style::default().fg(Color::Yellow)))
                    .alignment(Alignment::Right),
            );
        }

        Paragraph::new(self.value)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// The three fixed summary cards, side by side.
pub struct SummaryCardsView<'a> {
    cards: &'a [CardViewModel],
    focused: Option<usize>,
}

impl<'a> SummaryCardsView<'a> {
    pub fn new(cards: &'a [CardViewModel]) -> Self {
        Self {
            cards,
            focused: None,
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }
}

impl<'a> Widget for SummaryCardsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() {
            return;
        }

        let count = self.cards.len() as u32;
        let constraints = self.cards.iter().map(|_| Constraint::Ratio(1, count));
        let chunks = Layout::horizontal(constraints).split(area);

        for (i, (card, chunk)) in self.cards.iter().zip(chunks.iter()).enumerate() {
            CardView::new(card.title.as_str(), &card.value)
                .focused(self.focused == Some(i))
                .render(*chunk, buf);
        }
    }
}

/// Horizontally scrollable row of dynamic field cards.
pub struct FieldRowView<'a> {
    fields: &'a [CardViewModel],
    offset: usize,
    focused: Option<usize>,
}

impl<'a> FieldRowView<'a> {
    pub fn new(fields: &'a [CardViewModel]) -> Self {
        Self {
            fields,
            offset: 0,
            focused: None,
        }
    }

    /// Index of the first visible card.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Index into `fields` of the focused card, if any.
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }
}

impl<'a> Widget for FieldRowView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Extracted Details ",
                Style::default().add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        let capacity = visible_field_cards(inner.width);
        let offset = self.offset.min(self.fields.len().saturating_sub(1));
        let end = (offset + capacity).min(self.fields.len());

        let more = Style::default().fg(Color::DarkGray);
        if offset > 0 {
            block = block.title_bottom(Line::from(Span::styled(" ◀ more ", more)));
        }
        if end < self.fields.len() {
            block = block.title_bottom(
                Line::from(Span::styled(" more ▶ ", more)).alignment(Alignment::Right),
            );
        }
        block.render(area, buf);

        for (slot, index) in (offset..end).enumerate() {
            let card = &self.fields[index];
            let x = inner.x + slot as u16 * FIELD_CARD_WIDTH;
            let width = FIELD_CARD_WIDTH.min(inner.right().saturating_sub(x));
            let card_area = Rect::new(x, inner.y, width, inner.height);

            CardView::new(capitalize_words(&card.title), &card.value)
                .focused(self.focused == Some(index))
                .render(card_area, buf);
        }
    }
}
