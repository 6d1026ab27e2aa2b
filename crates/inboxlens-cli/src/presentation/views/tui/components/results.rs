//! Results page component.
//!
//! Owns the focus and field scroll position. Copy, back and quit go up to the
//! renderer as [`ResultsAction`]s; everything else stays local.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::presentation::view_models::{ResultsViewModel, StatusLevel};
use crate::presentation::views::tui::cards::visible_field_cards;
use crate::presentation::views::tui::{
    ConfidenceBarView, FieldRowView, HeaderView, StatusBarView, SummaryCardsView,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsAction {
    /// Copy a value captured from the focused card.
    Copy { title: String, value: String },
    Back,
    Quit,
}

pub struct ResultsComponent {
    /// Index into summary cards followed by field cards.
    focus: usize,
    /// First visible field card.
    field_offset: usize,
    /// Field cards that fit on screen at the last render.
    field_capacity: usize,
    status: Option<(StatusLevel, String)>,
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self {
            focus: 0,
            field_offset: 0,
            field_capacity: 1,
            status: None,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn field_offset(&self) -> usize {
        self.field_offset
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(_, message)| message.as_str())
    }

    pub fn handle_input(&mut self, key: KeyEvent, data: &ResultsViewModel) -> Option<ResultsAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(ResultsAction::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(ResultsAction::Quit),
            KeyCode::Char('b') | KeyCode::Backspace => Some(ResultsAction::Back),
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                self.focus_next(data.card_count());
                None
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                self.focus_previous(data.card_count());
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.scroll_right(data.fields.len());
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.field_offset = self.field_offset.saturating_sub(1);
                None
            }
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => self.copy_focused(data),
            _ => None,
        }
    }

    /// Layout: header, summary cards, field row (when there are fields),
    /// confidence bar, status bar.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &ResultsViewModel) {
        self.clamp_to(data);

        let field_height = if data.fields.is_empty() { 0 } else { 6 };
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(field_height),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

        f.render_widget(HeaderView::new(&data.header), chunks[0]);

        let summary_len = data.summary.len();
        let summary_focus = (self.focus < summary_len).then_some(self.focus);
        f.render_widget(
            SummaryCardsView::new(&data.summary).focused(summary_focus),
            chunks[1],
        );

        if !data.fields.is_empty() {
            self.field_capacity = visible_field_cards(chunks[2].width.saturating_sub(2));
            let field_focus = self.focus.checked_sub(summary_len);
            if let Some(index) = field_focus {
                self.reveal_field(index);
            }
            f.render_widget(
                FieldRowView::new(&data.fields)
                    .offset(self.field_offset)
                    .focused(field_focus),
                chunks[2],
            );
        }

        f.render_widget(ConfidenceBarView::new(&data.confidence), chunks[3]);

        let focused_title = data
            .copyable_cards()
            .nth(self.focus)
            .map(|card| card.title.clone())
            .unwrap_or_default();
        let (level, message) = match &self.status {
            Some((level, message)) => (*level, message.clone()),
            None => (StatusLevel::Info, format!("Focus: {}", focused_title)),
        };
        f.render_widget(StatusBarView::new(&message, level), chunks[5]);
    }

    fn copy_focused(&mut self, data: &ResultsViewModel) -> Option<ResultsAction> {
        let card = data.copyable_cards().nth(self.focus)?;
        self.status = Some((StatusLevel::Success, format!("Copied {}", card.title)));
        Some(ResultsAction::Copy {
            title: card.title.clone(),
            value: card.value.clone(),
        })
    }

    fn focus_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.focus = (self.focus + 1) % count;
        self.status = None;
    }

    fn focus_previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.focus = (self.focus + count - 1) % count;
        self.status = None;
    }

    fn scroll_right(&mut self, field_count: usize) {
        let max_offset = field_count.saturating_sub(self.field_capacity);
        self.field_offset = (self.field_offset + 1).min(max_offset);
    }

    /// Scroll so the focused field card is on screen.
    fn reveal_field(&mut self, index: usize) {
        if index < self.field_offset {
            self.field_offset = index;
        } else if index >= self.field_offset + self.field_capacity {
            self.field_offset = index + 1 - self.field_capacity;
        }
    }

    fn clamp_to(&mut self, data: &ResultsViewModel) {
        self.focus = self.focus.min(data.card_count().saturating_sub(1));
        self.field_offset = self.field_offset.min(data.fields.len().saturating_sub(1));
    }
}

impl Default for ResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}
