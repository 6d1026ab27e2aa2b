//! Ratatui widgets for the interactive results page.
//!
//! Each view borrows its view model and only maps it to widgets. Focus and
//! scroll position come from the component that owns them.

pub mod cards;
pub mod components;
pub mod confidence;
pub mod header;
pub mod status_bar;

pub use cards::{CardView, FieldRowView, SummaryCardsView};
pub use confidence::ConfidenceBarView;
pub use header::HeaderView;
pub use status_bar::StatusBarView;

use inboxlens_types::ColorToken;
use ratatui::style::Color;

use crate::presentation::view_models::StatusLevel;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn token_color(token: ColorToken) -> Color {
    Color::Rgb(token.r, token.g, token.b)
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
