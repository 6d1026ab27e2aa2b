use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::presentation::formatters::{bar_ratio, format_percent};
use crate::presentation::view_models::ConfidenceViewModel;

use super::token_color;

/// Confidence bar filled left to right with the tier gradient, followed by
/// the percent label.
pub struct ConfidenceBarView<'a> {
    model: &'a ConfidenceViewModel,
}

impl<'a> ConfidenceBarView<'a> {
    pub fn new(model: &'a ConfidenceViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ConfidenceBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            " Confidence Level ",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let label = format!(" {} ({})", format_percent(self.model.percent), self.model.tier);
        let label_width = label.chars().count() as u16;
        let bar_width = inner.width.saturating_sub(label_width);
        let filled = (bar_ratio(self.model.score) * f64::from(bar_width)).round() as u16;

        for offset in 0..bar_width {
            let Some(cell) = buf.cell_mut((inner.x + offset, inner.y)) else {
                continue;
            };

            if offset < filled {
                let t = if filled > 1 {
                    f64::from(offset) / f64::from(filled - 1)
                } else {
                    0.0
                };
                cell.set_symbol("█")
                    .set_fg(token_color(self.model.gradient.at(t)));
            } else {
                cell.set_symbol("░").set_fg(Color::DarkGray);
            }
        }

        let label_area = Rect::new(inner.x + bar_width, inner.y, inner.width - bar_width, 1);
        Line::from(Span::styled(
            label,
            Style::default()
                .fg(token_color(self.model.solid))
                .add_modifier(Modifier::BOLD),
        ))
        .render(label_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_confidence;
    use crate::presentation::views::tui::buffer_text;

    fn render(score: f64, width: u16) -> Buffer {
        let model = present_confidence(score);
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        ConfidenceBarView::new(&model).render(area, &mut buf);
        buf
    }

    fn bar_row(buf: &Buffer) -> String {
        buffer_text(buf).lines().nth(1).unwrap_or_default().to_string()
    }

    #[test]
    fn test_half_filled_bar() {
        // inner width 38, label " 50.00% (low)" is 13 wide, bar is 25 cells
        let row = bar_row(&render(0.5, 40));
        assert_eq!(row.matches('█').count(), 13);
        assert_eq!(row.matches('░').count(), 12);
        assert!(row.contains("50.00% (low)"));
    }

    #[test]
    fn test_out_of_range_fill_is_bounded() {
        let row = bar_row(&render(92.0, 60));
        assert_eq!(row.matches('░').count(), 0);
        assert!(row.contains("9200.00% (high)"));

        let row = bar_row(&render(-0.4, 60));
        assert_eq!(row.matches('█').count(), 0);
    }

    #[test]
    fn test_fill_uses_gradient_endpoints() {
        let buf = render(1.0, 40);
        let model = present_confidence(1.0);

        let first = buf.cell((1, 1)).unwrap();
        assert_eq!(first.fg, token_color(model.gradient.from));

        // " 100.00% (high)" is 15 wide; last filled cell is at x = 1 + 23 - 1
        let last = buf.cell((23, 1)).unwrap();
        assert_eq!(last.fg, token_color(model.gradient.to));
    }
}
