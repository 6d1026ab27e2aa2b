use std::fmt;

use inboxlens_types::Gradient;

use crate::presentation::formatters::{
    Palette, bar_ratio, capitalize_words, format_percent, single_line,
};
use crate::presentation::view_models::{
    CardViewModel, ConfidenceViewModel, CreateView, DisplayOptions, ResultsViewModel, ViewMode,
};

const DEFAULT_BAR_WIDTH: usize = 40;
const MIN_BAR_WIDTH: usize = 10;

impl CreateView for ResultsViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ResultsView::new(self, options))
    }
}

pub struct ResultsView<'a> {
    data: &'a ResultsViewModel,
    options: DisplayOptions,
    palette: Palette,
}

impl<'a> ResultsView<'a> {
    pub fn new(data: &'a ResultsViewModel, options: DisplayOptions) -> Self {
        Self {
            data,
            options,
            palette: Palette::new(options.enable_color),
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "sender\t{}", self.data.header.sender_address)?;
        for card in self.data.copyable_cards() {
            writeln!(f, "{}\t{}", card.target, single_line(&card.value))?;
        }
        writeln!(f, "confidence\t{}", self.data.confidence.score)
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Sender: {}", self.data.header.sender_address)?;
        for card in &self.data.summary {
            writeln!(f, "{}: {}", card.title, single_line(&card.value))?;
        }
        for card in &self.data.fields {
            writeln!(f, "{}: {}", capitalize_words(&card.title), single_line(&card.value))?;
        }
        let confidence = &self.data.confidence;
        writeln!(
            f,
            "Confidence: {} ({})",
            self.palette.token(&format_percent(confidence.percent), confidence.solid),
            confidence.tier
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = &self.palette;
        let header = &self.data.header;

        writeln!(f, "{}", p.heading(&header.title))?;
        writeln!(
            f,
            "{} {}",
            p.dim("Sender of this mail -"),
            p.accent(&header.sender_address)
        )?;
        writeln!(f)?;

        let width = label_width(&self.data.summary, |card| card.title.clone());
        for card in &self.data.summary {
            write_card(f, p, &card.title, &card.value, width, "")?;
        }

        if !self.data.fields.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", p.heading("Extracted Details"))?;
            let width = label_width(&self.data.fields, |card| capitalize_words(&card.title));
            for card in &self.data.fields {
                write_card(f, p, &capitalize_words(&card.title), &card.value, width, "  ")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", p.heading("Confidence Level"))?;
        self.render_confidence(f)?;

        if self.options.mode == ViewMode::Verbose {
            let confidence = &self.data.confidence;
            writeln!(f)?;
            writeln!(f, "{}", p.dim(&format!("score:    {}", confidence.score)))?;
            writeln!(f, "{}", p.dim(&format!("solid:    {}", confidence.solid)))?;
            writeln!(f, "{}", p.dim(&format!("gradient: {}", confidence.gradient)))?;
            writeln!(f, "{}", p.dim(&format!("origin:   {}", self.data.origin.as_str())))?;
        }

        Ok(())
    }

    fn render_confidence(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let confidence: &ConfidenceViewModel = &self.data.confidence;
        let bar = gradient_bar(
            bar_ratio(confidence.score),
            bar_width(),
            &confidence.gradient,
            &self.palette,
        );
        writeln!(
            f,
            "  {}  {} {}",
            bar,
            self.palette.token(&format_percent(confidence.percent), confidence.solid),
            self.palette.dim(&format!("({})", confidence.tier))
        )
    }
}

impl<'a> fmt::Display for ResultsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_standard(f),
        }
    }
}

fn label_width(cards: &[CardViewModel], label: impl Fn(&CardViewModel) -> String) -> usize {
    cards
        .iter()
        .map(|card| label(card).chars().count())
        .max()
        .unwrap_or(0)
}

fn write_card(
    f: &mut fmt::Formatter,
    palette: &Palette,
    label: &str,
    value: &str,
    width: usize,
    indent: &str,
) -> fmt::Result {
    let padding = width.saturating_sub(label.chars().count());
    writeln!(
        f,
        "{}{}{}   {}",
        indent,
        palette.bold(label),
        " ".repeat(padding),
        single_line(value)
    )
}

fn bar_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| {
            usize::from(w)
                .saturating_sub(30)
                .clamp(MIN_BAR_WIDTH, DEFAULT_BAR_WIDTH)
        })
        .unwrap_or(DEFAULT_BAR_WIDTH)
}

/// Horizontal bar with `ratio` of `width` cells filled. The gradient spans the
/// filled part only.
pub fn gradient_bar(ratio: f64, width: usize, gradient: &Gradient, palette: &Palette) -> String {
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let mut bar = String::new();

    for i in 0..filled {
        let t = if filled > 1 {
            i as f64 / (filled - 1) as f64
        } else {
            0.0
        };
        bar.push_str(&palette.token("█", gradient.at(t)));
    }

    bar.push_str(&palette.dim(&"░".repeat(width - filled)));
    bar
}
