use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: DisplayOptions) -> Self {
        Self { format, options }
    }

    /// Write the result to `out`. JSON ignores the view mode and always
    /// carries the full view model.
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        let minimal = self.options.mode == ViewMode::Minimal;
        let palette = Palette::new(self.options.enable_color);

        if let Some(badge) = result.badge.as_ref().filter(|_| !minimal) {
            writeln!(out, "{} {}", badge.icon(), palette.bold(&badge.label))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !minimal && !result.suggestions.is_empty() {
            writeln!(out, "\n{}", palette.tip("💡 Tips:"))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", palette.accent(cmd))?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_tier;

    fn render(format: OutputFormat, mode: ViewMode) -> String {
        let renderer = ConsoleRenderer::new(
            format,
            DisplayOptions {
                mode,
                enable_color: false,
            },
        );
        let mut out = Vec::new();
        renderer.render_to(&mut out, &present_tier(0.92)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output_has_badge() {
        let text = render(OutputFormat::Text, ViewMode::Standard);
        assert!(text.starts_with("✅ high\n\n"));
        assert!(text.contains("Tier:     high"));
    }

    #[test]
    fn test_minimal_output_skips_badge() {
        assert_eq!(render(OutputFormat::Text, ViewMode::Minimal), "high\n");
    }

    #[test]
    fn test_json_output_ignores_view_mode() {
        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, ViewMode::Minimal)).unwrap();

        assert_eq!(json["badge"]["level"], "success");
        assert_eq!(json["content"]["tier"], "high");
        assert_eq!(json["content"]["solid"], "#10b981");
        assert_eq!(json["content"]["score"], 0.92);
        assert!(json.get("suggestions").is_none());
    }
}
