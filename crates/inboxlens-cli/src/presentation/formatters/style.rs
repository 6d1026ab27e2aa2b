use inboxlens_types::ColorToken;
use owo_colors::OwoColorize;

/// Applies styling only when color is enabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn tip(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn token(&self, text: &str, color: ColorToken) -> String {
        if self.enabled {
            text.truecolor(color.r, color.g, color.b).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_palette_is_plain() {
        let palette = Palette::new(false);
        assert_eq!(palette.bold("x"), "x");
        assert_eq!(palette.token("x", ColorToken::rgb(1, 2, 3)), "x");
    }

    #[test]
    fn test_enabled_palette_emits_truecolor() {
        let palette = Palette::new(true);
        let styled = palette.token("█", ColorToken::rgb(0x10, 0xb9, 0x81));
        assert!(styled.contains("38;2;16;185;129"));
    }
}
