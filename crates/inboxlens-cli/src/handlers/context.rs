use crate::args::{OutputFormat, ViewModeArgs};
use crate::config::{ColorMode, Config};
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DisplayOptions};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::source::ResolveOptions;
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Settings shared by every handler.
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
    pub resolve: ResolveOptions,
}

impl HandlerContext {
    pub fn new(
        config: &Config,
        format: OutputFormat,
        view_mode: &ViewModeArgs,
        strict: bool,
        no_color: bool,
    ) -> Self {
        let enable_color = color_enabled(
            config.display.color,
            no_color,
            std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
            std::io::stdout().is_terminal(),
        );

        Self {
            format,
            options: DisplayOptions {
                mode: view_mode.resolve(),
                enable_color,
            },
            resolve: ResolveOptions {
                strict,
                clamp_confidence: config.confidence.clamp,
            },
        }
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.options);
        renderer.render(view_model)
    }
}

/// `--no-color` and `NO_COLOR` always win; `auto` colors only a terminal.
pub fn color_enabled(mode: ColorMode, no_color_flag: bool, no_color_env: bool, is_tty: bool) -> bool {
    if no_color_flag || no_color_env {
        return false;
    }

    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty,
    }
}
