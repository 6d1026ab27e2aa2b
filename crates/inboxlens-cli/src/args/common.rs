use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct PayloadArgs {
    #[arg(
        value_name = "PAYLOAD",
        help = "Classification JSON file, or '-' for stdin [default: stdin when piped]"
    )]
    pub payload: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (tab-separated values, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Compact output (one line per card)", group = "view_mode")]
    pub compact: bool,

    #[arg(long, help = "Verbose output (color tokens and raw score)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}
