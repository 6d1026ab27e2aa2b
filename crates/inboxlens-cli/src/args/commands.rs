use super::common::{PayloadArgs, ViewModeArgs};
use super::enums::CopyTarget;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the results view for a classification payload
    #[command(after_help = "\
Examples:
  inboxlens show result.json              # Standard view
  inboxlens show result.json --compact    # One line per card
  classifier mail.eml | inboxlens show    # Read the payload from stdin
  inboxlens show                          # No payload: default record
  inboxlens show result.json --format json")]
    Show {
        #[command(flatten)]
        payload: PayloadArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,

        #[arg(long, help = "Disable colored output")]
        no_color: bool,
    },

    /// Open the interactive results view
    #[command(after_help = "\
Keys:
  Tab / j / Down        Focus next card
  Shift+Tab / k / Up    Focus previous card
  h / l / Left / Right  Scroll extracted details
  c / y / Enter         Copy focused value
  b / Backspace         Back
  q / Esc               Quit")]
    View {
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Copy one value from the record to the clipboard
    #[command(after_help = "\
Targets:
  request-type, sub-request-type, primary-request, sender, field:<key>

Examples:
  inboxlens copy request-type result.json
  inboxlens copy field:amount result.json")]
    Copy {
        #[arg(value_name = "TARGET")]
        target: CopyTarget,

        #[command(flatten)]
        payload: PayloadArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Show the severity tier a confidence score maps to
    #[command(after_help = "\
Tiers:
  high    score > 0.8
  medium  0.5 < score <= 0.8
  low     score <= 0.5")]
    Tier {
        #[arg(allow_negative_numbers = true, value_name = "SCORE")]
        score: f64,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}
