use super::args::{Cli, Commands, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use anyhow::Result;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    debug!(command = command_name(&cli.command), "dispatching");

    match &cli.command {
        Commands::Show {
            payload,
            view_mode,
            no_color,
        } => {
            let ctx = HandlerContext::new(&config, cli.format, view_mode, cli.strict, *no_color);
            handlers::show::handle(&ctx, payload)
        }

        Commands::View { payload } => {
            let ctx = HandlerContext::new(
                &config,
                cli.format,
                &ViewModeArgs::default(),
                cli.strict,
                false,
            );
            handlers::view::handle(&ctx, &config, payload)
        }

        Commands::Copy {
            target,
            payload,
            view_mode,
        } => {
            let ctx = HandlerContext::new(&config, cli.format, view_mode, cli.strict, false);
            handlers::copy::handle(&ctx, &config, target, payload)
        }

        Commands::Tier { score, view_mode } => {
            let ctx = HandlerContext::new(&config, cli.format, view_mode, cli.strict, false);
            handlers::tier::handle(&ctx, *score)
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Show { .. } => "show",
        Commands::View { .. } => "view",
        Commands::Copy { .. } => "copy",
        Commands::Tier { .. } => "tier",
    }
}
