use crate::args::{OutputFormat, PayloadArgs, hints};
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::TuiRenderer;
use crate::presentation::presenters;
use crate::source::{self, PayloadSource};
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use serde_json::json;

pub fn handle(ctx: &HandlerContext, config: &Config, payload: &PayloadArgs) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!(
            "The interactive view needs a terminal; use `{}` for piped output",
            hints::cmd::SHOW_PAYLOAD
        );
    }

    let source = PayloadSource::detect(payload.payload.as_deref());
    let resolved = source::resolve(&source, ctx.resolve)?;
    let data = presenters::build_results(&resolved.record, resolved.origin);

    let mut clipboard = Clipboard::from_config(&config.clipboard);
    let outcome = TuiRenderer::new(&data, &mut clipboard).run()?;
    drop(clipboard);

    if ctx.format == OutputFormat::Json {
        println!("{}", json!({ "outcome": outcome }));
    }

    Ok(())
}
