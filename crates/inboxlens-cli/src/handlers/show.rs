use crate::args::PayloadArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::source::{self, PayloadSource};
use anyhow::Result;

pub fn handle(ctx: &HandlerContext, payload: &PayloadArgs) -> Result<()> {
    let source = PayloadSource::detect(payload.payload.as_deref());
    let resolved = source::resolve(&source, ctx.resolve)?;

    let view_model = presenters::present_results(&resolved);
    ctx.render(view_model)
}
