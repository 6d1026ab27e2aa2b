use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext, score: f64) -> Result<()> {
    let view_model = presenters::present_tier(score);
    ctx.render(view_model)
}
