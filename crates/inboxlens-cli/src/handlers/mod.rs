mod context;

pub mod copy;
pub mod show;
pub mod tier;
pub mod view;

pub use context::HandlerContext;
