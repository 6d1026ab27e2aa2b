pub mod copy;
pub mod results;
pub mod tier;
pub mod tui;

pub use results::{ResultsView, gradient_bar};
pub use tier::TierView;
