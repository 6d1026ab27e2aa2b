pub mod common;
pub mod copy;
pub mod result;
pub mod results;

pub use common::{DisplayOptions, Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use copy::CopyResultViewModel;
pub use result::CommandResultViewModel;
pub use results::{CardViewModel, ConfidenceViewModel, HeaderViewModel, ResultsViewModel};

use std::fmt;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
