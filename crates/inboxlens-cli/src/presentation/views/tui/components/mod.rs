pub mod results;

pub use results::{ResultsAction, ResultsComponent};
