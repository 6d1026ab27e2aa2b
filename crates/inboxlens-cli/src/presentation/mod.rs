//! # Presentation layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] --(json)--> serde_json
//!                                                                          --(text)--> [ View ]
//!
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ TuiRenderer ] <--> [ Component ] --> [ Widgets ]
//! ```
//!
//! - `view_models/`: raw, serializable data. JSON output is the full view model.
//! - `presenters/`: record → view model, badges and tips.
//! - `views/`: `fmt::Display` text views and ratatui widgets. `ViewMode` controls
//!   density of text output only.
//! - `views/tui/components/`: focus and scroll state plus key handling. Copy,
//!   back and quit are emitted as actions for the renderer.
//! - `renderers/`: console (json/text) and the interactive terminal loop.
//! - `formatters/`: string helpers used by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, NavigationOutcome, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, OutputFormat, StatusBadge,
    StatusLevel, ViewMode,
};
