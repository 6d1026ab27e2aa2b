//! inboxlens CLI.
//!
//! Renders one classification record as a results view: console text, JSON,
//! or an interactive terminal page with per-card clipboard copy.

mod args;
pub mod clipboard;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod source;

pub use args::{Cli, Commands, CopyTarget, LogLevel, OutputFormat};
pub use commands::run;
