//! Testing infrastructure for inboxlens integration tests.
//!
//! - `TestWorld`: isolated config, payload files and CLI execution
//! - `assertions`: checks against the JSON output of `--format json`
//! - `fixtures`: sample classification payloads

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
