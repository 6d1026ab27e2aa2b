//! Helpers shared across integration test files.
//!
//! Each test file compiles this module separately, hence `allow(dead_code)`.
#![cfg(test)]
#![allow(dead_code)]

use anyhow::{Result, bail};
use inboxlens_testing::TestWorld;
use serde_json::Value;
use std::path::Path;

pub fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// Run `show --format json` on a payload file and parse the result.
pub fn show_json(world: &TestWorld, payload: &Path) -> Result<Value> {
    let result = world.run(&["show", path_arg(payload), "--format", "json"])?;
    if !result.success() {
        bail!("show failed: {}", result.stderr());
    }
    result.json()
}
