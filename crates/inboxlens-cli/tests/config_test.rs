mod common;

use anyhow::Result;
use common::{path_arg, show_json};
use inboxlens_testing::fixtures;
use inboxlens_testing::{TestWorld, assertions};
use inboxlens_types::SeverityTier;

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let world = TestWorld::new().with_config("[clipboard]\nbackend = \"carrier-pigeon\"\n");

    let result = world.run(&["tier", "0.9"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error: Configuration error:"));
    assert!(result.stderr().contains("config.toml"));
    Ok(())
}

#[test]
fn test_clamp_option_bounds_confidence() -> Result<()> {
    let world = TestWorld::new().with_config("[clipboard]\nbackend = \"none\"\n\n[confidence]\nclamp = true\n");
    let payload = world.write_json("big.json", &fixtures::payload(92.0, &[]))?;

    let json = show_json(&world, &payload)?;
    assert_eq!(json["content"]["confidence"]["percent"], 100.0);
    assertions::assert_tier(&json, SeverityTier::High)?;
    Ok(())
}

#[test]
fn test_color_always_is_overridden_by_no_color() -> Result<()> {
    let world = TestWorld::new()
        .with_config("[clipboard]\nbackend = \"none\"\n\n[display]\ncolor = \"always\"\n");
    let payload = world.sample(fixtures::BILLING_REFUND)?;

    let result = world.run(&["show", path_arg(&payload)])?;
    assert!(!result.stdout().contains('\u{1b}'));
    Ok(())
}

#[test]
fn test_color_always_without_no_color() -> Result<()> {
    let world = TestWorld::new()
        .with_config("[clipboard]\nbackend = \"none\"\n\n[display]\ncolor = \"always\"\n")
        .with_env("NO_COLOR", "");
    let payload = world.sample(fixtures::BILLING_REFUND)?;

    let result = world.run(&["show", path_arg(&payload)])?;
    assert!(result.stdout().contains('\u{1b}'));
    Ok(())
}

#[test]
fn test_strict_rejects_unreadable_payload() -> Result<()> {
    let world = TestWorld::new();
    let broken = world.write_payload("broken.json", "{not json")?;

    let result = world.run(&["show", path_arg(&broken), "--strict"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Invalid payload in"));

    let result = world.run(&["show", "missing.json", "--strict"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Failed to read payload file missing.json"));
    Ok(())
}

#[test]
fn test_lenient_falls_back_with_warning() -> Result<()> {
    let world = TestWorld::new();
    let broken = world.write_payload("broken.json", "{not json")?;

    let result = world.run(&["show", path_arg(&broken), "--format", "json"])?;
    assert!(result.success());
    assert!(result.stderr().contains("showing the default record"));
    assertions::assert_origin(&result.json()?, "default")?;
    Ok(())
}

#[test]
fn test_log_level_error_silences_fallback_warning() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["show", "missing.json", "--log-level", "error"])?;
    assert!(result.success());
    assert!(result.stderr().is_empty());
    Ok(())
}
