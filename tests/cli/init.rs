use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let _settings = test.settings().bind_to_scope();

    let mut cmd = test.command();
    cmd.arg("init");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .parleyrc.json
      adjust baselineLocale and messagesRoot to match your project

    ----- stderr -----
    ");

    let content = test.read_file(".parleyrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["baselineLocale"], "en");
    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["machineTranslation"]["enabled"], false);
    assert!(content.starts_with("{\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    let _settings = test.settings().bind_to_scope();
    test.write_file(".parleyrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ .parleyrc.json already exists, leaving it untouched

    ----- stderr -----
    ");
    assert_eq!(test.read_file(".parleyrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_created_config_is_loadable() -> Result<()> {
    let test = CliTest::clean_project()?;

    let mut init = test.command();
    init.arg("init");
    assert_eq!(init.status()?.code(), Some(0));

    let output = test.analyze_command().output()?;
    assert_eq!(
        output.status.code(),
        Some(0),
        "{}",
        String::from_utf8_lossy(&output.stdout)
    );

    Ok(())
}
