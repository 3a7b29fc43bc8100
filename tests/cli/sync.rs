use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread,
};

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::CliTest;

fn messages_project(baseline: &str, targets: &[(&str, &str)]) -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", baseline)?;
    for (locale, content) in targets {
        test.write_file(&format!("messages/{}.json", locale), content)?;
    }
    Ok(test)
}

/// Answer `count` translation requests with the same translated text.
fn serve_translations(count: usize, translated: &'static str) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    thread::spawn(move || {
        for _ in 0..count {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
            }
            let body = json!([[[translated, "source", null]], null, "en"]).to_string();
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    Ok(format!("http://{}/translate_a/single", addr))
}

#[test]
fn test_sync_uses_dictionary() -> Result<()> {
    let test = messages_project(r#"{"a": {"b": "Home"}}"#, &[("es", "{}")])?;
    let _settings = test.settings().bind_to_scope();
    test.write_file("dictionaries/es.json", r#"{"Home": "Inicio"}"#)?;

    assert_cmd_snapshot!(test.sync_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    es  messages/es.json
      1 changed (1 from dictionary, 0 machine translated, 0 skipped, 0 failed)
      missing keys: 1 -> 0, untranslated before: 0

    ✓ Updated 1 key in 1 locale file

    ----- stderr -----
    ");
    assert_eq!(test.read_json("messages/es.json")?, json!({"a": {"b": "Inicio"}}));

    Ok(())
}

#[test]
fn test_sync_writes_pretty_json_with_literal_unicode() -> Result<()> {
    let test = messages_project(r#"{"nav": {"home": "Home"}}"#, &[("ro", "{}")])?;
    test.write_file("dictionaries/ro.json", r#"{"Home": "Acasă"}"#)?;

    assert_eq!(test.sync_command().status()?.code(), Some(0));
    assert_eq!(
        test.read_file("messages/ro.json")?,
        "{\n  \"nav\": {\n    \"home\": \"Acasă\"\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_sync_is_idempotent() -> Result<()> {
    let test = messages_project(
        r#"{"contact": "Contact us at privacy@example.com", "title": "Welcome"}"#,
        &[("de", r#"{"title": "Willkommen"}"#)],
    )?;
    let _settings = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.sync_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    de  messages/de.json
      1 changed (0 from dictionary, 0 machine translated, 1 skipped, 0 failed)
      missing keys: 1 -> 0, untranslated before: 0

    ✓ Updated 1 key in 1 locale file

    ----- stderr -----
    ");
    let first = test.read_file("messages/de.json")?;
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&first)?,
        json!({"title": "Willkommen", "contact": "Contact us at privacy@example.com"})
    );

    assert_cmd_snapshot!(test.sync_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    de  messages/de.json
      0 changed (0 from dictionary, 0 machine translated, 1 skipped, 0 failed)
      missing keys: 0 -> 0, untranslated before: 0

    ✓ All locale files are in sync with en

    ----- stderr -----
    ");
    assert_eq!(test.read_file("messages/de.json")?, first);

    Ok(())
}

#[test]
fn test_sync_creates_requested_locale() -> Result<()> {
    let test = messages_project(r#"{"title": "Welcome"}"#, &[])?;
    let _settings = test.settings().bind_to_scope();

    let mut cmd = test.sync_command();
    cmd.args(["--locale", "fr"]);
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    fr  messages/fr.json (new file)
      1 changed (0 from dictionary, 0 machine translated, 0 skipped, 0 failed)
      missing keys: 1 -> 0, untranslated before: 0

    ✓ Updated 1 key in 1 locale file

    ----- stderr -----
    ");
    assert_eq!(test.read_json("messages/fr.json")?, json!({"title": "Welcome"}));

    Ok(())
}

#[test]
fn test_sync_check_reports_without_writing() -> Result<()> {
    let test = messages_project(r#"{"x": "One", "y": "Two"}"#, &[("it", r#"{"x": "Uno"}"#)])?;
    let _settings = test.settings().bind_to_scope();

    let mut cmd = test.sync_command();
    cmd.arg("--check");
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    it  messages/it.json
      1 changed (0 from dictionary, 0 machine translated, 0 skipped, 0 failed)
      missing keys: 1 -> 0, untranslated before: 0

    Would update 1 key in 1 locale file

    ----- stderr -----
    ");
    assert_eq!(test.read_json("messages/it.json")?, json!({"x": "Uno"}));

    Ok(())
}

#[test]
fn test_sync_dry_run_exits_zero() -> Result<()> {
    let test = messages_project(r#"{"x": "One", "y": "Two"}"#, &[("it", r#"{"x": "Uno"}"#)])?;

    let mut cmd = test.sync_command();
    cmd.arg("--dry-run");
    assert_eq!(cmd.status()?.code(), Some(0));
    assert_eq!(test.read_json("messages/it.json")?, json!({"x": "Uno"}));

    Ok(())
}

#[test]
fn test_sync_removes_deprecated_keys_and_applies_overrides() -> Result<()> {
    let test = messages_project(
        r#"{"home": {"title": "Welcome", "cta": "Book now"}}"#,
        &[(
            "es",
            r#"{"home": {"title": "Bienvenido", "cta": "Reservar", "legacy": "Viejo"}}"#,
        )],
    )?;
    let _settings = test.settings().bind_to_scope();
    test.write_file(".parleyrc.json", r#"{"deprecatedKeys": ["home.legacy"]}"#)?;
    test.write_file("overrides/es.json", r#"{"home": {"cta": "Reserva ya"}}"#)?;

    assert_cmd_snapshot!(test.sync_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    es  messages/es.json
      0 changed (0 from dictionary, 0 machine translated, 0 skipped, 0 failed)
      missing keys: 0 -> 0, untranslated before: 0
      deprecated keys removed: 1, overrides applied: 1

    ✓ Updated 2 keys in 1 locale file

    ----- stderr -----
    ");
    assert_eq!(
        test.read_json("messages/es.json")?,
        json!({"home": {"title": "Bienvenido", "cta": "Reserva ya"}})
    );

    Ok(())
}

#[test]
fn test_sync_check_passes_after_overrides() -> Result<()> {
    let test = messages_project(
        r#"{"nav": {"dashboard": "Dashboard"}}"#,
        &[("de", "{}")],
    )?;
    let _settings = test.settings().bind_to_scope();
    test.write_file("dictionaries/de.json", r#"{"Dashboard": "Armaturenbrett"}"#)?;
    test.write_file("overrides/de.json", r#"{"nav": {"dashboard": "Dashboard"}}"#)?;

    assert_cmd_snapshot!(test.sync_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    de  messages/de.json
      0 changed (0 from dictionary, 0 machine translated, 0 skipped, 0 failed)
      missing keys: 1 -> 0, untranslated before: 0
      deprecated keys removed: 0, overrides applied: 1

    ✓ Updated 1 key in 1 locale file

    ----- stderr -----
    ");
    let synced = test.read_file("messages/de.json")?;
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&synced)?,
        json!({"nav": {"dashboard": "Dashboard"}})
    );

    let mut check = test.sync_command();
    check.arg("--check");
    assert_cmd_snapshot!(check, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    de  messages/de.json
      0 changed (0 from dictionary, 0 machine translated, 0 skipped, 0 failed)
      missing keys: 0 -> 0, untranslated before: 0

    ✓ All locale files are in sync with en

    ----- stderr -----
    ");
    assert_eq!(test.read_file("messages/de.json")?, synced);

    Ok(())
}

#[test]
fn test_sync_check_passes_with_deprecated_key_in_baseline() -> Result<()> {
    let test = messages_project(
        r#"{"nav": {"home": "Home", "about": "About"}}"#,
        &[("de", r#"{"nav": {"home": "Startseite"}}"#)],
    )?;
    test.write_file("dictionaries/de.json", r#"{"About": "Über uns"}"#)?;
    test.write_file(".parleyrc.json", r#"{"deprecatedKeys": ["nav.home"]}"#)?;

    let output = test.sync_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr.contains("deprecated key nav.home is still defined in the baseline locale"));
    assert_eq!(
        test.read_json("messages/de.json")?,
        json!({"nav": {"home": "Startseite", "about": "Über uns"}})
    );

    let mut check = test.sync_command();
    check.arg("--check");
    assert_eq!(check.status()?.code(), Some(0));

    Ok(())
}

#[test]
fn test_sync_machine_translation() -> Result<()> {
    let endpoint = serve_translations(1, "Hola")?;
    let test = messages_project(r#"{"greeting": "Hello"}"#, &[("es", "{}")])?;
    test.write_file(
        ".parleyrc.json",
        &json!({"machineTranslation": {"endpoint": endpoint, "requestDelayMs": 0}}).to_string(),
    )?;

    let mut cmd = test.sync_command();
    cmd.arg("--machine");
    let output = cmd.output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(
        output.status.code(),
        Some(0),
        "stdout: {}\nstderr: {}",
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(test.read_json("messages/es.json")?, json!({"greeting": "Hola"}));
    assert!(stdout.contains("(0 from dictionary, 1 machine translated, 0 skipped, 0 failed)"));

    Ok(())
}

#[test]
fn test_sync_provider_failure_keeps_baseline() -> Result<()> {
    // Bind then drop to get a port nothing listens on.
    let endpoint = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        format!("http://{}/translate_a/single", listener.local_addr()?)
    };
    let test = messages_project(r#"{"greeting": "Hello"}"#, &[("es", "{}")])?;
    test.write_file(
        ".parleyrc.json",
        &json!({"machineTranslation": {"enabled": true, "endpoint": endpoint, "timeoutSecs": 2, "requestDelayMs": 0}})
            .to_string(),
    )?;

    let output = test.sync_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_json("messages/es.json")?, json!({"greeting": "Hello"}));
    assert!(stdout.contains("  ✘ greeting \"Hello\": transport error:"));
    assert!(stdout.contains("warning: 1 machine translation failed; the baseline text was kept\n"));
    assert!(stderr.contains("failed to translate"));

    Ok(())
}

#[test]
fn test_sync_without_targets() -> Result<()> {
    let test = messages_project(r#"{"title": "Welcome"}"#, &[])?;
    let _settings = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.sync_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: no target locales besides en

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_sync_missing_baseline_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    let _settings = test.settings().bind_to_scope();
    test.write_file("messages/es.json", "{}")?;

    assert_cmd_snapshot!(test.sync_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Baseline locale file not found: messages/en.json
    ");

    Ok(())
}
