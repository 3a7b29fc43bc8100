use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::json;

use crate::CliTest;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::clean_project()?;
    let _settings = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.analyze_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    statistics
      files_scanned           4
      responsive_classes      1
      breakpoint_sm           0
      breakpoint_md           1
      breakpoint_lg           0
      breakpoint_xl           0
      breakpoint_2xl          0
      files_with_responsive   1
      next_image_files        0
      img_tag_files           0
      pages_analyzed          1
      total_translation_keys  1
      es_missing              0
      es_untranslated         0
      api_url                 https://api.example.com

    ✓ Checked 4 source files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_raw_img_without_alt() -> Result<()> {
    let test = CliTest::clean_project()?;
    let _settings = test.settings().bind_to_scope();
    test.write_file(
        "src/components/Hero.tsx",
        "export function Hero() {\n  return (\n    <img src=\"a.png\">\n  );\n}\n",
    )?;

    assert_cmd_snapshot!(test.analyze_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    performance (1)
      --> src/components/Hero.tsx:3  Using <img> instead of the optimized Image component

    accessibility (1)
      --> src/components/Hero.tsx:3  Image without alt text

    statistics
      files_scanned           5
      responsive_classes      1
      breakpoint_sm           0
      breakpoint_md           1
      breakpoint_lg           0
      breakpoint_xl           0
      breakpoint_2xl          0
      files_with_responsive   1
      next_image_files        0
      img_tag_files           1
      pages_analyzed          1
      total_translation_keys  1
      es_missing              0
      es_untranslated         0
      api_url                 https://api.example.com

    ✘ 2 problems in 2 categories (5 source files checked)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let test = CliTest::clean_project()?;
    test.write_file(
        "messages/en.json",
        r#"{"home": {"title": "Welcome", "cta": "Book now"}}"#,
    )?;
    test.write_file(
        "src/app/[locale]/about/page.tsx",
        "import { useTranslations } from 'next-intl';\n\nexport default function About() {\n  return <h2>About Our Company</h2>;\n}\n",
    )?;

    let mut cmd = test.analyze_command();
    cmd.args(["--json-report", "out/report.json"]);
    assert_eq!(cmd.status()?.code(), Some(1));

    let report = test.read_json("out/report.json")?;
    assert_eq!(report["stats"]["pages_analyzed"], 2);
    assert_eq!(report["stats"]["total_translation_keys"], 2);
    assert_eq!(report["stats"]["es_missing"], 1);
    assert_eq!(
        report["issues"]["translations"],
        json!([{
            "file": "messages/es.json",
            "lang": "es",
            "issue": "1 missing translation keys",
            "count": 1,
            "detail": "home.cta"
        }])
    );
    assert_eq!(
        report["issues"]["pages"],
        json!([{
            "file": "src/app/[locale]/about/page.tsx",
            "issue": "Uses translations but is not a client component"
        }])
    );
    assert_eq!(
        report["issues"]["hardcoded"],
        json!([{
            "file": "src/app/[locale]/about/page.tsx",
            "line": 4,
            "issue": "Possible hardcoded text",
            "detail": "About Our Company"
        }])
    );

    Ok(())
}

#[test]
fn test_missing_wiring_is_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/components/Nav.tsx", "import Link from 'next/link';\n")?;

    let output = test.analyze_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with("structure (2)\n"));
    assert!(stdout.contains("  --> messages  Missing messages directory\n"));
    assert!(stdout.contains("  --> src/i18n/routing.ts  Missing i18n routing configuration\n"));
    assert!(stdout.contains("  --> middleware.ts  Missing middleware.ts\n"));
    assert!(stdout.contains("  --> .env.local  Missing environment file\n"));
    assert!(stdout.contains("imports (1)\n"));
    assert!(!stdout.contains("translations ("));

    Ok(())
}

#[test]
fn test_missing_baseline_is_fatal() -> Result<()> {
    let test = CliTest::clean_project()?;
    test.write_file(".parleyrc.json", r#"{"baselineLocale": "fr"}"#)?;

    let _settings = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.analyze_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Baseline locale file not found: messages/fr.json
    ");

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::clean_project()?;
    test.write_file(".parleyrc.json", r#"{"ignores": ["[invalid"]}"#)?;

    let output = test.analyze_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}
