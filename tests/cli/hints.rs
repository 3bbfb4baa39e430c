use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const APP: &str = r#"const a = t($ => $.greeting.hello);
const b = t($ => $.title);
"#;

#[test]
fn test_hints_all_resolved() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/app.tsx", APP)?;

    let output = test.hints_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out.contains("hint: i18n[en]: Hello  greeting.hello\n"));
    assert!(out.contains("  --> src/app.tsx:1:35\n"));
    assert!(out.contains("1 | const a = t($ => $.greeting.hello);\n"));
    assert!(out.contains("  = namespace: common\n"));
    assert!(out.contains("  = de: Hallo\n"));
    assert!(out.contains("  = de: <missing>\n"));
    assert!(out.contains("hint: i18n[en]: Home  title\n"));
    assert!(out.ends_with("\u{2713} Resolved 2 translation call(s) in 1 file\n"));

    Ok(())
}

#[test]
fn test_hints_missing_translation_fails() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/app.tsx", "const a = t($ => $.greeting.bye);\n")?;

    let output = test.hints_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("warning: missing translation for \"greeting.bye\"  common\n"));
    assert!(out.contains("  = en: <missing>\n"));
    assert!(out.ends_with("1 of 1 translation call(s) have no translation (1 file)\n"));

    Ok(())
}

#[test]
fn test_hints_with_language_override() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/app.tsx", APP)?;

    let output = test
        .hints_command()
        .args(["--language", "de", "src/app.tsx"])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("hint: i18n[de]: Hallo  greeting.hello\n"));
    assert!(out.contains("warning: missing translation for \"title\"  common\n"));

    Ok(())
}

#[test]
fn test_hints_trans_and_ambient_namespaces() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file(
        "src/form.tsx",
        r#"export function Form() {
  const { t } = useTranslation(["errors", "common"]);
  return (
    <div>
      <Trans i18nKey="errors:network.timeout" />
      {t($ => $.greeting.hello)}
    </div>
  );
}
"#,
    )?;

    let output = test.hints_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out.contains("hint: i18n[en]: Request timed out  network.timeout\n"));
    assert!(out.contains("  = namespace: errors\n"));
    assert!(out.contains("hint: i18n[en]: Hello  greeting.hello\n"));

    Ok(())
}

#[test]
fn test_hints_respects_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nlensrc.json",
        r#"{ "localesPath": "locales", "defaultNamespace": "app", "showAllLanguages": false, "includes": ["src"] }"#,
    )?;
    test.write_file("locales/en/app.json", r#"{ "title": "My App" }"#)?;
    test.write_file("src/app.js", "t($ => $.title);\n")?;
    test.write_file("scripts/other.js", "t($ => $.unknown);\n")?;

    let output = test.hints_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(out.contains("hint: i18n[en]: My App  title\n"));
    assert!(!out.contains("= en:"));
    assert!(!out.contains("unknown"));

    Ok(())
}

#[test]
fn test_hints_reports_unparsable_files() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/app.tsx", APP)?;
    test.write_file("src/broken.ts", "const a = (\n")?;

    let output = test.hints_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(
        stderr(&output)
            .contains("warning: 1 file(s) could not be parsed (use -v for details)")
    );

    Ok(())
}

#[test]
fn test_hints_bad_path_is_an_error() -> Result<()> {
    let test = CliTest::with_locales()?;

    let output = test.hints_command().arg("src/nope.ts").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Path not found"));

    Ok(())
}

#[test]
fn test_hints_root_argument() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("src/app.tsx", APP)?;

    let output = test
        .command()
        .current_dir(test.root().join("public"))
        .args(["hints", "--root", ".."])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("  --> src/app.tsx:2:26\n"));

    Ok(())
}
