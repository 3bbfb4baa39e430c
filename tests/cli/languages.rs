use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_languages_sorted() -> Result<()> {
    let test = CliTest::with_locales()?;
    test.write_file("public/locales/fr/common.json", "{}")?;
    test.write_file("public/locales/README.md", "not a language")?;

    let output = test.command().arg("languages").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "de\nen\nfr\n");

    Ok(())
}

#[test]
fn test_languages_with_locales_path_override() -> Result<()> {
    let test = CliTest::with_file("i18n/ja/common.json", "{}")?;

    let output = test
        .command()
        .args(["languages", "--locales-path", "i18n"])
        .output()?;

    assert_eq!(stdout(&output), "ja\n");

    Ok(())
}

#[test]
fn test_languages_missing_locales_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("languages").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("warning: no language directories found under 'public/locales'")
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".i18nlensrc.json", "{ not json")?;

    let output = test.command().arg("languages").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to parse config file"));

    Ok(())
}
