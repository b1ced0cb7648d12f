//! File loading coverage: format selection, parsing, and failure reporting.

use anyhow::{Result, ensure};
use camino::Utf8Path;
use rstest::rstest;
use serde_json::json;
use test_helpers::{figment_error, with_jail};

use super::{FileFormat, load_document};
use crate::ConfigError;

fn parses_to_sample(name: &str, contents: &str) -> Result<()> {
    let document = with_jail(|j| {
        j.create_file(name, contents)?;
        load_document(Utf8Path::new(name), None).map_err(figment_error)
    })?;
    ensure!(
        document == json!({"server": {"port": 80}, "tags": ["a"]}),
        "unexpected document for {name}: {document}"
    );
    Ok(())
}

#[rstest]
fn parses_json() -> Result<()> {
    parses_to_sample("app.json", r#"{"server": {"port": 80}, "tags": ["a"]}"#)
}

#[cfg(feature = "yaml")]
#[rstest]
fn parses_yaml() -> Result<()> {
    parses_to_sample("app.yaml", "server:\n  port: 80\ntags:\n  - a\n")
}

#[cfg(feature = "toml")]
#[rstest]
fn parses_toml() -> Result<()> {
    parses_to_sample("app.toml", "tags = [\"a\"]\n\n[server]\nport = 80\n")
}

#[cfg(feature = "yaml")]
#[rstest]
fn yaml_yes_remains_a_string() -> Result<()> {
    let document = with_jail(|j| {
        j.create_file("app.yml", "recipient: yes\nenabled: true\n")?;
        load_document(Utf8Path::new("app.yml"), None).map_err(figment_error)
    })?;
    ensure!(
        document == json!({"recipient": "yes", "enabled": true}),
        "unexpected document: {document}"
    );
    Ok(())
}

#[rstest]
fn explicit_format_overrides_extension() -> Result<()> {
    let document = with_jail(|j| {
        j.create_file("settings.conf", r#"{"name": "explicit"}"#)?;
        load_document(Utf8Path::new("settings.conf"), Some(FileFormat::Json))
            .map_err(figment_error)
    })?;
    ensure!(document == json!({"name": "explicit"}), "unexpected: {document}");
    Ok(())
}

#[rstest]
#[case("settings.ini")]
#[case("settings")]
fn rejects_unknown_extensions(#[case] name: &str) {
    let err = load_document(Utf8Path::new(name), None).expect_err("extension must be rejected");
    assert!(matches!(&*err, ConfigError::File { .. }), "unexpected: {err:?}");
}

#[rstest]
fn missing_file_is_an_io_error() -> Result<()> {
    with_jail(|_| {
        let err = load_document(Utf8Path::new("absent.json"), None)
            .expect_err("missing file must fail");
        assert!(matches!(&*err, ConfigError::File { .. }), "unexpected: {err:?}");
        Ok(())
    })
}

#[cfg(all(feature = "yaml", feature = "toml"))]
#[rstest]
#[case("broken.json", "{\"unterminated\": ")]
#[case("list.json", "[1, 2, 3]")]
#[case("dup.yaml", "recipient: first\nrecipient: second")]
#[case("open.yaml", "recipient: [")]
#[case("scalar.yaml", "just text")]
#[case("broken.toml", "key = ")]
fn malformed_content_is_a_parse_error(#[case] name: &str, #[case] contents: &str) -> Result<()> {
    with_jail(|j| {
        j.create_file(name, contents)?;
        let err = load_document(Utf8Path::new(name), None).expect_err("parse must fail");
        assert!(
            matches!(&*err, ConfigError::Parse { path, .. } if path.as_str() == name),
            "unexpected: {err:?}"
        );
        Ok(())
    })
}

#[rstest]
#[case("yml", FileFormat::Yaml)]
#[case("JSON", FileFormat::Json)]
#[case("toml", FileFormat::Toml)]
fn parses_format_names(#[case] raw: &str, #[case] expected: FileFormat) -> Result<()> {
    let parsed: FileFormat = raw.parse()?;
    ensure!(parsed == expected, "{raw} parsed as {parsed}");
    Ok(())
}
