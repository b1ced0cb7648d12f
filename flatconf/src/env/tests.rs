//! Unit tests for environment variable mapping.

use anyhow::{Result, ensure};
use rstest::rstest;
use test_helpers::{figment_error, with_jail};

use super::{EnvSource, env_key};
use crate::{ConfigError, FlatValue};

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[rstest]
#[case("NUMBER", Some("number"))]
#[case("LISTSTRING_1", Some("liststring.1"))]
#[case("NESTED_CHILD_RENAMED", Some("nested.child.renamed"))]
#[case("USERLIST_2_PASS", Some("userlist.2.pass"))]
#[case("DOUBLE__UNDERSCORE", Some("double.underscore"))]
#[case("_", None)]
fn normalises_names(#[case] name: &str, #[case] expected: Option<&str>) {
    assert_eq!(env_key(name).as_deref(), expected);
}

#[rstest]
fn prefix_filter_is_case_sensitive() -> Result<()> {
    let source = EnvSource::prefixed("TEST");
    let store = source.collect_from(vars(&[
        ("TEST_FLOATNUM", "6.65"),
        ("test_lower", "ignored"),
        ("TESTING_X", "ignored"),
        ("OTHER_NUMBER", "9090"),
    ]))?;
    ensure!(store.len() == 1, "unexpected keys: {:?}", store.keys().collect::<Vec<_>>());
    ensure!(store.get("floatnum") == Some(&FlatValue::from("6.65")), "floatnum missing");
    Ok(())
}

#[rstest]
#[case("APP")]
#[case("APP_")]
#[case("APP__")]
fn trailing_underscores_in_prefix_are_ignored(#[case] prefix: &str) {
    assert_eq!(EnvSource::prefixed(prefix).prefix(), Some("APP"));
}

#[rstest]
fn empty_prefix_reads_everything() -> Result<()> {
    let source = EnvSource::prefixed("");
    ensure!(source == EnvSource::raw(), "empty prefix should behave as raw");
    let store = source.collect_from(vars(&[("LISTSTRING_0", "string 1"), ("BOL", "true")]))?;
    ensure!(store.get_string("liststring.0")? == "string 1", "list entry");
    ensure!(store.get("bol") == Some(&FlatValue::from("true")), "values stay textual");
    Ok(())
}

#[rstest]
fn resolves_secret_files() -> Result<()> {
    let store = with_jail(|j| {
        j.create_file("secretfile", "  mysecret\n")?;
        EnvSource::raw()
            .collect_from(vars(&[("FILECONTENT", "@./secretfile"), ("PLAIN", "a@b")]))
            .map_err(figment_error)
    })?;
    ensure!(store.get_string("filecontent")? == "mysecret", "secret not resolved");
    ensure!(store.get_string("plain")? == "a@b", "only a leading @ is special");
    Ok(())
}

#[rstest]
fn missing_secret_file_is_fatal() -> Result<()> {
    with_jail(|_| {
        let err = EnvSource::raw()
            .collect_from(vars(&[("TOKEN", "@./missing")]))
            .expect_err("missing secret must fail");
        assert!(
            matches!(&*err, ConfigError::SecretFile { variable, .. } if variable == "TOKEN"),
            "unexpected: {err:?}"
        );
        Ok(())
    })
}

#[rstest]
fn reads_the_process_environment() -> Result<()> {
    let store = with_jail(|j| {
        j.set_env("FLATCONF_ENV_UNIT_SUB_NAME", "Superman");
        EnvSource::prefixed("FLATCONF_ENV_UNIT")
            .collect()
            .map_err(figment_error)
    })?;
    ensure!(store.get_string("sub.name")? == "Superman", "prefixed variable not mapped");
    Ok(())
}
