//! Unmarshalling merged stores into typed configuration structs.

mod common;

use anyhow::{Result, ensure};
use flatconf::{ConfigError, Source, flatten_struct, load};
use rstest::rstest;
use test_helpers::{figment_error, set_envs, with_jail};

use common::{
    Child, NestedConfig, SECRET_FILE, SINGLE_FILE_YAML, TestConfig, default_config,
    single_file_config, strings, twelve_factor_env,
};

fn twelve_factor_config() -> TestConfig {
    TestConfig {
        number: 60,
        float_num: 6.65,
        text: String::from("this is a string"),
        file_content: String::from("mysecret"),
        bol: true,
        string_list: strings(&["string 1", "string 2"]),
        struct_list: Vec::new(),
        nested: NestedConfig {
            child: Child {
                another_name: String::from("envValue"),
                ..Child::default()
            },
            ..NestedConfig::default()
        },
    }
}

fn unmarshal_in_jail<'a>(
    sources: impl FnOnce() -> Vec<Source<'a>>,
    vars: &[(String, String)],
) -> Result<TestConfig> {
    with_jail(|j| {
        j.create_file("single_file.yaml", SINGLE_FILE_YAML)?;
        j.create_file("secretfile", SECRET_FILE)?;
        for (name, value) in vars {
            j.set_env(name, value);
        }
        let store = load(sources()).map_err(figment_error)?;
        store.unmarshal::<TestConfig>().map_err(figment_error)
    })
}

#[rstest]
fn loads_from_file() -> Result<()> {
    let ignored = vec![
        (String::from("FLATCONF_UM_ISDEVMODE"), String::from("false")),
        (String::from("FLATCONF_UM_NUMBER"), String::from("9090")),
    ];
    let got = unmarshal_in_jail(|| vec![Source::file("single_file.yaml")], &ignored)?;
    ensure!(got == single_file_config(), "unexpected config: {got:#?}");
    Ok(())
}

#[rstest]
#[case::without_prefix("", None)]
#[case::with_prefix("FLATCONF_UM_A_", Some("FLATCONF_UM_A"))]
fn loads_twelve_factor_env(#[case] var_prefix: &str, #[case] source_prefix: Option<&str>) -> Result<()> {
    let vars = twelve_factor_env(var_prefix);
    let got = unmarshal_in_jail(
        || match source_prefix {
            Some(prefix) => vec![Source::env_prefixed(prefix)],
            None => vec![Source::env()],
        },
        &vars,
    )?;
    ensure!(got == twelve_factor_config(), "unexpected config: {got:#?}");
    Ok(())
}

#[rstest]
fn preloaded_defaults_survive_an_empty_env_layer() -> Result<()> {
    let defaults = default_config();
    let got = unmarshal_in_jail(
        || vec![Source::defaults(&defaults), Source::env_prefixed("FLATCONF_UM_EMPTY")],
        &[],
    )?;
    ensure!(got == defaults, "unexpected config: {got:#?}");
    Ok(())
}

#[rstest]
fn deferred_targets_are_filled_after_merging() -> Result<()> {
    let defaults = default_config();
    let mut cfg = TestConfig::default();
    with_jail(|j| {
        j.create_file("single_file.yaml", SINGLE_FILE_YAML)?;
        set_envs(j, &[("FLATCONF_UM_B_NESTED_CHILD_TEXT", "from env")]);
        load([
            Source::unmarshal(&mut cfg),
            Source::defaults(&defaults),
            Source::file("single_file.yaml"),
            Source::env_prefixed("FLATCONF_UM_B"),
        ])
        .map_err(figment_error)
    })?;
    ensure!(cfg.number == 60, "file should override the default number");
    ensure!(cfg.nested.child.text == "from env", "env should win over the file");
    ensure!(cfg.nested.child.number == 61, "file value expected");
    ensure!(cfg.struct_list.len() == 3, "list length: {}", cfg.struct_list.len());
    Ok(())
}

#[rstest]
fn defaults_round_trip_through_the_store() -> Result<()> {
    let original = default_config();
    let rebuilt: TestConfig = flatten_struct(&original)?.unmarshal()?;
    ensure!(rebuilt == original, "round trip changed value: {rebuilt:#?}");
    Ok(())
}

#[rstest]
fn conversion_failures_abort_deferred_unmarshal() -> Result<()> {
    let mut cfg = TestConfig::default();
    let outcome = with_jail(|j| {
        set_envs(j, &[("FLATCONF_UM_C_NUMBER", "sixty")]);
        Ok(load([
            Source::env_prefixed("FLATCONF_UM_C"),
            Source::unmarshal(&mut cfg),
        ]))
    })?;
    let err = outcome
        .err()
        .ok_or_else(|| anyhow::anyhow!("non-numeric number was accepted"))?;
    ensure!(
        matches!(&*err, ConfigError::Conversion { key, expected: "i32", .. } if key == "number"),
        "unexpected error: {err}"
    );
    Ok(())
}
