//! Shared configuration shapes and fixtures for integration tests.
#![allow(
    dead_code,
    reason = "each test crate uses a different subset of the shared fixtures"
)]

use serde::{Deserialize, Serialize};

pub const SINGLE_FILE_YAML: &str = include_str!("../fixtures/single_file.yaml");
pub const SINGLE_FILE_JSON: &str = include_str!("../fixtures/single_file.json");
pub const EXAMPLE_JSON: &str = include_str!("../fixtures/example.config.json");
pub const SECRET_FILE: &str = include_str!("../fixtures/secretfile");

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct UserData {
    pub name: String,
    pub pass: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Child {
    pub number: i32,
    pub text: String,
    #[serde(rename = "renamed")]
    pub another_name: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Child2 {
    pub number: i32,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct NestedConfig {
    pub child: Child,
    #[serde(rename = "child_2")]
    pub child2: Child2,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct TestConfig {
    pub number: i32,
    #[serde(rename = "floatNum")]
    pub float_num: f64,
    pub text: String,
    #[serde(rename = "fileContent")]
    pub file_content: String,
    pub bol: bool,
    #[serde(rename = "listString")]
    pub string_list: Vec<String>,
    #[serde(rename = "userList")]
    pub struct_list: Vec<UserData>,
    pub nested: NestedConfig,
}

pub fn user(name: &str, pass: &str) -> UserData {
    UserData {
        name: name.to_owned(),
        pass: pass.to_owned(),
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Defaults covering every field kind, including a partially populated list
/// element.
pub fn default_config() -> TestConfig {
    TestConfig {
        number: 100,
        float_num: 100.1,
        text: String::from("default text"),
        file_content: String::new(),
        bol: false,
        string_list: strings(&["default 1", "default 2"]),
        struct_list: vec![user("a1", "b1"), user("a2", "b2"), user("", "b3")],
        nested: NestedConfig {
            child: Child {
                number: 101,
                text: String::from("child text default"),
                another_name: String::new(),
            },
            child2: Child2::default(),
        },
    }
}

/// The configuration described by the `single_file` fixtures.
pub fn single_file_config() -> TestConfig {
    TestConfig {
        number: 60,
        float_num: 1.25,
        text: String::from("this is a string"),
        file_content: String::from("mysecret"),
        bol: true,
        string_list: strings(&["string 1", "string 2"]),
        struct_list: vec![user("u1", "p1"), user("u2", "p2"), user("", "p3")],
        nested: NestedConfig {
            child: Child {
                number: 61,
                text: String::from("this is a string 2"),
                another_name: String::from("renamedString"),
            },
            child2: Child2 { number: 62 },
        },
    }
}

/// Environment for the twelve-factor scenarios, optionally prefixed.
pub fn twelve_factor_env(prefix: &str) -> Vec<(String, String)> {
    [
        ("NUMBER", "60"),
        ("FLOATNUM", "6.65"),
        ("TEXT", "this is a string"),
        ("FILECONTENT", "@./secretfile"),
        ("BOL", "true"),
        ("LISTSTRING_0", "string 1"),
        ("LISTSTRING_1", "string 2"),
        ("NESTED_CHILD_RENAMED", "envValue"),
    ]
    .into_iter()
    .map(|(name, value)| (format!("{prefix}{name}"), value.to_owned()))
    .collect()
}
