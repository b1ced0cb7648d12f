//! Format-specific parsing into a generic document.

use camino::Utf8Path;
use serde_json::Value as JsonValue;

use super::FileFormat;
use crate::{ConfigError, ConfigResult};

fn parse_error(
    path: &Utf8Path,
    format: FileFormat,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> ConfigError {
    ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        source: source.into(),
    }
}

#[cfg(not(all(feature = "yaml", feature = "toml")))]
fn feature_disabled(path: &Utf8Path, feature: &str) -> ConfigError {
    ConfigError::file(
        path,
        std::io::Error::other(format!(
            "{feature} feature disabled: enable the '{feature}' feature to support this file format"
        )),
    )
}

/// Parse `data` as `format`, requiring a mapping at the document root.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed input or a non-mapping root,
/// and [`ConfigError::File`] when support for `format` was compiled out.
pub(super) fn parse_document(
    path: &Utf8Path,
    format: FileFormat,
    data: &str,
) -> ConfigResult<JsonValue> {
    let document = match format {
        FileFormat::Json => {
            serde_json::from_str::<JsonValue>(data).map_err(|e| parse_error(path, format, e))?
        }
        FileFormat::Yaml => parse_yaml(path, data)?,
        FileFormat::Toml => parse_toml(path, data)?,
    };
    if document.is_object() {
        Ok(document)
    } else {
        Err(parse_error(path, format, "expected a mapping at the document root").into())
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Utf8Path, data: &str) -> Result<JsonValue, ConfigError> {
    serde_saphyr::from_str_with_options(
        data,
        serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        },
    )
    .map_err(|e| parse_error(path, FileFormat::Yaml, e))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Utf8Path, _data: &str) -> Result<JsonValue, ConfigError> {
    Err(feature_disabled(path, "yaml"))
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Utf8Path, data: &str) -> Result<JsonValue, ConfigError> {
    toml::from_str::<JsonValue>(data).map_err(|e| parse_error(path, FileFormat::Toml, e))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Utf8Path, _data: &str) -> Result<JsonValue, ConfigError> {
    Err(feature_disabled(path, "toml"))
}
