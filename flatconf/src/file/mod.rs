//! Reading configuration files into generic documents.

mod format;
mod helpers;
mod parser;

use camino::Utf8Path;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::{ConfigError, ConfigResult};

pub use format::{FileFormat, UnknownFormat};
pub(crate) use helpers::read_to_string;

/// Read and parse the configuration file at `path`.
///
/// The format is `format` when given, otherwise it is inferred from the file
/// extension. The document root must be a mapping.
///
/// # Errors
///
/// Returns [`ConfigError::File`] when the file cannot be read or its format
/// cannot be determined, and [`ConfigError::Parse`] when the contents are
/// malformed.
pub fn load_document(path: &Utf8Path, format: Option<FileFormat>) -> ConfigResult<JsonValue> {
    let resolved = match format {
        Some(explicit) => explicit,
        None => FileFormat::from_path(path)?,
    };
    let data = read_to_string(path).map_err(|err| ConfigError::file(path, err))?;
    debug!(path = %path, format = %resolved, bytes = data.len(), "parsing configuration file");
    parser::parse_document(path, resolved, &data)
}

#[cfg(test)]
mod tests;
