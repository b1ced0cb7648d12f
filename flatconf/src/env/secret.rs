//! `@path` secret-file indirection for environment values.

use std::sync::Arc;

use camino::Utf8Path;
use tracing::trace;

use crate::file::read_to_string;
use crate::{ConfigError, ConfigResult};

/// Leading character marking a value as a file reference.
pub const SECRET_SENTINEL: char = '@';

/// Return `raw`, or the trimmed contents of the file it names when it starts
/// with [`SECRET_SENTINEL`].
pub(super) fn resolve(variable: &str, raw: String) -> ConfigResult<String> {
    let Some(reference) = raw.strip_prefix(SECRET_SENTINEL) else {
        return Ok(raw);
    };
    let path = Utf8Path::new(reference);
    trace!(variable, path = %path, "reading secret file");
    read_to_string(path)
        .map(|contents| contents.trim().to_owned())
        .map_err(|source| {
            Arc::new(ConfigError::SecretFile {
                variable: variable.to_owned(),
                path: path.to_path_buf(),
                source,
            })
        })
}
