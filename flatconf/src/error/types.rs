//! Primary error enum for configuration loading flows.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::file::FileFormat;

/// Errors that can occur while loading or reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A defaults source did not serialise to a struct or map.
    #[error("error loading default values: {message}")]
    Defaults {
        /// Explanation of why the defaults could not be flattened.
        message: String,
    },

    /// Error reading a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported by the file loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration file could not be parsed in its declared format.
    #[error("failed to parse {format} configuration '{path}': {source}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Format the contents were parsed as.
        format: FileFormat,
        /// Parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An `@path` environment value referenced an unreadable file.
    #[error("failed to read secret file '{path}' referenced by ${variable}: {source}")]
    SecretFile {
        /// Environment variable carrying the reference.
        variable: String,
        /// Path named after the `@` sentinel.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Lookup of a key that is not present in the store.
    #[error("key not found: '{key}'")]
    KeyNotFound {
        /// The requested key, as supplied by the caller.
        key: String,
    },

    /// A stored value could not be coerced into the target type.
    #[error("cannot convert value {value:?} at '{key}' into {expected}")]
    Conversion {
        /// Flat key of the offending value.
        key: String,
        /// Name of the target type.
        expected: &'static str,
        /// Textual form of the stored value.
        value: String,
    },

    /// Any other failure raised while rebuilding a typed target.
    #[error("failed to unmarshal '{}': {message}", .key.as_deref().unwrap_or("<root>"))]
    Unmarshal {
        /// Flat key closest to the failure, when known.
        key: Option<String>,
        /// Message reported by the target's deserialisation logic.
        message: String,
    },
}
