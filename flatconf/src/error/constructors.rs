//! Constructors and serde integration for `ConfigError`.

use std::fmt::Display;

use camino::Utf8Path;

use super::ConfigError;

impl ConfigError {
    /// Error reported when a defaults source is not struct-shaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatconf::ConfigError;
    /// let err = ConfigError::not_a_struct();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "error loading default values: passed src is not a pointer or struct"
    /// );
    /// ```
    #[must_use]
    pub fn not_a_struct() -> Self {
        Self::Defaults {
            message: String::from("passed src is not a pointer or struct"),
        }
    }

    /// Construct a [`ConfigError::File`] for `path`.
    #[must_use]
    pub fn file(path: &Utf8Path, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Construct a [`ConfigError::KeyNotFound`] for `key`.
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Attach `key` to an [`ConfigError::Unmarshal`] raised without one.
    ///
    /// Other variants already carry their own location and are returned
    /// unchanged.
    #[must_use]
    pub(crate) fn at_key(self, key: &str) -> Self {
        match self {
            Self::Unmarshal { key: None, message } => Self::Unmarshal {
                key: (!key.is_empty()).then(|| key.to_owned()),
                message,
            },
            other => other,
        }
    }
}

impl serde::de::Error for ConfigError {
    fn custom<T: Display>(msg: T) -> Self {
        Self::Unmarshal {
            key: None,
            message: msg.to_string(),
        }
    }
}
