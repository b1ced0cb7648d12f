//! Supported configuration file formats.

use std::fmt;
use std::str::FromStr;

use camino::Utf8Path;

use crate::{ConfigError, ConfigResult};

/// Structured formats a configuration file may be written in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum FileFormat {
    /// JSON, always available.
    Json,
    /// YAML 1.2, parsed with strict booleans (`yes` stays a string).
    Yaml,
    /// TOML.
    Toml,
}

impl FileFormat {
    /// Infer the format from `path`'s extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::File`] when the extension is missing or not
    /// recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use flatconf::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_path(Utf8Path::new("app.YML"))?, FileFormat::Yaml);
    /// assert!(FileFormat::from_path(Utf8Path::new("app.ini")).is_err());
    /// # Ok::<_, std::sync::Arc<flatconf::ConfigError>>(())
    /// ```
    pub fn from_path(path: &Utf8Path) -> ConfigResult<Self> {
        let ext = path.extension().unwrap_or_default();
        ext.parse().map_err(|_| {
            ConfigError::file(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("unsupported configuration file extension '{ext}'"),
                ),
            )
            .into()
        })
    }

    /// Lowercase name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a format name is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("unknown configuration format '{0}'")]
pub struct UnknownFormat(String);

impl FromStr for FileFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}
