//! Declarations of the layers fed to [`crate::load`].

use std::fmt;

use camino::Utf8PathBuf;

use crate::env::EnvSource;
use crate::file::FileFormat;
use crate::flatten::StructSource;
use crate::unmarshal::UnmarshalTarget;

/// A configuration file layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSource {
    /// Location of the file.
    pub path: Utf8PathBuf,
    /// Explicit format; inferred from the extension when `None`.
    pub format: Option<FileFormat>,
}

/// One entry in the ordered list passed to [`crate::load`].
///
/// Layers are applied strictly in list order and later layers overwrite the
/// keys of earlier ones. [`Source::Unmarshal`] entries are deferred until
/// every layer has been merged, wherever they appear in the list.
#[non_exhaustive]
pub enum Source<'a> {
    /// Values taken from a struct, typically its defaults.
    Defaults(&'a dyn StructSource),
    /// Values parsed from a file.
    File(FileSource),
    /// Values mapped from environment variables.
    Env(EnvSource),
    /// Destination rebuilt from the merged store once loading completes.
    Unmarshal(&'a mut dyn UnmarshalTarget),
}

impl<'a> Source<'a> {
    /// Layer the fields of `value`.
    #[must_use]
    pub fn defaults<T: StructSource>(value: &'a T) -> Self {
        Self::Defaults(value)
    }

    /// Layer the file at `path`, inferring its format from the extension.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::File(FileSource {
            path: path.into(),
            format: None,
        })
    }

    /// Layer the file at `path`, parsed as `format`.
    #[must_use]
    pub fn file_with_format(path: impl Into<Utf8PathBuf>, format: FileFormat) -> Self {
        Self::File(FileSource {
            path: path.into(),
            format: Some(format),
        })
    }

    /// Layer every environment variable.
    #[must_use]
    pub const fn env() -> Self {
        Self::Env(EnvSource::raw())
    }

    /// Layer environment variables named `PREFIX_*`.
    #[must_use]
    pub fn env_prefixed(prefix: impl Into<String>) -> Self {
        Self::Env(EnvSource::prefixed(prefix))
    }

    /// Rebuild `target` from the merged store after all layers are applied.
    #[must_use]
    pub fn unmarshal<T: UnmarshalTarget>(target: &'a mut T) -> Self {
        Self::Unmarshal(target)
    }

    /// Short name of the layer kind, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Defaults(_) => "defaults",
            Self::File(_) => "file",
            Self::Env(_) => "env",
            Self::Unmarshal(_) => "unmarshal",
        }
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults(_) => f.write_str("Defaults(..)"),
            Self::File(file) => f.debug_tuple("File").field(file).finish(),
            Self::Env(env) => f.debug_tuple("Env").field(env).finish(),
            Self::Unmarshal(_) => f.write_str("Unmarshal(..)"),
        }
    }
}
