//! Mapping of process environment variables into flat keys.
//!
//! Variables are enumerated through [`figment::providers::Env`], filtered by
//! an optional case-sensitive `PREFIX_`, and renamed by lowercasing and
//! turning each `_` into a key separator: `APP_NESTED_CHILD_RENAMED` under
//! prefix `APP` becomes `nested.child.renamed`, and `LISTSTRING_0` becomes
//! `liststring.0`. Values starting with `@` are replaced by the trimmed
//! contents of the file they name.

mod normalise;
mod secret;

use figment::providers::Env;
use tracing::trace;

use crate::{ConfigResult, FlatStore, FlatValue};

pub use normalise::env_key;
pub use secret::SECRET_SENTINEL;

/// Declaration of an environment layer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EnvSource {
    prefix: Option<String>,
}

impl EnvSource {
    /// Read every environment variable.
    #[must_use]
    pub const fn raw() -> Self {
        Self { prefix: None }
    }

    /// Read only variables named `PREFIX_*`.
    ///
    /// Trailing underscores on `prefix` are ignored, so `"APP"` and `"APP_"`
    /// are equivalent. An empty prefix behaves like [`EnvSource::raw`].
    #[must_use]
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        let raw: String = prefix.into();
        let trimmed = raw.trim_end_matches('_');
        Self {
            prefix: (!trimmed.is_empty()).then(|| trimmed.to_owned()),
        }
    }

    /// The normalised prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Strip `PREFIX_` from `name`, or return `None` when it does not match.
    fn strip<'a>(&self, name: &'a str) -> Option<&'a str> {
        match &self.prefix {
            None => Some(name),
            Some(prefix) => name.strip_prefix(prefix.as_str())?.strip_prefix('_'),
        }
    }

    /// Map the matching variables of the current process into a store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::SecretFile`] when an `@path` value names
    /// a file that cannot be read.
    pub fn collect(&self) -> ConfigResult<FlatStore> {
        let env = Env::raw().lowercase(false);
        let vars = env
            .iter()
            .map(|(name, value)| (name.as_str().to_owned(), value));
        self.collect_from(vars)
    }

    /// Map `(name, value)` pairs as if they were the process environment.
    pub(crate) fn collect_from<I, K>(&self, vars: I) -> ConfigResult<FlatStore>
    where
        I: IntoIterator<Item = (K, String)>,
        K: AsRef<str>,
    {
        let mut store = FlatStore::new();
        for (variable, raw) in vars {
            let name = variable.as_ref();
            let Some(key) = self.strip(name).and_then(env_key) else {
                continue;
            };
            let value = secret::resolve(name, raw)?;
            trace!(variable = name, key = %key, "mapped environment variable");
            store.insert(&key, FlatValue::String(value));
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests;
