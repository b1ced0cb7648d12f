//! Flattening of typed values through their `Serialize` implementation.

use serde::Serialize;

use super::flatten;
use super::shape::StructRoot;
use crate::{ConfigError, ConfigResult, FlatStore};

/// Flatten a struct-shaped value into a [`FlatStore`].
///
/// Field names follow serde: `#[serde(rename = "...")]` and `rename_all`
/// are honoured, `#[serde(skip)]` fields are omitted, and every segment is
/// lowercased. `None` fields and zero-valued leaves (`0`, `0.0`, `false`,
/// `""`) contribute nothing, so an unset default never shadows an earlier
/// layer and never answers a lookup.
///
/// # Errors
///
/// Returns [`ConfigError::Defaults`] when `value` is not a struct (or a
/// reference, `Box`, `Some` or newtype around one), or when serialisation
/// itself fails.
///
/// # Examples
///
/// ```
/// use flatconf::flatten_struct;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Server { port: u16, #[serde(rename = "bindAddr")] bind: String }
///
/// let store = flatten_struct(&Server { port: 80, bind: "::".into() })?;
/// assert_eq!(store.get_string("bindaddr")?, "::");
/// assert!(store.get_string("port").is_ok());
/// assert!(flatten_struct(&Server { port: 0, bind: "::".into() })?.get("port").is_none());
/// assert!(flatten_struct(&12).is_err());
/// # Ok::<_, std::sync::Arc<flatconf::ConfigError>>(())
/// ```
pub fn flatten_struct<T: Serialize + ?Sized>(value: &T) -> ConfigResult<FlatStore> {
    let mut rejected = false;
    let serialised = value.serialize(StructRoot::new(&mut rejected));
    if rejected {
        return Err(ConfigError::not_a_struct().into());
    }
    let document = serialised.map_err(|err| ConfigError::Defaults {
        message: err.to_string(),
    })?;
    Ok(flatten(&document)
        .into_iter()
        .filter(|(_, leaf)| !leaf.is_zero())
        .collect())
}

/// A value usable as a `Defaults` layer.
///
/// Implemented for every `Serialize` type so any struct (or reference to
/// one) can be passed to [`crate::Source::defaults`]. Values that are not
/// struct-shaped are rejected when the layer is applied.
pub trait StructSource {
    /// Flatten `self` into a new store.
    ///
    /// # Errors
    ///
    /// See [`flatten_struct`].
    fn flatten_struct(&self) -> ConfigResult<FlatStore>;
}

impl<T: Serialize + ?Sized> StructSource for T {
    fn flatten_struct(&self) -> ConfigResult<FlatStore> {
        flatten_struct(self)
    }
}
