//! Extensions for mapping errors to `ConfigResult` concisely.
//!
//! These helpers replace repetitive `.map_err(|e| Arc::new(e.into()))`
//! chains when converting foreign error types into the crate's
//! `ConfigResult<T>` alias (`Result<T, Arc<ConfigError>>`).
//!
//! # Examples
//!
//! ```
//! use flatconf::{ConfigError, ConfigResult, ConfigResultExt};
//!
//! fn lookup(found: bool) -> ConfigResult<u8> {
//!     let raw: Result<u8, ConfigError> = if found {
//!         Ok(1)
//!     } else {
//!         Err(ConfigError::key_not_found("port"))
//!     };
//!     raw.into_config()
//! }
//! assert!(lookup(false).is_err());
//! ```

use std::sync::Arc;

use crate::{ConfigError, ConfigResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<ConfigError>`
/// into a [`ConfigResult`].
pub trait ConfigResultExt<T, E> {
    /// Convert `Result<T, E>` into `ConfigResult<T>` using `Into<ConfigError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<ConfigError>`.
    fn into_config(self) -> ConfigResult<T>;
}

impl<T, E> ConfigResultExt<T, E> for Result<T, E>
where
    E: Into<ConfigError>,
{
    fn into_config(self) -> ConfigResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
