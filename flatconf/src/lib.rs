//! Layered configuration over a flat, dot-addressed key space.
//!
//! `flatconf` merges struct defaults, a JSON/YAML/TOML file, and environment
//! variables into a [`FlatStore`]: a single mapping from lowercase keys such
//! as `nested.child.renamed` or `users.0.name` to scalar values. The store can
//! be queried by key or unmarshalled into any `serde::Deserialize` type.
//!
//! ```rust,no_run
//! use flatconf::{Source, load};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Deserialize, Serialize)]
//! struct Sub {
//!     name: String,
//!     value: f64,
//! }
//!
//! #[derive(Default, Deserialize, Serialize)]
//! struct AppConfig {
//!     sub: Sub,
//!     number: i32,
//!     #[serde(rename = "fromFile")]
//!     from_file: String,
//! }
//!
//! let defaults = AppConfig { number: 42, ..AppConfig::default() };
//! let mut cfg = AppConfig::default();
//! load([
//!     Source::defaults(&defaults),
//!     Source::unmarshal(&mut cfg),
//!     Source::file("config.json"),
//!     Source::env_prefixed("ENVPREFIX"),
//! ])?;
//! # Ok::<_, std::sync::Arc<flatconf::ConfigError>>(())
//! ```

mod error;
pub mod env;
pub mod file;
mod flatten;
pub mod key;
mod load;
mod result_ext;
mod source;
mod store;
mod unmarshal;
mod value;

use std::sync::Arc;

pub use env::{EnvSource, SECRET_SENTINEL, env_key};
pub use error::ConfigError;
pub use file::{FileFormat, UnknownFormat, load_document};
pub use flatten::{StructSource, flatten, flatten_struct};
pub use load::load;
pub use result_ext::ConfigResultExt;
pub use source::{FileSource, Source};
pub use store::FlatStore;
pub use unmarshal::UnmarshalTarget;
pub use value::FlatValue;

/// Result type returned by fallible configuration operations.
///
/// Errors are shared behind an [`Arc`] so they can be cloned cheaply when a
/// single failure is reported to several callers.
pub type ConfigResult<T> = Result<T, Arc<ConfigError>>;
