//! The merge engine: applies layers in order and fills deferred targets.

use tracing::debug;

use crate::file::load_document;
use crate::flatten::flatten;
use crate::unmarshal::UnmarshalTarget;
use crate::{ConfigResult, FlatStore, Source};

/// Merge `sources` into a single store.
///
/// Layers are applied in the order given; on a key conflict the later layer
/// wins regardless of its kind, while keys set by only one layer all
/// survive. Every [`Source::Unmarshal`] target is then rebuilt from the final
/// store, in declaration order.
///
/// # Errors
///
/// Returns the first error raised by a layer or target: a non-struct
/// defaults value, an unreadable or malformed file, an unreadable secret
/// file, or a conversion failure while unmarshalling. No store is returned on
/// failure.
///
/// # Examples
///
/// ```
/// use flatconf::{Source, load};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Default, Deserialize, Serialize)]
/// struct AppConfig {
///     number: i32,
///     name: String,
/// }
///
/// let defaults = AppConfig { number: 42, name: "demo".into() };
/// let mut cfg = AppConfig::default();
/// let store = load([
///     Source::defaults(&defaults),
///     Source::unmarshal(&mut cfg),
///     Source::env_prefixed("FLATCONF_DOC_EXAMPLE"),
/// ])?;
/// assert_eq!(store.get_string("number")?, "42");
/// assert_eq!(cfg.number, 42);
/// # Ok::<_, std::sync::Arc<flatconf::ConfigError>>(())
/// ```
pub fn load<'a, I>(sources: I) -> ConfigResult<FlatStore>
where
    I: IntoIterator<Item = Source<'a>>,
{
    let mut store = FlatStore::new();
    let mut targets: Vec<&'a mut dyn UnmarshalTarget> = Vec::new();

    for source in sources {
        let kind = source.kind();
        let layer = match source {
            Source::Defaults(value) => value.flatten_struct()?,
            Source::File(file) => {
                debug!(path = %file.path, "loading configuration file");
                let document = load_document(&file.path, file.format)?;
                flatten(&document).into_iter().collect()
            }
            Source::Env(env) => env.collect()?,
            Source::Unmarshal(target) => {
                targets.push(target);
                continue;
            }
        };
        let keys = store.overlay(layer);
        debug!(kind, keys, "applied configuration layer");
    }

    for target in targets {
        target.unmarshal_from(&store)?;
    }
    debug!(keys = store.len(), "configuration loaded");
    Ok(store)
}
