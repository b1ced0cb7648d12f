//! Helpers for running tests inside a `figment::Jail`.

use anyhow::{Result, anyhow};
use figment::Jail;

/// Run `f` inside a fresh [`Jail`] and hand back whatever it produced.
///
/// Environment variables and files created through the jail are discarded
/// when `f` returns, whether or not it succeeded.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or `f` fails; the jail's
/// [`figment::Error`] is rendered into the `anyhow` message.
///
/// # Examples
///
/// ```
/// let contents = flatconf_test_helpers::with_jail(|j| {
///     j.create_file("app.json", "{}")?;
///     Ok(std::fs::read_to_string("app.json").unwrap_or_default())
/// })?;
/// assert_eq!(contents, "{}");
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut Jail) -> figment::error::Result<T>,
{
    let mut produced = None;
    Jail::try_with(|jail| f(jail).map(|value| produced = Some(value)))
        .map_err(|err| anyhow!("jailed test failed: {err}"))?;
    produced.ok_or_else(|| anyhow!("jailed closure produced no value"))
}

/// Set every `(name, value)` pair as an environment variable of `jail`.
///
/// The variables are removed again when the jail is dropped.
pub fn set_envs(jail: &mut Jail, vars: &[(&str, &str)]) {
    for (name, value) in vars {
        jail.set_env(name, value);
    }
}

/// Turn a loader error into a [`figment::Error`] so jailed closures can
/// propagate it with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adaptor, which hands over ownership"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
