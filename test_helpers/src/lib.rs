//! Test helpers shared across the workspace.
//!
//! Loading touches process-wide state (environment variables and relative
//! file paths), so every test that does so runs inside a [`figment::Jail`]:
//! the jail serialises access, switches into a scratch directory, and
//! restores the environment afterwards.

pub mod jail;

pub use jail::{figment_error, set_envs, with_jail};
