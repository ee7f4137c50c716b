//! Layered configuration lookup for session assembly.
//!
//! Every setting resolves through an ordered list of sources: deployment
//! environment variable, host-supplied process property, built-in default.
//! The order is part of each setting's contract, spelled out by its
//! [`SettingKey`], and all lookups go through an immutable [`ConfigSources`]
//! snapshot rather than live process state.

pub mod keys;
pub mod paths;
pub mod sources;

pub use keys::SettingKey;
pub use paths::{ConfiguredPath, resolve_cache_dir, user_home};
pub use sources::{ConfigSources, default_repository_url};
