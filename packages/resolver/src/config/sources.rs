//! Configuration snapshots and layered value resolution.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use super::keys::{self, SettingKey};

static PROCESS: OnceCell<ConfigSources> = OnceCell::new();

/// Immutable snapshot of environment variables and host-supplied properties.
///
/// Resolution never reads live process state. Capture the process environment
/// once with [`ConfigSources::from_process`], or build a snapshot explicitly
/// when embedding or testing.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    env: HashMap<String, String>,
    properties: HashMap<String, String>,
}

impl ConfigSources {
    /// Empty snapshot with no environment variables and no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the live process environment, captured once per process.
    ///
    /// Properties start empty; embedding hosts layer their own on a clone
    /// with [`ConfigSources::with_property`].
    pub fn from_process() -> &'static Self {
        PROCESS.get_or_init(|| Self {
            env: std::env::vars_os()
                .filter_map(|(name, value)| {
                    Some((name.into_string().ok()?, value.into_string().ok()?))
                })
                .collect(),
            properties: HashMap::new(),
        })
    }

    /// Set an environment variable in this snapshot.
    #[must_use]
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Set a host property in this snapshot.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Environment variable by name, if set.
    #[must_use]
    pub fn env(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    /// Host property by name, if set.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Resolve a setting through its ordered sources.
    ///
    /// The first source that is set wins, even when its value is empty;
    /// emptiness checks belong to the caller.
    #[must_use]
    pub fn resolve(&self, key: &SettingKey) -> &str {
        key.env
            .and_then(|name| self.env(name))
            .or_else(|| self.property(key.property))
            .unwrap_or(key.default)
    }
}

/// URL of the default remote repository, honoring overrides.
#[must_use]
pub fn default_repository_url(sources: &ConfigSources) -> &str {
    sources.resolve(&keys::REPOSITORY_URL)
}
