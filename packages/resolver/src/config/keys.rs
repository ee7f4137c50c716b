//! Well-known setting keys and their lookup contract.

/// One configurable setting with its ordered lookup sources.
///
/// A value resolves from the deployment environment variable first, then the
/// host-supplied process property, then the built-in default. The first
/// source that is set wins, even when its value is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingKey {
    /// Deployment environment variable, when one exists for this setting.
    pub env: Option<&'static str>,
    /// Process property forwarded by an embedding host.
    pub property: &'static str,
    /// Built-in fallback when neither source is set.
    pub default: &'static str,
}

/// Home directory the local artifact cache is resolved against.
pub const HOME: SettingKey = SettingKey {
    env: Some("MORTAR_HOME"),
    property: "mortar.home",
    default: "..",
};

/// URL of the default remote repository.
pub const REPOSITORY_URL: SettingKey = SettingKey {
    env: Some("MORTAR_DEP_REPOSITORY"),
    property: "mortar.dep.repository",
    default: "http://repo1.maven.org/maven2/",
};

/// Proxy username forwarded by the host. Property only; an empty value
/// means no credentials are configured.
pub const PROXY_USER: SettingKey = SettingKey {
    env: None,
    property: "http.proxyUser",
    default: "",
};

/// Proxy password forwarded by the host. Property only, consulted only
/// when [`PROXY_USER`] resolves to a non-empty username.
pub const PROXY_PASSWORD: SettingKey = SettingKey {
    env: None,
    property: "http.proxyPassword",
    default: "",
};
