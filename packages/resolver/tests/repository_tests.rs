//! Tests for the built-in repository descriptors.

use mortar_resolver::repository::{CENTRAL_ID, LOCAL_ID};
use mortar_resolver::{
    ConfigSources, RepositoryDescriptor, RepositoryLayout, SetupError, SystemProxySelector,
    central_repository, local_repository,
};

#[test]
fn test_central_repository_defaults() {
    let sources = ConfigSources::new();
    let selector = SystemProxySelector::from_sources(&sources);

    let central = central_repository(&sources, &selector);

    assert_eq!(central.id(), CENTRAL_ID);
    assert_eq!(central.layout(), RepositoryLayout::Default);
    assert_eq!(central.url(), "http://repo1.maven.org/maven2/");
    assert!(central.proxy().is_none());
}

#[test]
fn test_central_repository_honors_overrides_and_proxy() {
    let sources = ConfigSources::new()
        .with_env("MORTAR_DEP_REPOSITORY", "https://mirror.example.com/maven2/")
        .with_env("HTTPS_PROXY", "http://proxy.example.com:8080");
    let selector = SystemProxySelector::from_sources(&sources);

    let central = central_repository(&sources, &selector);

    assert_eq!(central.url(), "https://mirror.example.com/maven2/");

    let proxy = central.proxy().expect("Failed to attach proxy");
    assert_eq!(proxy.scheme(), "https");
    assert_eq!(proxy.host(), "proxy.example.com");
    assert_eq!(proxy.port(), 8080);
}

#[test]
fn test_local_repository_under_user_home() {
    let sources = ConfigSources::new().with_property("user.home", "/home/alice");

    let local = local_repository(&sources).expect("Failed to build local repository");

    assert_eq!(local.id(), LOCAL_ID);
    assert_eq!(local.layout(), RepositoryLayout::Default);
    assert_eq!(local.url(), "file:///home/alice/.m2/repository");
    assert!(local.proxy().is_none());
}

#[test]
fn test_local_repository_ignores_proxy_environment() {
    let sources = ConfigSources::new()
        .with_property("user.home", "/home/alice")
        .with_env("ALL_PROXY", "http://proxy.example.com:8080");

    let local = local_repository(&sources).expect("Failed to build local repository");

    assert!(local.proxy().is_none());
}

#[test]
fn test_local_repository_requires_a_home() {
    let result = local_repository(&ConfigSources::new());

    assert!(matches!(result, Err(SetupError::HomeUnavailable)));
}

#[test]
fn test_layout_spelling_matches_the_engine() {
    assert_eq!(RepositoryLayout::Default.as_str(), "default");
    assert_eq!(RepositoryLayout::Legacy.as_str(), "legacy");
}

#[test]
fn test_descriptor_serializes_for_handoff() {
    let sources = ConfigSources::new()
        .with_env("HTTP_PROXY", "http://proxy.example.com:8080")
        .with_property("http.proxyUser", "alice");
    let selector = SystemProxySelector::from_sources(&sources);

    let central = central_repository(&sources, &selector);
    let json = serde_json::to_string(&central).expect("Failed to serialize descriptor");
    let decoded: RepositoryDescriptor =
        serde_json::from_str(&json).expect("Failed to deserialize descriptor");

    assert_eq!(decoded, central);
    assert!(json.contains("\"central\""));
    assert!(json.contains("\"default\""));
}
