//! Tests for the fluent setup builder.

use std::path::Path;

use mortar::{
    ConfigSources, Mortar, ProxyCandidate, ProxySelector, RepositoryLayout, SetupError, Url,
};

fn sources() -> ConfigSources {
    ConfigSources::new()
        .with_env("MORTAR_HOME", "/opt/mortar")
        .with_property("user.home", "/home/tester")
}

#[test]
fn test_setup_orders_central_before_local() {
    let setup = Mortar::with_sources(sources())
        .cache_sub_path("local-repo")
        .build()
        .expect("Failed to build setup");

    assert_eq!(setup.repositories.len(), 2);
    assert_eq!(setup.repositories[0].id(), "central");
    assert_eq!(setup.repositories[1].id(), "local");
    assert_eq!(
        setup.repositories[1].url(),
        "file:///home/tester/.m2/repository"
    );
    assert_eq!(
        setup.session.local_cache().as_path(),
        Path::new("/opt/mortar/local-repo")
    );
}

#[test]
fn test_empty_cache_sub_path_is_rejected() {
    let result = Mortar::with_sources(sources()).build();

    assert!(matches!(result, Err(SetupError::EmptyCachePath)));
}

/// Selector that always proposes the same HTTP proxy.
struct FixedProxy;

impl ProxySelector for FixedProxy {
    fn select(&self, _target: &Url) -> Vec<ProxyCandidate> {
        vec![ProxyCandidate::Http {
            host: "proxy.example.com".to_string(),
            port: 8080,
        }]
    }
}

#[test]
fn test_proxy_reaches_central_but_not_local() {
    let setup = Mortar::with_sources(sources().with_property("http.proxyUser", "alice"))
        .proxy_selector(FixedProxy)
        .cache_sub_path("local-repo")
        .build()
        .expect("Failed to build setup");

    let central = &setup.repositories[0];
    let proxy = central.proxy().expect("Failed to attach proxy");
    assert_eq!(proxy.host(), "proxy.example.com");
    assert_eq!(proxy.port(), 8080);
    assert_eq!(
        proxy
            .credentials()
            .expect("Failed to attach credentials")
            .username(),
        "alice"
    );

    assert!(setup.repositories[1].proxy().is_none());
}

#[test]
fn test_environment_proxy_applies_by_default() {
    let setup =
        Mortar::with_sources(sources().with_env("HTTP_PROXY", "http://proxy.example.com:3128"))
            .cache_sub_path("local-repo")
            .build()
            .expect("Failed to build setup");

    let proxy = setup.repositories[0]
        .proxy()
        .expect("Failed to attach proxy");
    assert_eq!(proxy.scheme(), "http");
    assert_eq!(proxy.port(), 3128);
}

#[test]
fn test_tracing_flag_reaches_the_session() {
    let setup = Mortar::with_sources(sources())
        .cache_sub_path("local-repo")
        .tracing(true)
        .build()
        .expect("Failed to build setup");

    assert!(setup.session.transfer_listener().is_some());
    assert!(setup.session.repository_listener().is_some());
}

#[test]
fn test_both_repositories_use_the_default_layout() {
    let setup = Mortar::with_sources(sources())
        .cache_sub_path("local-repo")
        .build()
        .expect("Failed to build setup");

    assert!(setup
        .repositories
        .iter()
        .all(|repository| repository.layout() == RepositoryLayout::Default));
}
