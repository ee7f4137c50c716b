//! Tests for layered setting resolution and cache path handling.

use std::path::{Path, PathBuf};

use mortar_resolver::config::keys;
use mortar_resolver::{
    ConfigSources, SetupError, default_repository_url, resolve_cache_dir, user_home,
};

#[test]
fn test_env_var_wins_over_property() {
    let sources = ConfigSources::new()
        .with_env("MORTAR_HOME", "/opt/mortar")
        .with_property("mortar.home", "/srv/mortar");

    assert_eq!(sources.resolve(&keys::HOME), "/opt/mortar");
}

#[test]
fn test_property_wins_when_env_unset() {
    let sources = ConfigSources::new().with_property("mortar.home", "/srv/mortar");

    assert_eq!(sources.resolve(&keys::HOME), "/srv/mortar");
}

#[test]
fn test_default_applies_when_nothing_set() {
    let sources = ConfigSources::new();

    assert_eq!(sources.resolve(&keys::HOME), "..");
}

#[test]
fn test_set_but_empty_source_still_wins() {
    let sources = ConfigSources::new()
        .with_env("MORTAR_HOME", "")
        .with_property("mortar.home", "/srv/mortar");

    assert_eq!(sources.resolve(&keys::HOME), "");
}

#[test]
fn test_cache_dir_under_configured_home() {
    let sources = ConfigSources::new().with_env("MORTAR_HOME", "/opt/mortar");

    let dir = resolve_cache_dir(&sources, "local-repo").expect("Failed to resolve cache dir");

    assert_eq!(dir.as_path(), Path::new("/opt/mortar/local-repo"));
}

#[test]
fn test_relative_home_is_absolutized_against_working_dir() {
    let sources = ConfigSources::new();

    let dir = resolve_cache_dir(&sources, "local-repo").expect("Failed to resolve cache dir");
    let cwd = std::env::current_dir().expect("Failed to read working directory");

    assert!(dir.as_path().is_absolute());
    assert_eq!(dir.as_path(), cwd.join("..").join("local-repo"));
}

#[test]
fn test_absolute_sub_path_replaces_home() {
    let sources = ConfigSources::new().with_env("MORTAR_HOME", "/opt/mortar");

    let dir =
        resolve_cache_dir(&sources, "/var/cache/mortar").expect("Failed to resolve cache dir");

    assert_eq!(dir.as_path(), Path::new("/var/cache/mortar"));
}

#[test]
fn test_empty_sub_path_is_rejected() {
    let result = resolve_cache_dir(&ConfigSources::new(), "");

    assert!(matches!(result, Err(SetupError::EmptyCachePath)));
}

#[test]
fn test_default_repository_url() {
    let sources = ConfigSources::new();

    assert_eq!(
        default_repository_url(&sources),
        "http://repo1.maven.org/maven2/"
    );
}

#[test]
fn test_repository_url_env_override() {
    let sources = ConfigSources::new()
        .with_env("MORTAR_DEP_REPOSITORY", "https://mirror.example.com/maven2/")
        .with_property("mortar.dep.repository", "https://other.example.com/maven2/");

    assert_eq!(
        default_repository_url(&sources),
        "https://mirror.example.com/maven2/"
    );
}

#[test]
fn test_repository_url_property_override() {
    let sources = ConfigSources::new()
        .with_property("mortar.dep.repository", "https://other.example.com/maven2/");

    assert_eq!(
        default_repository_url(&sources),
        "https://other.example.com/maven2/"
    );
}

#[test]
fn test_user_home_prefers_host_property() {
    let sources = ConfigSources::new()
        .with_property("user.home", "/home/alice")
        .with_env("HOME", "/home/bob");

    assert_eq!(user_home(&sources), Some(PathBuf::from("/home/alice")));
}

#[test]
fn test_user_home_falls_back_to_environment() {
    let sources = ConfigSources::new()
        .with_env("HOME", "/home/bob")
        .with_env("USERPROFILE", "C:/Users/bob");

    assert_eq!(user_home(&sources), Some(PathBuf::from("/home/bob")));

    let sources = ConfigSources::new().with_env("USERPROFILE", "C:/Users/bob");

    assert_eq!(user_home(&sources), Some(PathBuf::from("C:/Users/bob")));
}

#[test]
fn test_user_home_empty_counts_as_absent() {
    let sources = ConfigSources::new().with_env("HOME", "");

    assert_eq!(user_home(&sources), None);
}

#[test]
fn test_user_home_empty_source_falls_through() {
    let sources = ConfigSources::new()
        .with_property("user.home", "")
        .with_env("HOME", "/home/bob");

    assert_eq!(user_home(&sources), Some(PathBuf::from("/home/bob")));

    let sources = ConfigSources::new()
        .with_env("HOME", "")
        .with_env("USERPROFILE", "C:/Users/bob");

    assert_eq!(user_home(&sources), Some(PathBuf::from("C:/Users/bob")));
}

#[test]
fn test_user_home_absent() {
    assert_eq!(user_home(&ConfigSources::new()), None);
}
