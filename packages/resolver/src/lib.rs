//! # Mortar Resolver
//!
//! Session-configuration internals for dependency resolution: layered
//! settings lookup, local cache path resolution, platform proxy translation
//! and repository descriptors.
//!
//! ## Design
//!
//! - **Snapshot-based configuration** - every lookup goes through an
//!   immutable [`ConfigSources`] snapshot, never live process state
//! - **Explicit precedence** - each setting names its sources in order:
//!   environment variable, host property, built-in default
//! - **Fail-open proxy translation** - an unusable proxy configuration
//!   degrades to a direct connection with a warning, never an error
//! - **Observation is opt-in** - listener slots stay empty unless tracing
//!   is requested, so normal operation carries no overhead
//!
//! The engine that downloads and resolves artifacts consumes the values
//! assembled here; it is not part of this crate.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

// Core modules
pub mod config;
pub mod error;
pub mod proxy;
pub mod repository;
pub mod session;

// Prelude with canonical types
pub mod prelude;

// Essential public API - only what consumers actually need
pub use crate::prelude::*;
