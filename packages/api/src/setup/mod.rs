//! Resolution setup builder API modules
//!
//! Provides the complete fluent API for assembling the session and
//! repository list a dependency-resolution engine runs against.

pub mod builder;

// Re-export all public types for convenience
pub use builder::*;
