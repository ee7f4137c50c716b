//! Repository descriptors consumed by the resolution engine.

pub mod descriptor;
pub mod wellknown;

pub use descriptor::{RepositoryDescriptor, RepositoryLayout};
pub use wellknown::{CENTRAL_ID, LOCAL_ID, central_repository, local_repository};
