//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod environment;
pub mod file_system;
pub mod servicing;

pub use environment::{Environment, MapEnvironment};
pub use file_system::{FileSystem, FsError, FsResult};
pub use servicing::{NoServicing, ServicingSource};
