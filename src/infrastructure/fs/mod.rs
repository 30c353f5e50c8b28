//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;
#[cfg(test)]
mod memory;

pub use home::home_dir;
pub use local::LocalFs;
#[cfg(test)]
pub(crate) use memory::MemoryFs;
