//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation and home directory lookup
//! - `environment` - Process environment variables
//! - `settings` - `global.json` discovery
//! - `servicing` - Servicing index loader

pub mod environment;
pub mod fs;
pub mod servicing;
pub mod settings;

// Re-export for convenience
pub use environment::ProcessEnvironment;
pub use fs::LocalFs;
pub use servicing::ServicingIndex;
pub use settings::GlobalSettings;
