//! Domain Layer
//!
//! Package resolution rules, independent of where lock files come from.
//!
//! ## Structure
//!
//! - `entities/` - Lock-file records, package descriptions, servicing table
//! - `value_objects/` - Versions, identities, content hashes, asset paths
//! - `services/` - Description builder, install-path and assembly resolvers
//! - `ports/` - File system, environment and servicing interfaces
//!
//! ## Design Principles
//!
//! 1. **Injected I/O** - Hash-marker reads and variable lookups go through ports
//! 2. **Immutable outputs** - Descriptions are fully built before they are returned
//! 3. **Ordered results** - Every list keeps lock-file order

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
