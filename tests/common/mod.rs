//! Common test utilities for pkgres property and scenario tests.
//!
//! This module provides:
//! - `TestStore`: Isolated project, package store and cache roots in temp directories
//! - Fixtures: Lock-file records for typical package shapes
//! - `render_load_map`: Stable text rendering of an assembly load map

pub mod fixtures;
pub mod store;

pub use fixtures::*;
pub use store::*;
