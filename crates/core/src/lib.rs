//! classdef-core
//!
//! Core library for assembling class definitions destined for an index/offset
//! addressed bytecode container.
//!
//! This crate defines the reference model (types, strings, annotation sets, encoded
//! arrays, members), the canonical per-class entry, and the pool that hands out
//! class definition indices and annotation directory offsets.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends (the `classdef` CLI, a full file writer, etc.).

pub mod class;
pub mod model;
pub mod pool;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
