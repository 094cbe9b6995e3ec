//! Shared test utilities for alfredmoji integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Nothing in here touches the network: sources are
//! in-memory or tempfile-backed.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
