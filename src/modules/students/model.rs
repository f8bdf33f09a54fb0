//! Student data models and DTOs.
//!
//! This module re-exports student models from the `schoolhouse-models` crate.

pub use schoolhouse_models::students::*;
