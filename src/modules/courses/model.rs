//! Course data models and DTOs.
//!
//! This module re-exports course models from the `schoolhouse-models` crate.

pub use schoolhouse_models::courses::*;
