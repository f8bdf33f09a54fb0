//! Teacher data models and DTOs.
//!
//! This module re-exports teacher models from the `schoolhouse-models` crate.

pub use schoolhouse_models::courses::Course;
pub use schoolhouse_models::teachers::*;
