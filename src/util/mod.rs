//! Shared utility helpers.

pub mod error;

pub use error::{GridMatchError, GridMatchResult};
