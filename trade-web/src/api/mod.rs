//! HTTP layer: transport helpers, error taxonomy and typed endpoints.

pub mod client;
pub mod endpoints;
pub mod error;

pub use error::{ApiError, Result};
