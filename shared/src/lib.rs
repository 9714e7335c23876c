//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between the web client and the
//! TetherDesk backend API.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{success, message, data}` response envelope
//!     and the server-side paginator wrapper
//!   - **[`dto::auth`]**: Login, registration and password-reset bodies
//!   - **[`dto::user`]**: The raw user record as the server sends it
//!   - **[`dto::config`]**: Platform-wide system configuration
//!   - **[`dto::dashboard`]**: The dashboard payload the session gate hydrates from
//!   - **[`dto::trade`]**: Bid/ask records and placement bodies
//!   - **[`dto::wallet`]**: Transactions, investments, plans and referrals
//! - **[`amount`]**: Lossless decimal currency amounts
//! - **[`utils`]**: Serde helpers for the server's integer-coded booleans
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON via `serde`. The backend keeps snake_case field
//! names except where noted with `#[serde(rename = ...)]` (the dashboard
//! payload uses camelCase for its derived lists). Currency values arrive as
//! either JSON numbers or decimal strings and are always decoded into
//! [`amount::Amount`] so no precision is lost in transit.

pub mod amount;
pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience.
pub use amount::Amount;
pub use dto::*;
