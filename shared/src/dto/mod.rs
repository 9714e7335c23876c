//! Data Transfer Objects for API communication.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod envelope;
pub mod trade;
pub mod user;
pub mod wallet;

pub use auth::*;
pub use config::*;
pub use dashboard::*;
pub use envelope::*;
pub use trade::*;
pub use user::*;
pub use wallet::*;
