//! Session core: token storage, the auth gate and the hydrated user context.

pub mod context;
pub mod gate;
pub mod token;

pub use context::{provide_session_context, use_session, SessionContext, UserProfile};
pub use gate::SessionGate;
