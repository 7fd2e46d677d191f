//! Authentication: session context and deep-link callback resolution.

pub mod callback;
pub mod deep_link;
pub mod session;

pub use callback::{resolve, CallbackAction, CallbackPayload, CallbackQuery, CallbackState, Destination};
pub use session::{AuthContext, AuthProvider, AuthSession};
