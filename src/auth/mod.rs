//! Authentication
//!
//! Session state machine plus the Leptos provider that exposes it.

mod provider;
mod session;
#[cfg(test)]
pub(crate) mod testing;

pub use provider::{use_auth, AuthContext, AuthSessionProvider};
