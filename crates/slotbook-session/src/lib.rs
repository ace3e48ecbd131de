//! Session lifecycle for Slotbook.
//!
//! This crate handles who the user is and how we know:
//!
//! 1. **Lifecycle** — the four-phase auth state machine ([`AuthPhase`])
//! 2. **Session store** — the single owner of Identity and the
//!    credential slot ([`SessionStore`]): hydrate, login, logout,
//!    register, invalidate
//! 3. **Role resolution** — the pure administrator predicate
//!    ([`is_administrator`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Route guard / screens (above)  ← branch on phase and identity
//!     ↕
//! Session layer (this crate)  ← owns Identity, mutates the credential
//!     ↕
//! Gateway layer (below)  ← attaches the credential to requests
//! ```

mod roles;
mod state;
mod store;

pub use roles::is_administrator;
pub use state::AuthPhase;
pub use store::SessionStore;
