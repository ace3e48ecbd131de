//! HTTP gateway for Slotbook.
//!
//! This crate owns the two things every remote interaction needs:
//!
//! 1. **Credential storage** — the single bearer-token slot
//!    ([`CredentialStore`] and its file/memory implementations)
//! 2. **The gateway** — typed, one-to-one translation of domain
//!    operations into HTTP calls ([`BookingGateway`]), with every
//!    failure normalized into the shared
//!    [`ApiError`](slotbook_types::ApiError) taxonomy
//!
//! The gateway holds no business logic: no retries, no caching, no
//! decisions about what a failure means. That belongs to the session
//! and booking layers above, which consume it through the [`AuthApi`]
//! and [`BookingApi`] traits so they can be tested against mocks.

#![allow(async_fn_in_trait)]

mod api;
mod credentials;
mod gateway;

pub use api::{AuthApi, BookingApi};
pub use credentials::{
    CredentialStore, FileCredentialStore, MemoryCredentialStore,
};
pub use gateway::BookingGateway;
