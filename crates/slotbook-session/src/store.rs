//! The session store: the single owner of Identity and the credential.
//!
//! Everything that can change who the user is goes through here —
//! hydrate, login, logout, register, invalidate. No other component
//! writes the credential slot; the gateway only reads it.
//!
//! # Concurrency note
//!
//! `SessionStore` is a plain state container, not a shared service. It
//! is owned by the application shell and driven from one task; all of
//! its async operations take `&mut self`, so overlapping mutations are
//! ruled out by the borrow checker rather than a lock.

use std::sync::Arc;

use slotbook_client::{AuthApi, CredentialStore};
use slotbook_types::{ApiError, Identity, UserId};

use crate::{AuthPhase, is_administrator};

/// Owns the authenticated identity and drives the auth lifecycle.
///
/// Generic over the auth API (mockable in tests) and the credential
/// store (file-backed in production, in-memory in tests). The
/// credential store is shared with the gateway via `Arc` — this store
/// writes the slot, the gateway reads it on every request.
pub struct SessionStore<A, S> {
    api: A,
    credentials: Arc<S>,
    identity: Option<Identity>,
    phase: AuthPhase,
}

impl<A: AuthApi, S: CredentialStore> SessionStore<A, S> {
    /// Creates a store in the `Uninitialized` phase. Call
    /// [`hydrate`](Self::hydrate) once before reading auth state.
    pub fn new(api: A, credentials: Arc<S>) -> Self {
        Self {
            api,
            credentials,
            identity: None,
            phase: AuthPhase::Uninitialized,
        }
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// The authenticated identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The authenticated user's id, if any.
    pub fn user_id(&self) -> Option<UserId> {
        self.identity.as_ref().map(|identity| identity.id)
    }

    /// Returns `true` if a verified identity is loaded.
    pub fn is_authenticated(&self) -> bool {
        self.phase.is_authenticated()
    }

    /// Returns `true` while auth-dependent rendering must suspend.
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Returns `true` iff the loaded identity holds an administrator
    /// role. Fails closed: no identity or unresolved roles answer
    /// `false`.
    pub fn is_administrator(&self) -> bool {
        self.identity
            .as_ref()
            .is_some_and(|identity| is_administrator(&identity.roles))
    }

    /// Reconstructs the session from a persisted credential, once per
    /// process lifetime.
    ///
    /// - No credential → `Anonymous`, without touching the network.
    /// - Credential present → whoami, profile, and roles are fetched;
    ///   on ANY failure the credential is cleared and the session
    ///   resolves `Anonymous`. Hydration failures are logged, never
    ///   surfaced — the user just isn't logged in.
    ///
    /// Always terminates in a ready phase. Calling it again after the
    /// first run is a no-op.
    pub async fn hydrate(&mut self) {
        if self.phase != AuthPhase::Uninitialized {
            return;
        }
        self.phase = AuthPhase::Hydrating;

        if self.credentials.load().is_none() {
            self.phase = AuthPhase::Anonymous;
            return;
        }

        match self.resolve_identity().await {
            Ok(identity) => {
                tracing::info!(user = %identity.id, "session hydrated");
                self.identity = Some(identity);
                self.phase = AuthPhase::Authenticated;
            }
            Err(err) => {
                tracing::warn!(%err, "hydration failed, clearing credential");
                self.credentials.clear();
                self.identity = None;
                self.phase = AuthPhase::Anonymous;
            }
        }
    }

    /// Resolves the stored credential into a full identity.
    ///
    /// The roles fetch is part of hydration: if roles can't be loaded,
    /// the whole hydration fails and the credential is dropped. (Login
    /// is deliberately more forgiving — see [`login`](Self::login).)
    async fn resolve_identity(&self) -> Result<Identity, ApiError> {
        let user_id = self.api.check_session().await?;
        let mut identity = self.api.fetch_user(user_id).await?;
        identity.roles = self.api.fetch_roles(user_id).await?;
        Ok(identity)
    }

    /// Exchanges credentials for a fresh token and identity.
    ///
    /// The token is persisted BEFORE this resolves, so a crash between
    /// login and the next screen still leaves a hydratable session.
    /// The follow-up roles fetch is best-effort: a failure downgrades
    /// to a warning and the identity is stored with an empty role set
    /// (the admin predicate then fails closed).
    ///
    /// # Errors
    /// - [`ApiError::Authentication`] — rejected credentials, with the
    ///   server's message
    /// - [`ApiError::Network`] — transport failure
    ///
    /// On error no state changes: no credential is stored and the
    /// phase stays where it was.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let (token, mut identity) = self.api.login(email, password).await?;
        self.credentials.store(&token);

        match self.api.fetch_roles(identity.id).await {
            Ok(roles) => identity.roles = roles,
            Err(err) => {
                tracing::warn!(%err, "could not load roles after login");
            }
        }

        tracing::info!(user = %identity.id, "logged in");
        self.identity = Some(identity);
        self.phase = AuthPhase::Authenticated;
        Ok(())
    }

    /// Logs out, locally first.
    ///
    /// The credential and identity are cleared unconditionally before
    /// the server is told, so the UI reflects the logged-out state no
    /// matter what the network does. The server notification only
    /// happens if a token existed, and its failure is swallowed.
    pub async fn logout(&mut self) {
        let had_token = self.credentials.load().is_some();
        self.credentials.clear();
        self.identity = None;
        self.phase = AuthPhase::Anonymous;
        tracing::info!("logged out");

        if had_token {
            if let Err(err) = self.api.logout().await {
                tracing::debug!(%err, "server logout failed, ignoring");
            }
        }
    }

    /// Creates a new account. Does NOT log the new user in.
    ///
    /// # Errors
    /// - [`ApiError::Conflict`] — email already registered
    /// - [`ApiError::Validation`] — input rejected by the server
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.api.register(name, email, password).await
    }

    /// Reacts to a credential rejection seen elsewhere (a 401/403 on
    /// any authenticated call, i.e. [`ApiError::invalidates_credential`]):
    /// clears the credential and identity in one step, so the two can
    /// never disagree.
    pub fn invalidate(&mut self) {
        self.credentials.clear();
        self.identity = None;
        if self.phase.is_authenticated() {
            tracing::info!("credential invalidated, session now anonymous");
            self.phase = AuthPhase::Anonymous;
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
