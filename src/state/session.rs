//! Session state and the authentication collaborator it is read from.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards read `SessionState` through a `Session` handle that is passed
//! to them explicitly. The handle owns the only writes: resolution on mount,
//! sign-in/register, and sign-out. Guards never mutate it.
//!
//! TRADE-OFFS
//! ==========
//! Resolution races the provider against a deadline. A hung `/api/auth/me`
//! therefore resolves as "signed out" instead of leaving every guard on the
//! loading indicator forever.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{self, Either};
use leptos::prelude::*;

use crate::net::error::AuthError;
use crate::net::types::{RegisterRequest, SignInRequest, User};

/// The collaborator's current belief about the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True while the session is being established or refreshed.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::resolving()
    }
}

impl SessionState {
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Authentication backend consumed by the session gate.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Look up the user bound to the current session, if any.
    async fn current_user(&self) -> Result<Option<User>, AuthError>;

    async fn sign_in(&self, request: &SignInRequest) -> Result<User, AuthError>;

    async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError>;

    /// Best-effort session termination.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Shared handle to session state and its provider.
///
/// `Copy` so it can be moved into any number of view closures and effects.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    provider: StoredValue<Arc<dyn AuthProvider + Send + Sync>>,
}

impl Session {
    /// Create a handle in the resolving state.
    pub fn new(provider: Arc<dyn AuthProvider + Send + Sync>) -> Self {
        Self { state: RwSignal::new(SessionState::resolving()), provider: StoredValue::new(provider) }
    }

    /// Tracked snapshot of the session.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn state_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Re-read the session from the provider, giving up after `timeout_ms`.
    pub async fn resolve(self, timeout_ms: u64) {
        self.state.update(|s| s.loading = true);
        let provider = self.provider.get_value();
        let result = resolve_with_deadline(provider.current_user(), deadline(timeout_ms), timeout_ms).await;
        self.state.update(|s| apply_resolution(s, result));
    }

    /// Sign in and adopt the returned user.
    ///
    /// # Errors
    ///
    /// Returns the provider's error; session state is left unchanged.
    pub async fn sign_in(self, request: SignInRequest) -> Result<(), AuthError> {
        let provider = self.provider.get_value();
        let user = provider.sign_in(&request).await?;
        self.state.set(SessionState::signed_in(user));
        Ok(())
    }

    /// Create an account and adopt the returned user.
    ///
    /// # Errors
    ///
    /// Returns the provider's error; session state is left unchanged.
    pub async fn register(self, request: RegisterRequest) -> Result<(), AuthError> {
        let provider = self.provider.get_value();
        let user = provider.register(&request).await?;
        self.state.set(SessionState::signed_in(user));
        Ok(())
    }

    /// Ask the provider to end the session; clears the user on success.
    ///
    /// # Errors
    ///
    /// Returns the provider's error. The user is kept, since the server may
    /// still consider the session valid.
    pub async fn sign_out(self) -> Result<(), AuthError> {
        let provider = self.provider.get_value();
        provider.sign_out().await?;
        self.state.set(SessionState::signed_out());
        Ok(())
    }
}

/// Await `lookup`, failing with `AuthError::Timeout` if `deadline` fires first.
///
/// # Errors
///
/// Returns the lookup's own error, or `Timeout` when the deadline wins.
pub async fn resolve_with_deadline<F, D>(lookup: F, deadline: D, timeout_ms: u64) -> Result<Option<User>, AuthError>
where
    F: Future<Output = Result<Option<User>, AuthError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(lookup, deadline);
    match future::select(lookup, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AuthError::Timeout { after_ms: timeout_ms }),
    }
}

/// Fold a resolution result into session state. Always ends loading.
pub fn apply_resolution(state: &mut SessionState, result: Result<Option<User>, AuthError>) {
    state.user = match result {
        Ok(user) => user,
        Err(e) => {
            leptos::logging::warn!("session resolution failed, treating as signed out: {e}");
            None
        }
    };
    state.loading = false;
}

async fn deadline(timeout_ms: u64) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(timeout_ms)).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timeout_ms;
        future::pending::<()>().await;
    }
}
