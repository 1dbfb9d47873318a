//! REST API helpers for the authentication collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `AuthError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, AuthError>`; callers decide whether a failure
//! is shown, logged, or treated as "signed out".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::AuthError;
use super::types::{RegisterRequest, SignInRequest, User};
use crate::state::session::AuthProvider;

pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const SIGNIN_ENDPOINT: &str = "/api/auth/signin";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const SIGNOUT_ENDPOINT: &str = "/api/auth/signout";

/// How a `/api/auth/me` status should be read.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, PartialEq, Eq)]
enum MeStatus {
    /// Session valid; the body holds the user.
    Present,
    /// No session.
    Anonymous,
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_me_status(status: u16) -> Result<MeStatus, AuthError> {
    match status {
        200..=299 => Ok(MeStatus::Present),
        401 | 403 => Ok(MeStatus::Anonymous),
        status => Err(AuthError::Status { status }),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn ensure_success(status: u16) -> Result<(), AuthError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(AuthError::Status { status }) }
}

#[cfg(feature = "hydrate")]
fn request_error(e: gloo_net::Error) -> AuthError {
    match e {
        gloo_net::Error::SerdeError(e) => AuthError::Decode(e.to_string()),
        other => AuthError::Request(other.to_string()),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// Returns `Ok(None)` when the server reports no session.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with an
/// unexpected status, or the body is not a `User`.
pub async fn fetch_current_user() -> Result<Option<User>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .send()
            .await
            .map_err(request_error)?;
        match classify_me_status(resp.status())? {
            MeStatus::Anonymous => Ok(None),
            MeStatus::Present => resp
                .json::<User>()
                .await
                .map(Some)
                .map_err(|e| AuthError::Decode(e.to_string())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Unavailable)
    }
}

/// Sign in with email and password via `POST /api/auth/signin`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn sign_in(request: &SignInRequest) -> Result<User, AuthError> {
    post_for_user(SIGNIN_ENDPOINT, request).await
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the server refuses the account.
pub async fn register(request: &RegisterRequest) -> Result<User, AuthError> {
    post_for_user(REGISTER_ENDPOINT, request).await
}

/// End the session via `POST /api/auth/signout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn sign_out() -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGNOUT_ENDPOINT)
            .send()
            .await
            .map_err(request_error)?;
        ensure_success(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Unavailable)
    }
}

async fn post_for_user<T: serde::Serialize>(endpoint: &str, payload: &T) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(payload)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        ensure_success(resp.status())?;
        resp.json::<User>().await.map_err(|e| AuthError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, payload);
        Err(AuthError::Unavailable)
    }
}

/// `AuthProvider` backed by the server's cookie session over HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAuthProvider;

#[async_trait(?Send)]
impl AuthProvider for HttpAuthProvider {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        fetch_current_user().await
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<User, AuthError> {
        sign_in(request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError> {
        register(request).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        sign_out().await
    }
}
