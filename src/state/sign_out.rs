//! Sign-out flow with a single-call guarantee.
//!
//! DESIGN
//! ======
//! The flow calls the provider at most once per instance. A second start
//! while a call is pending is suppressed, not queued. A failed call is logged
//! and swallowed, so the caller always ends up on the sign-in redirect.

#[cfg(test)]
#[path = "sign_out_test.rs"]
mod sign_out_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::error::AuthError;

/// What `SignOutFlow::begin` decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOutStep {
    /// Caller must invoke the provider and pass the result to `settle`.
    Call,
    /// Session already signed out; nothing to call.
    Skip,
    /// Another run owns the call, or the flow already finished.
    Suppressed,
}

/// Terminal result of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut,
    /// Provider rejected; error was logged.
    Failed,
    Skipped,
    Suppressed,
}

impl SignOutOutcome {
    /// Every run that reaches a decision redirects; suppressed runs defer to
    /// the run that owns the call.
    pub fn redirects(self) -> bool {
        !matches!(self, Self::Suppressed)
    }
}

/// In-flight and completion flags for one sign-out attempt.
#[derive(Clone, Debug, Default)]
pub struct SignOutFlow {
    in_flight: Arc<AtomicBool>,
    complete: Arc<AtomicBool>,
}

impl SignOutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.complete.load(Ordering::Acquire)
    }

    /// Decide whether this run should call the provider.
    pub fn begin(&self, authenticated: bool) -> SignOutStep {
        if self.is_complete() {
            return SignOutStep::Suppressed;
        }
        if !authenticated {
            self.complete.store(true, Ordering::Release);
            return SignOutStep::Skip;
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SignOutStep::Suppressed;
        }
        SignOutStep::Call
    }

    /// Record the provider's result. Errors stop here.
    pub fn settle(&self, result: Result<(), AuthError>) -> SignOutOutcome {
        let outcome = match result {
            Ok(()) => SignOutOutcome::SignedOut,
            Err(e) => {
                leptos::logging::warn!("sign-out failed, redirecting anyway: {e}");
                SignOutOutcome::Failed
            }
        };
        self.complete.store(true, Ordering::Release);
        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    /// `begin`, then call `sign_out` if this run owns the call, then `settle`.
    pub async fn run<F, Fut>(&self, authenticated: bool, sign_out: F) -> SignOutOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), AuthError>>,
    {
        match self.begin(authenticated) {
            SignOutStep::Call => self.settle(sign_out().await),
            SignOutStep::Skip => SignOutOutcome::Skipped,
            SignOutStep::Suppressed => SignOutOutcome::Suppressed,
        }
    }
}
