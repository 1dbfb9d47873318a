use super::*;
use crate::config::RouteConfig;
use crate::net::types::{RegisterRequest, SignInRequest, User};
use crate::state::session::{AuthProvider, Session};
use crate::util::guard::{GuardDecision, Redirect, public_decision};
use async_trait::async_trait;
use futures::executor::block_on;
use leptos::prelude::Owner;
use std::cell::Cell;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Pends exactly once so a concurrently joined future gets polled mid-call.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

// =============================================================
// begin / settle
// =============================================================

#[test]
fn begin_authenticated_calls() {
    let flow = SignOutFlow::new();
    assert_eq!(flow.begin(true), SignOutStep::Call);
    assert!(!flow.is_complete());
}

#[test]
fn begin_unauthenticated_skips_and_completes() {
    let flow = SignOutFlow::new();
    assert_eq!(flow.begin(false), SignOutStep::Skip);
    assert!(flow.is_complete());
}

#[test]
fn begin_while_in_flight_is_suppressed() {
    let flow = SignOutFlow::new();
    assert_eq!(flow.begin(true), SignOutStep::Call);
    assert_eq!(flow.begin(true), SignOutStep::Suppressed);
}

#[test]
fn begin_after_settle_is_suppressed() {
    let flow = SignOutFlow::new();
    assert_eq!(flow.begin(true), SignOutStep::Call);
    flow.settle(Err(AuthError::Status { status: 500 }));
    assert_eq!(flow.begin(true), SignOutStep::Suppressed);
    assert_eq!(flow.begin(false), SignOutStep::Suppressed);
}

#[test]
fn settle_failure_reports_failed_and_completes() {
    let flow = SignOutFlow::new();
    flow.begin(true);
    assert_eq!(flow.settle(Err(AuthError::Request("offline".to_owned()))), SignOutOutcome::Failed);
    assert!(flow.is_complete());
}

#[test]
fn only_suppressed_outcome_skips_redirect() {
    assert!(SignOutOutcome::SignedOut.redirects());
    assert!(SignOutOutcome::Failed.redirects());
    assert!(SignOutOutcome::Skipped.redirects());
    assert!(!SignOutOutcome::Suppressed.redirects());
}

// =============================================================
// run
// =============================================================

#[test]
fn run_success_signs_out_once() {
    let flow = SignOutFlow::new();
    let calls = &Cell::new(0);
    let outcome = block_on(flow.run(true, move || async move {
        calls.set(calls.get() + 1);
        Ok(())
    }));
    assert_eq!(outcome, SignOutOutcome::SignedOut);
    assert_eq!(calls.get(), 1);
}

#[test]
fn run_rejection_still_redirects() {
    let flow = SignOutFlow::new();
    let outcome = block_on(flow.run(true, || async { Err(AuthError::Status { status: 503 }) }));
    assert_eq!(outcome, SignOutOutcome::Failed);
    assert!(outcome.redirects());
}

#[test]
fn run_unauthenticated_never_calls_provider() {
    let flow = SignOutFlow::new();
    let calls = &Cell::new(0);
    let outcome = block_on(flow.run(false, move || async move {
        calls.set(calls.get() + 1);
        Ok(())
    }));
    assert_eq!(outcome, SignOutOutcome::Skipped);
    assert!(outcome.redirects());
    assert_eq!(calls.get(), 0);
}

#[test]
fn concurrent_runs_invoke_provider_exactly_once() {
    let flow = SignOutFlow::new();
    let calls = &Cell::new(0);
    let sign_out = move || async move {
        calls.set(calls.get() + 1);
        YieldOnce(false).await;
        Ok(())
    };

    let (first, second) = block_on(futures::future::join(flow.run(true, sign_out), flow.run(true, sign_out)));

    assert_eq!(first, SignOutOutcome::SignedOut);
    assert_eq!(second, SignOutOutcome::Suppressed);
    assert_eq!(calls.get(), 1);
}

#[test]
fn cloned_flow_shares_in_flight_guard() {
    let flow = SignOutFlow::new();
    let rerendered = flow.clone();
    assert_eq!(flow.begin(true), SignOutStep::Call);
    assert_eq!(rerendered.begin(true), SignOutStep::Suppressed);
}

// =============================================================
// Sign-out against a session provider
// =============================================================

struct RejectingSignOut;

#[async_trait(?Send)]
impl AuthProvider for RejectingSignOut {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(Some(User {
            id: "u1".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            avatar_url: None,
        }))
    }

    async fn sign_in(&self, _request: &SignInRequest) -> Result<User, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<User, AuthError> {
        Err(AuthError::Unavailable)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Err(AuthError::Status { status: 503 })
    }
}

#[test]
fn rejected_sign_out_lands_on_signin_then_defers_to_session() {
    let owner = Owner::new();
    owner.set();
    let config = RouteConfig::default();
    let session = Session::new(std::sync::Arc::new(RejectingSignOut));
    block_on(session.resolve(1_000));
    assert!(session.state_untracked().is_authenticated());

    let flow = SignOutFlow::new();
    let outcome = block_on(flow.run(true, || session.sign_out()));
    assert_eq!(outcome, SignOutOutcome::Failed);
    assert!(outcome.redirects());

    // The provider still reports a session, so the sign-in form forwards the
    // user to the default landing page instead of rendering.
    let state = session.state_untracked();
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(
        public_decision(&state, None, config.default_redirect),
        GuardDecision::Redirect(Redirect::replacing("/dashboard"))
    );

    // A re-render of the sign-out page does not retry the call.
    assert_eq!(block_on(flow.run(true, || session.sign_out())), SignOutOutcome::Suppressed);
}
