//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and `PublicRoute` evaluate these on every session or
//! location change and only then touch the router. Both return `Loading`
//! whenever the session is still resolving, so nothing renders and nothing
//! redirects on a stale authentication value.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos_router::NavigateOptions;

use crate::config::RouteConfig;
use crate::state::navigation::NavigationIntent;
use crate::state::session::SessionState;

/// A navigation the guard wants performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    /// Replace the current history entry so "back" does not return to the guard.
    pub replace: bool,
    pub intent: Option<NavigationIntent>,
}

impl Redirect {
    pub fn replacing(to: impl Into<String>) -> Self {
        Self { to: to.into(), replace: true, intent: None }
    }

    #[must_use]
    pub fn with_intent(mut self, intent: NavigationIntent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn navigate_options(&self) -> NavigateOptions {
        NavigateOptions { replace: self.replace, ..NavigateOptions::default() }
    }
}

/// What a guard shows for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: neutral indicator only.
    Loading,
    /// Render the guarded child view.
    Render,
    Redirect(Redirect),
}

/// Decide for an authenticated-only route at `current_path`.
pub fn protected_decision(session: &SessionState, current_path: &str, config: &RouteConfig) -> GuardDecision {
    if session.loading {
        return GuardDecision::Loading;
    }
    if session.is_authenticated() {
        return GuardDecision::Render;
    }
    let redirect = Redirect::replacing(config.signin_path);
    if config.is_public_path(current_path) {
        return GuardDecision::Redirect(redirect);
    }
    GuardDecision::Redirect(redirect.with_intent(NavigationIntent::new(current_path)))
}

/// Decide for a sign-in/register route. A saved intent beats `default_target`.
pub fn public_decision(
    session: &SessionState,
    intent: Option<&NavigationIntent>,
    default_target: &str,
) -> GuardDecision {
    if session.loading {
        return GuardDecision::Loading;
    }
    if !session.is_authenticated() {
        return GuardDecision::Render;
    }
    let target = intent.map_or(default_target, NavigationIntent::path);
    GuardDecision::Redirect(Redirect::replacing(target))
}
