//! Pre-redirect destination carried across the sign-in detour.
//!
//! ARCHITECTURE
//! ============
//! `ProtectedRoute` records an intent together with the path it redirects to.
//! `PublicRoute` on that same path consumes it once after the user signs in.
//! On any other path the intent is ignored, and reaching protected content
//! discards it.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

/// The location a user tried to visit before being sent to sign in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    from: String,
}

impl NavigationIntent {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }

    pub fn path(&self) -> &str {
        &self.from
    }
}

/// An intent bound to the redirect target it travelled with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingIntent {
    pub landing: String,
    pub intent: NavigationIntent,
}

impl PendingIntent {
    pub fn applies_to(&self, path: &str) -> bool {
        self.landing == path
    }
}

/// Reactive slot holding at most one pending intent.
#[derive(Clone, Copy, Debug)]
pub struct IntentStore {
    pending: RwSignal<Option<PendingIntent>>,
}

impl Default for IntentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentStore {
    pub fn new() -> Self {
        Self { pending: RwSignal::new(None) }
    }

    /// Remember `intent` for the redirect landing on `landing`.
    pub fn attach(&self, landing: &str, intent: NavigationIntent) {
        self.pending.set(Some(PendingIntent { landing: landing.to_owned(), intent }));
    }

    /// Intent recorded for `path`, without consuming it or tracking the read.
    pub fn peek_for(&self, path: &str) -> Option<NavigationIntent> {
        self.pending.with_untracked(|pending| {
            pending
                .as_ref()
                .filter(|p| p.applies_to(path))
                .map(|p| p.intent.clone())
        })
    }

    /// Drop any pending intent.
    pub fn clear(&self) {
        if self.pending.with_untracked(Option::is_some) {
            self.pending.set(None);
        }
    }
}
