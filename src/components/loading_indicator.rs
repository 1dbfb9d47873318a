//! Neutral placeholder shown while the session resolves or a redirect is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="loading-indicator__spinner" aria-hidden="true"></span>
            <span class="loading-indicator__label">"Loading..."</span>
        </div>
    }
}
