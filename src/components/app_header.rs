//! Top bar for authenticated views.

#[cfg(test)]
#[path = "app_header_test.rs"]
mod app_header_test;

use leptos::prelude::*;

use crate::components::guard::AuthGate;
use crate::net::types::User;

/// Name shown in the header; blank until the session has a user.
fn header_name(user: Option<User>) -> String {
    user.map(|u| u.name).unwrap_or_default()
}

#[component]
pub fn AppHeader(gate: AuthGate) -> impl IntoView {
    let display_name = move || header_name(gate.session.user());
    let config = gate.config;

    view! {
        <header class="app-header">
            <span class="app-header__brand">"EduLearn"</span>
            <nav class="app-header__nav">
                <a href=config.dashboard_path>"Dashboard"</a>
                <a href=config.courses_path>"My Courses"</a>
            </nav>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">{display_name}</span>
            <a href=config.signout_path class="btn app-header__signout">"Sign out"</a>
        </header>
    }
}
