//! Authenticated landing page.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::guard::AuthGate;

#[component]
pub fn DashboardPage(gate: AuthGate) -> impl IntoView {
    let greeting = move || {
        gate.session
            .user()
            .map_or_else(|| "Welcome back".to_owned(), |u| format!("Welcome back, {}", u.name))
    };

    view! {
        <div class="dashboard-page">
            <AppHeader gate=gate/>
            <main class="dashboard-page__content">
                <h1>{greeting}</h1>
                <p>"Pick up where you left off in "<a href=gate.config.courses_path>"My Courses"</a>"."</p>
            </main>
        </div>
    }
}
