//! Enrolled-courses page.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::guard::AuthGate;

#[component]
pub fn MyCoursesPage(gate: AuthGate) -> impl IntoView {
    view! {
        <div class="courses-page">
            <AppHeader gate=gate/>
            <main class="courses-page__content">
                <h1>"My Courses"</h1>
                <p class="courses-page__empty">"You are not enrolled in any courses yet."</p>
            </main>
        </div>
    }
}
