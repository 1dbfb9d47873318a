//! Root application component with routing and the session gate.
//!
//! DESIGN
//! ======
//! One `AuthGate` is built here and handed to every guard and auth page as a
//! prop. Which guard wraps which view is decided in this route table only.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::{AuthGate, ProtectedRoute, PublicRoute};
use crate::config::{RouteConfig, segment};
use crate::net::api::HttpAuthProvider;
use crate::pages::{
    dashboard::DashboardPage, my_courses::MyCoursesPage, register::RegisterPage, sign_in::SignInPage,
    sign_out::SignOutPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the session once on mount (browser only) and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = RouteConfig::from_build_env();
    let session = Session::new(Arc::new(HttpAuthProvider));
    let gate = AuthGate::new(session, config);

    // On the server the session stays resolving, so guards render only the
    // loading indicator and protected markup never leaves SSR.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(session.resolve(config.session_timeout_ms));


    view! {
        <Stylesheet id="leptos" href="/pkg/edulearn.css"/>
        <Title text="EduLearn"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment(segment(config.signin_path))
                    view=move || view! { <PublicRoute gate=gate><SignInPage gate=gate/></PublicRoute> }
                />
                <Route
                    path=StaticSegment(segment(config.register_path))
                    view=move || view! { <PublicRoute gate=gate><RegisterPage gate=gate/></PublicRoute> }
                />
                <Route path=StaticSegment(segment(config.signout_path)) view=move || view! { <SignOutPage gate=gate/> }/>
                <Route
                    path=StaticSegment(segment(config.dashboard_path))
                    view=move || view! { <ProtectedRoute gate=gate><DashboardPage gate=gate/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment(segment(config.courses_path))
                    view=move || view! { <ProtectedRoute gate=gate><MyCoursesPage gate=gate/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("")
                    view=move || {
                        let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                        view! { <Redirect path=config.default_redirect options=options/> }
                    }
                />
            </Routes>
        </Router>
    }
}
