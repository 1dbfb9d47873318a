//! Sign-out route: end the session once, then return to sign in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The effect waits for the session to resolve, then hands the call to
//! `SignOutFlow`, which suppresses re-entrant runs triggered by re-renders.
//! The sign-in redirect fires whether or not the provider call succeeded.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::guard::AuthGate;
use crate::components::loading_indicator::LoadingIndicator;
use crate::state::sign_out::SignOutFlow;
use crate::util::guard::Redirect;

#[component]
pub fn SignOutPage(gate: AuthGate) -> impl IntoView {
    let navigate = use_navigate();
    let flow = SignOutFlow::new();

    Effect::new(move || {
        let state = gate.session.state();
        if state.loading {
            return;
        }
        let flow = flow.clone();
        let navigate = navigate.clone();
        let redirect = Redirect::replacing(gate.config.signin_path);
        leptos::task::spawn_local(async move {
            let outcome = flow.run(state.is_authenticated(), || gate.session.sign_out()).await;
            if outcome.redirects() {
                navigate(&redirect.to, redirect.navigate_options());
            }
        });
    });

    view! { <LoadingIndicator/> }
}
