//! Sign-in page with email + password.
//!
//! Rendered inside `PublicRoute`: once the session flips to authenticated the
//! guard performs the post-login redirect, so this page never navigates.

use leptos::prelude::*;

use crate::components::guard::AuthGate;
use crate::util::form::validate_sign_in;

#[component]
pub fn SignInPage(gate: AuthGate) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_sign_in(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            if let Err(e) = gate.session.sign_in(request).await {
                leptos::logging::warn!("sign-in failed: {e}");
                info.set(e.form_message().to_owned());
                password.set(String::new());
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"EduLearn"</h1>
                <p class="auth-card__subtitle">"Sign in to continue learning"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "New here? "
                    <a href=gate.config.register_path>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
