//! Route guards gating views on session state.
//!
//! ARCHITECTURE
//! ============
//! Each guard derives a `GuardDecision` memo from the session and the current
//! location, renders from it, and performs redirects in an effect. Decisions
//! come from `util::guard`, so the component layer only wires signals to the
//! router.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_indicator::LoadingIndicator;
use crate::config::RouteConfig;
use crate::state::navigation::IntentStore;
use crate::state::session::Session;
use crate::util::guard::{GuardDecision, protected_decision, public_decision};

/// Everything a guard or auth page needs, passed explicitly as one prop.
#[derive(Clone, Copy)]
pub struct AuthGate {
    pub session: Session,
    pub config: RouteConfig,
    pub intents: IntentStore,
}

impl AuthGate {
    pub fn new(session: Session, config: RouteConfig) -> Self {
        Self { session, config, intents: IntentStore::new() }
    }
}

/// Renders `children` only for an authenticated session; otherwise sends the
/// user to sign in, remembering where they were headed.
#[component]
pub fn ProtectedRoute(gate: AuthGate, children: ChildrenFn) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let decision =
        Memo::new(move |_| protected_decision(&gate.session.state(), &location.pathname.get(), &gate.config));

    Effect::new(move || match decision.get() {
        GuardDecision::Redirect(redirect) => {
            if let Some(intent) = redirect.intent.clone() {
                gate.intents.attach(&redirect.to, intent);
            }
            leptos::logging::log!("protected route: redirecting to {}", redirect.to);
            navigate(&redirect.to, redirect.navigate_options());
        }
        GuardDecision::Render => gate.intents.clear(),
        GuardDecision::Loading => {}
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| view! { <LoadingIndicator/> }>
            {children()}
        </Show>
    }
}

/// Renders `children` (an auth form) only for a signed-out session; a
/// signed-in user goes to their saved intent or `default_target`.
#[component]
pub fn PublicRoute(
    gate: AuthGate,
    #[prop(optional)] default_target: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let default_target = default_target.unwrap_or(gate.config.default_redirect);

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let intent = gate.intents.peek_for(&path);
        public_decision(&gate.session.state(), intent.as_ref(), default_target)
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(redirect) = decision.get() {
            gate.intents.clear();
            leptos::logging::log!("public route: redirecting to {}", redirect.to);
            navigate(&redirect.to, redirect.navigate_options());
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| view! { <LoadingIndicator/> }>
            {children()}
        </Show>
    }
}
