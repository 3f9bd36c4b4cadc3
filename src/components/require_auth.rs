//! Route guard for pages that need a signed-in user.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::auth::{GateDecision, LOGIN_ROUTE, gate_decision};

/// Render `children` only for an authenticated session.
///
/// Shows a placeholder while the session is loading and redirects to the
/// login page once it has settled without a user.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| gate_decision(&auth.get()));

    move || match decision.get() {
        GateDecision::Loading => view! {
            <div class="auth-gate auth-gate--loading">"Checking your session..."</div>
        }
        .into_any(),
        GateDecision::Render => children().into_any(),
        GateDecision::Redirect => view! { <Redirect path=LOGIN_ROUTE/> }.into_any(),
    }
}
