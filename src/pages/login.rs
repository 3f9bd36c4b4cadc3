//! Login page starting the SSO redirect flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::SessionError;

use crate::state::auth::use_session;
use crate::util::auth::HOME_ROUTE;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth();
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    // Already signed in (e.g. back button after login): go home.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });

    let on_sign_in = move |_| {
        if auth.get_untracked().loading {
            return;
        }
        info.set("Redirecting to sign-in...".to_owned());
        session.spawn(move |manager| async move {
            if let Err(e) = manager.login().await {
                info.set(login_error_message(&e));
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Universal Knowledge Chatbot"</h1>
                <p class="login-card__subtitle">"Sign in with your organization account"</p>
                <button
                    class="login-button"
                    on:click=on_sign_in
                    disabled=move || auth.get().loading
                >
                    "Sign in"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

fn login_error_message(error: &SessionError) -> String {
    format!("Sign-in failed: {error}. Please try again.")
}
