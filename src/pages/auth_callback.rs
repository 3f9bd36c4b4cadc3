//! Landing page for the SSO provider's redirect back to the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend completes the code exchange and sets its session cookie before
//! redirecting here. The page mirrors an optional `token` parameter, asks the
//! session to re-read the current user, and then routes to `/` or `/login`
//! using the same decision the route guard applies. A provider `error`
//! parameter stops the flow and is shown with a link back to sign-in.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::ClientConfig;
use crate::state::auth::use_session;
use crate::util::auth::{LOGIN_ROUTE, callback_destination};
use crate::util::token_storage;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let params = use_query_map().get_untracked();
    let provider_error = params
        .get("error")
        .map(|code| provider_error_message(&code, params.get("error_description").as_deref()));
    let settled = RwSignal::new(false);

    if provider_error.is_none() {
        if let Some(token) = params.get("token") {
            token_storage::save(&config.token_storage_key, &token);
        }
        session.spawn(move |manager| async move {
            manager.refresh_user().await;
            settled.set(true);
        });
    }

    Effect::new(move || {
        if !settled.get() {
            return;
        }
        if let Some(destination) = callback_destination(&auth.get()) {
            navigate(destination, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                {match provider_error {
                    Some(message) => view! {
                        <h1>"Sign-in did not complete"</h1>
                        <p class="login-message">{message}</p>
                        <a class="login-button" href=LOGIN_ROUTE>"Back to sign in"</a>
                    }
                    .into_any(),
                    None => view! { <p class="login-card__subtitle">"Completing sign-in..."</p> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Message for an `error` (and optional `error_description`) query parameter.
fn provider_error_message(code: &str, description: Option<&str>) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => format!("Sign-in failed ({code}): {description}"),
        None => format!("Sign-in failed ({code})."),
    }
}
