//! Header bar showing the signed-in user and a sign-out button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-out is the only session operation started from here. A failed
//! sign-out still leaves the session signed out locally, so the route guard
//! moves the user to `/login` either way; the error is shown inline until
//! that happens.

#[cfg(test)]
#[path = "session_bar_test.rs"]
mod session_bar_test;

use leptos::prelude::*;
use session::SessionError;

use crate::state::auth::{User, use_session};

/// Top bar for authenticated pages.
#[component]
pub fn SessionBar() -> impl IntoView {
    let session = use_session();
    let auth = session.auth();
    let error = RwSignal::new(None::<String>);

    let on_logout = move |_| {
        if auth.get_untracked().loading {
            return;
        }
        error.set(None);
        session.spawn(move |manager| async move {
            if let Err(e) = manager.logout().await {
                error.set(Some(sign_out_error_message(&e)));
            }
        });
    };

    view! {
        <div class="session-bar">
            <span class="session-bar__title">"Universal Knowledge Chatbot"</span>
            <span class="session-bar__spacer"></span>

            {move || auth.get().user.map(|user| view! { <UserBadge user=user/> })}

            <button
                class="btn session-bar__logout"
                on:click=on_logout
                disabled=move || auth.get().loading
                title="Sign out"
            >
                "Sign out"
            </button>

            <Show when=move || error.get().is_some()>
                <p class="session-bar__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
fn UserBadge(user: User) -> impl IntoView {
    let initials = initials(&user.display_name);
    let avatar = match user.avatar_url {
        Some(src) => view! { <img class="session-bar__avatar" src=src alt=""/> }.into_any(),
        None => view! { <span class="session-bar__avatar session-bar__avatar--initials">{initials}</span> }
            .into_any(),
    };

    view! {
        <span class="session-bar__user" title=user.email>
            {avatar}
            <span class="session-bar__name">{user.display_name}</span>
        </span>
    }
}

fn sign_out_error_message(error: &SessionError) -> String {
    format!("Sign-out failed: {error}. You have been signed out locally.")
}

/// Up to two uppercase initials from a display name; `?` when it has none.
fn initials(display_name: &str) -> String {
    let letters: String = display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "?".to_owned() } else { letters }
}
