//! Protected home page: the chat shell for a signed-in user.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::require_auth::RequireAuth;
use crate::components::session_bar::SessionBar;
use crate::state::auth::{AuthState, User};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ChatShell/>
        </RequireAuth>
    }
}

#[component]
fn ChatShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let welcome = move || auth.get().user.as_ref().map(greeting).unwrap_or_default();

    view! {
        <div class="chat-page">
            <SessionBar/>
            <main class="chat-page__body">
                <h2 class="chat-page__greeting">{welcome}</h2>
                <p class="chat-page__hint">"Ask a question to get started."</p>
            </main>
        </div>
    }
}

/// Greeting using the first word of the user's display name, or the email
/// when the name is blank.
fn greeting(user: &User) -> String {
    let name = user
        .display_name
        .split_whitespace()
        .next()
        .unwrap_or(user.email.as_str());
    format!("Welcome back, {name}")
}
