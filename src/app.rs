//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{auth_callback::AuthCallbackPage, home::HomePage, login::LoginPage};
use crate::state::auth::{build_session_manager, provide_session};

/// Root application component.
///
/// Provides the client configuration and the session, then sets up
/// client-side routing. The session lives exactly as long as this component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    provide_context(config.clone());
    provide_session(build_session_manager(&config));

    view! {
        <Stylesheet id="leptos" href="/pkg/knowledge-chat.css"/>
        <Title text="Universal Knowledge Chatbot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
