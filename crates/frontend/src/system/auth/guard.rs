use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only with a session, the fallback otherwise
#[component]
pub fn RequireAuth(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
