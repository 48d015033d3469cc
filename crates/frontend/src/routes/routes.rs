use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_item::ui::list::ItemList;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn MainLayout() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let username = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <Router>
            <div class="shell">
                <nav class="shell__nav">
                    <A href="/">{icon("categories")}" Categories"</A>
                    <A href="/items">{icon("items")}" Items"</A>
                    <div class="shell__user">
                        <span>{username}</span>
                        <button
                            class="btn btn-icon"
                            title="Sign out"
                            on:click=move |_| do_logout(set_auth_state)
                        >
                            {icon("logout")}
                        </button>
                    </div>
                </nav>
                <main class="shell__content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=CategoryList />
                        <Route path=path!("/items") view=ItemList />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </RequireAuth>
    }
}
