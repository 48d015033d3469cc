use crate::routes::routes::AppRoutes;
use crate::shared::notifications::{NotificationService, ToastHost};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shared by every screen
    provide_context(NotificationService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
        <ToastHost />
    }
}
