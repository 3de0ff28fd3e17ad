use crate::layout::global_context::LayoutContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide layout state (sidebar open flag, expanded menu group) app-wide.
    provide_context(LayoutContext::new());

    // Provide ToastService for centralized success/error notifications.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
