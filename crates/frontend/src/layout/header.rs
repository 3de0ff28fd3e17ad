use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use crate::system::auth::context::{current_admin, end_session, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let layout = use_layout();
    let (_, set_session) = use_auth();
    let navigate = use_navigate();

    let admin_name = current_admin()
        .map(|admin| admin.name)
        .unwrap_or_else(|| "Admin".to_string());

    let on_logout = move |_| {
        end_session(set_session);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="topbar">
            <div class="topbar__left">
                <button
                    class="topbar__menu-toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| layout.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <span class="topbar__brand">"School Admin"</span>
            </div>
            <div class="topbar__right">
                <span class="topbar__admin">{admin_name}</span>
                <button class="topbar__logout" on:click=on_logout>
                    {icon("logout")}
                    "Logout"
                </button>
            </div>
        </header>
    }
}
