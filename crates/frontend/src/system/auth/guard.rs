use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::use_auth;

/// Route guard: renders its children only with a persisted admin session,
/// otherwise redirects to the login screen.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !session.get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.get().is_authenticated()>
            {children()}
        </Show>
    }
}
