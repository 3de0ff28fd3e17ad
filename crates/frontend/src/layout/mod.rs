pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use header::Header;
use sidebar::Sidebar;

/// Authenticated page chrome: top bar, collapsible sidebar, routed content.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="shell">
            <Header />
            <div class="shell__body">
                <Sidebar />
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
