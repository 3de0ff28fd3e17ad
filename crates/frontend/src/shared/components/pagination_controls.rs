use crate::shared::icons::icon;
use leptos::prelude::*;

/// Numbered page buttons, one per page, plus prev/next. Pages are 1-based.
///
/// Page counts on these screens stay small (5-20 items per page over a few
/// hundred records), so there is no button windowing.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when={move || total_pages.get() > 1}>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    title="Previous page"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                >
                    {icon("chevron-left")}
                </button>
                <For
                    each=move || 1..=total_pages.get()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || current_page.get() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    }
                />
                <button
                    class="pagination-btn"
                    title="Next page"
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}
