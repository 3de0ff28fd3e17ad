use contracts::domain::banner::Banner;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::api;
use crate::shared::api_utils::image_url;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_display_date;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, filter_list, page_count, paginate, SearchInput, Searchable,
};
use crate::shared::toast::use_toast;

const PAGE_SIZE: usize = 6;

impl Searchable for Banner {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.title, filter) || contains_ci(&self.description, filter)
    }
}

#[component]
pub fn BannerList() -> impl IntoView {
    let toast = use_toast();

    let (banners, set_banners) = signal(Vec::<Banner>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_banners().await {
                Ok(list) => {
                    set_banners.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let filtered = Memo::new(move |_| filter_list(&banners.get(), &search.get()));
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PAGE_SIZE));
    let paged = Memo::new(move |_| paginate(&filtered.get(), page.get(), PAGE_SIZE));

    let on_search = Callback::new(move |value: String| {
        set_search.set(value);
        set_page.set(1);
    });

    let delete_one = move |id: String| {
        if !confirm("Delete this banner?") {
            return;
        }
        spawn_local(async move {
            match api::delete_banner(&id).await {
                Ok(()) => {
                    toast.success("Banner deleted successfully");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"All Banners"</h1>
                <div class="page__actions">
                    <A href="/post-banner" attr:class="button button--primary">
                        {icon("plus")}
                        "Post Banner"
                    </A>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="toolbar">
                <SearchInput value=search on_change=on_search placeholder="Search banners" />
            </div>

            <div class="card-grid">
                <For
                    each=move || paged.get()
                    key=|banner| banner.record_id.clone()
                    children=move |banner| {
                        let id = banner.record_id.clone();
                        view! {
                            <div class="card">
                                <img class="card__image" src=image_url(&banner.image_url) alt=banner.title.clone() />
                                <div class="card__body">
                                    <h3 class="card__title">{banner.title.clone()}</h3>
                                    <p class="card__text">{banner.description.clone()}</p>
                                    <span class="card__date">{format_display_date(&banner.created_at)}</span>
                                </div>
                                <div class="card__actions">
                                    <button
                                        class="button button--icon button--danger"
                                        title="Delete"
                                        on:click=move |_| delete_one(id.clone())
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || filtered.get().is_empty()>
                <p class="empty-state">"No banners found"</p>
            </Show>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                on_page_change=Callback::new(move |p| set_page.set(p))
            />
        </div>
    }
}
