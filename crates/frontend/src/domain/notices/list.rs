use contracts::domain::notice::{Notice, NoticeUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::api;
use crate::shared::components::form_fields::{SelectField, TextAreaField, TextField};
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_display_date;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, filter_list, page_count, paginate, SearchInput, Searchable,
};
use crate::shared::toast::use_toast;

const PAGE_SIZE: usize = 10;

impl Searchable for Notice {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.title, filter) || contains_ci(&self.content, filter)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[component]
pub fn NoticeList() -> impl IntoView {
    let toast = use_toast();

    let (notices, set_notices) = signal(Vec::<Notice>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (editing, set_editing) = signal(Option::<Notice>::None);

    let edit_title = RwSignal::new(String::new());
    let edit_content = RwSignal::new(String::new());
    let edit_priority = RwSignal::new("medium".to_string());
    let edit_active = RwSignal::new(true);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_notices().await {
                Ok(list) => {
                    set_notices.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let filtered = Memo::new(move |_| filter_list(&notices.get(), &search.get()));
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PAGE_SIZE));
    let paged = Memo::new(move |_| paginate(&filtered.get(), page.get(), PAGE_SIZE));

    let on_search = Callback::new(move |value: String| {
        set_search.set(value);
        set_page.set(1);
    });

    let priority_options = Signal::derive(|| {
        vec![
            ("low".to_string(), "Low".to_string()),
            ("medium".to_string(), "Medium".to_string()),
            ("high".to_string(), "High".to_string()),
        ]
    });

    let delete_one = move |id: String| {
        if !confirm("Delete this notice?") {
            return;
        }
        spawn_local(async move {
            match api::delete_notice(&id).await {
                Ok(()) => {
                    toast.success("Notice deleted successfully");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_edit = move |notice: Notice| {
        edit_title.set(notice.title.clone());
        edit_content.set(notice.content.clone());
        edit_priority.set(notice.priority.clone());
        edit_active.set(notice.is_active);
        set_editing.set(Some(notice));
    };

    let save_edit = move |_| {
        let Some(current) = editing.get() else {
            return;
        };
        let payload = NoticeUpdate {
            title: edit_title.get().trim().to_string(),
            content: edit_content.get().trim().to_string(),
            priority: edit_priority.get(),
            is_active: edit_active.get(),
        };
        if payload.title.is_empty() || payload.content.is_empty() {
            toast.error("Title and content are both required");
            return;
        }
        spawn_local(async move {
            match api::update_notice(&current.record_id, &payload).await {
                Ok(()) => {
                    toast.success("Notice updated successfully");
                    set_editing.set(None);
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"All Notices"</h1>
                <div class="page__actions">
                    <A href="/send-notice" attr:class="button button--primary">
                        {icon("plus")}
                        "Send Notice"
                    </A>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="toolbar">
                <SearchInput value=search on_change=on_search placeholder="Search notices" />
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Content"</th>
                        <th>"Priority"</th>
                        <th>"Posted"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|notice| notice.record_id.clone()
                        children=move |notice| {
                            let id_for_delete = notice.record_id.clone();
                            let for_edit = notice.clone();
                            let status_class = if notice.is_active {
                                "badge badge--active"
                            } else {
                                "badge badge--inactive"
                            };
                            view! {
                                <tr>
                                    <td>{notice.title.clone()}</td>
                                    <td>{truncate(&notice.content, 50)}</td>
                                    <td class="table__cell--capitalize">{notice.priority.clone()}</td>
                                    <td>{format_display_date(&notice.date_posted)}</td>
                                    <td>
                                        <span class=status_class>
                                            {if notice.is_active { "Active" } else { "Inactive" }}
                                        </span>
                                    </td>
                                    <td class="table__actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| open_edit(for_edit.clone())
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Delete"
                                            on:click=move |_| delete_one(id_for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || filtered.get().is_empty()>
                <p class="empty-state">"No notices found"</p>
            </Show>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                on_page_change=Callback::new(move |p| set_page.set(p))
            />

            {move || {
                editing
                    .get()
                    .map(|_| {
                        view! {
                            <Modal
                                title="Edit Notice"
                                on_close=Callback::new(move |_| set_editing.set(None))
                            >
                                <TextField
                                    label="Title"
                                    value=edit_title
                                    on_input=Callback::new(move |v| edit_title.set(v))
                                />
                                <TextAreaField
                                    label="Content"
                                    value=edit_content
                                    on_input=Callback::new(move |v| edit_content.set(v))
                                    rows=5
                                />
                                <SelectField
                                    label="Priority"
                                    value=edit_priority
                                    on_change=Callback::new(move |v| edit_priority.set(v))
                                    options=priority_options
                                />
                                <label class="form-field form-field--checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || edit_active.get()
                                        on:change=move |ev| edit_active.set(event_target_checked(&ev))
                                    />
                                    "Active"
                                </label>
                                <div class="modal-footer">
                                    <button class="button button--secondary" on:click=move |_| set_editing.set(None)>
                                        "Cancel"
                                    </button>
                                    <button class="button button--primary" on:click=save_edit>
                                        "Save Changes"
                                    </button>
                                </div>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_long_content() {
        let long = "a".repeat(60);
        assert_eq!(truncate(&long, 50).chars().count(), 53);
        assert!(truncate(&long, 50).ends_with("..."));
    }

    #[test]
    fn short_content_untouched() {
        assert_eq!(truncate("short", 50), "short");
    }
}
