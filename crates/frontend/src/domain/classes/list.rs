use contracts::domain::school_class::{SchoolClass, SchoolClassPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::api;
use crate::shared::components::form_fields::TextField;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    contains_ci, filter_list, page_count, page_selected, paginate, select_page, SearchInput,
    Searchable,
};
use crate::shared::toast::use_toast;

const PAGE_SIZE: usize = 10;

impl Searchable for SchoolClass {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.class_name, filter) || contains_ci(&self.class_teacher, filter)
    }
}

#[component]
pub fn ClassList() -> impl IntoView {
    let toast = use_toast();

    let (classes, set_classes) = signal(Vec::<SchoolClass>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (editing, set_editing) = signal(Option::<SchoolClass>::None);

    let edit_name = RwSignal::new(String::new());
    let edit_teacher = RwSignal::new(String::new());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_classes().await {
                Ok(list) => {
                    set_classes.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let filtered = Memo::new(move |_| filter_list(&classes.get(), &search.get()));
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PAGE_SIZE));
    let paged = Memo::new(move |_| paginate(&filtered.get(), page.get(), PAGE_SIZE));
    let page_ids = Memo::new(move |_| {
        paged
            .get()
            .into_iter()
            .map(|item| item.record_id)
            .collect::<Vec<_>>()
    });

    let on_search = Callback::new(move |value: String| {
        set_search.set(value);
        set_page.set(1);
        set_selected.set(Vec::new());
    });

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|sel| {
            if checked {
                if !sel.contains(&id) {
                    sel.push(id);
                }
            } else {
                sel.retain(|s| s != &id);
            }
        });
    };

    let delete_selected = move |_| {
        let ids = selected.get();
        if ids.is_empty() {
            toast.error("Select at least one class to delete");
            return;
        }
        if !confirm(&format!("Delete {} class(es)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            match api::delete_classes(ids).await {
                Ok(()) => {
                    toast.success("Classes deleted successfully");
                    set_selected.set(Vec::new());
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let delete_one = move |id: String| {
        if !confirm("Delete this class?") {
            return;
        }
        spawn_local(async move {
            match api::delete_classes(vec![id]).await {
                Ok(()) => {
                    toast.success("Class deleted successfully");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_edit = move |class: SchoolClass| {
        edit_name.set(class.class_name.clone());
        edit_teacher.set(class.class_teacher.clone());
        set_editing.set(Some(class));
    };

    let save_edit = move |_| {
        let Some(current) = editing.get() else {
            return;
        };
        let payload = SchoolClassPayload {
            class_name: edit_name.get().trim().to_string(),
            class_teacher: edit_teacher.get().trim().to_string(),
        };
        if payload.class_name.is_empty() || payload.class_teacher.is_empty() {
            toast.error("Class name and teacher are both required");
            return;
        }
        spawn_local(async move {
            match api::update_class(&current.record_id, &payload).await {
                Ok(()) => {
                    toast.success("Class updated successfully");
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
                <h1 class="page__title">"All Classes"</h1>
                <div class="page__actions">
                    <button class="button button--danger" on:click=delete_selected>
                        {icon("delete")}
                        "Delete Selected"
                    </button>
                    <A href="/new-class" attr:class="button button--primary">
                        {icon("plus")}
                        "Add Class"
                    </A>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="toolbar">
                <SearchInput value=search on_change=on_search placeholder="Search by class or teacher" />
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>
                            <input
                                type="checkbox"
                                title="Select all on this page"
                                prop:checked=move || page_selected(&selected.get(), &page_ids.get())
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    set_selected.update(|sel| select_page(sel, &page_ids.get(), checked));
                                }
                            />
                        </th>
                        <th>"Class Name"</th>
                        <th>"Class Teacher"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|class| class.record_id.clone()
                        children=move |class| {
                            let id = class.record_id.clone();
                            let id_for_delete = id.clone();
                            let class_for_edit = class.clone();
                            view! {
                                <tr>
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id))
                                        on_change=Callback::new({
                                            let id = class.record_id.clone();
                                            move |checked| toggle_select(id.clone(), checked)
                                        })
                                    />
                                    <td>{class.class_name.clone()}</td>
                                    <td>{class.class_teacher.clone()}</td>
                                    <td class="table__actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| open_edit(class_for_edit.clone())
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
                <p class="empty-state">"No classes found"</p>
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
                                title="Edit Class"
                                on_close=Callback::new(move |_| set_editing.set(None))
                            >
                                <TextField
                                    label="Class Name"
                                    value=edit_name
                                    on_input=Callback::new(move |v| edit_name.set(v))
                                />
                                <TextField
                                    label="Class Teacher"
                                    value=edit_teacher
                                    on_input=Callback::new(move |v| edit_teacher.set(v))
                                />
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
