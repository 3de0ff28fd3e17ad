use contracts::domain::exam_type::{ExamType, ExamTypeUpdate};
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

impl Searchable for ExamType {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.title, filter)
    }
}

#[component]
pub fn ExamTypeList() -> impl IntoView {
    let toast = use_toast();

    let (exam_types, set_exam_types) = signal(Vec::<ExamType>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (editing, set_editing) = signal(Option::<ExamType>::None);

    let edit_name = RwSignal::new(String::new());
    let edit_title = RwSignal::new(String::new());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_exam_types().await {
                Ok(list) => {
                    set_exam_types.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let filtered = Memo::new(move |_| filter_list(&exam_types.get(), &search.get()));
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
            toast.error("Select at least one exam type to delete");
            return;
        }
        if !confirm(&format!("Delete {} exam type(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            match api::delete_exam_types(ids).await {
                Ok(()) => {
                    toast.success("Exam types deleted successfully");
                    set_selected.set(Vec::new());
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let delete_one = move |id: String| {
        if !confirm("Delete this exam type?") {
            return;
        }
        spawn_local(async move {
            match api::delete_exam_type(&id).await {
                Ok(()) => {
                    toast.success("Exam type deleted successfully");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_edit = move |exam_type: ExamType| {
        edit_name.set(exam_type.name.clone());
        edit_title.set(exam_type.title.clone());
        set_editing.set(Some(exam_type));
    };

    let save_edit = move |_| {
        let Some(current) = editing.get() else {
            return;
        };
        let payload = ExamTypeUpdate {
            name: edit_name.get().trim().to_string(),
            title: edit_title.get().trim().to_string(),
        };
        if payload.name.is_empty() || payload.title.is_empty() {
            toast.error("Exam name and title are both required");
            return;
        }
        spawn_local(async move {
            match api::update_exam_type(&current.record_id, &payload).await {
                Ok(()) => {
                    toast.success("Exam type updated successfully");
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
                <h1 class="page__title">"Exam Types"</h1>
                <div class="page__actions">
                    <button class="button button--danger" on:click=delete_selected>
                        {icon("delete")}
                        "Delete Selected"
                    </button>
                    <A href="/new-exam-type" attr:class="button button--primary">
                        {icon("plus")}
                        "Add Exam Type"
                    </A>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="toolbar">
                <SearchInput value=search on_change=on_search placeholder="Search exam types" />
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
                        <th>"Exam Name"</th>
                        <th>"Exam Title"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|exam_type| exam_type.record_id.clone()
                        children=move |exam_type| {
                            let id = exam_type.record_id.clone();
                            let id_for_delete = id.clone();
                            let for_edit = exam_type.clone();
                            view! {
                                <tr>
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id))
                                        on_change=Callback::new({
                                            let id = exam_type.record_id.clone();
                                            move |checked| toggle_select(id.clone(), checked)
                                        })
                                    />
                                    <td>{exam_type.name.clone()}</td>
                                    <td>{exam_type.title.clone()}</td>
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
                <p class="empty-state">"No exam types found"</p>
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
                                title="Edit Exam Type"
                                on_close=Callback::new(move |_| set_editing.set(None))
                            >
                                <TextField
                                    label="Exam Name"
                                    value=edit_name
                                    on_input=Callback::new(move |v| edit_name.set(v))
                                />
                                <TextField
                                    label="Exam Title"
                                    value=edit_title
                                    on_input=Callback::new(move |v| edit_title.set(v))
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
