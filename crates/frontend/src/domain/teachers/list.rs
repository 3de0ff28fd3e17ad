use contracts::domain::teacher::Teacher;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use web_sys::FormData;

use super::api;
use crate::shared::api_utils::image_url;
use crate::shared::components::form_fields::{FileField, SelectField, TextField};
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

impl Searchable for Teacher {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.id, filter)
            || contains_ci(&self.name, filter)
            || contains_ci(&self.subject, filter)
            || contains_ci(&self.mobile, filter)
            || contains_ci(&self.email, filter)
    }
}

fn gender_options() -> Vec<(String, String)> {
    vec![
        ("Male".to_string(), "Male".to_string()),
        ("Female".to_string(), "Female".to_string()),
        ("Other".to_string(), "Other".to_string()),
    ]
}

fn edit_form_data(
    teacher: &EditFields,
    photo: Option<&web_sys::File>,
) -> Result<FormData, String> {
    let fail = |_| "Failed to build form data".to_string();
    let form = FormData::new().map_err(fail)?;
    form.append_with_str("name", &teacher.name).map_err(fail)?;
    form.append_with_str("fatherName", &teacher.father_name)
        .map_err(fail)?;
    form.append_with_str("motherName", &teacher.mother_name)
        .map_err(fail)?;
    form.append_with_str("address", &teacher.address)
        .map_err(fail)?;
    form.append_with_str("gender", &teacher.gender)
        .map_err(fail)?;
    form.append_with_str("education", &teacher.education)
        .map_err(fail)?;
    form.append_with_str("subject", &teacher.subject)
        .map_err(fail)?;
    form.append_with_str("mobile", &teacher.mobile)
        .map_err(fail)?;
    form.append_with_str("email", &teacher.email).map_err(fail)?;
    if let Some(file) = photo {
        form.append_with_blob_and_filename("profilePic", file, &file.name())
            .map_err(fail)?;
    }
    Ok(form)
}

#[derive(Clone, Default)]
struct EditFields {
    name: String,
    father_name: String,
    mother_name: String,
    address: String,
    gender: String,
    education: String,
    subject: String,
    mobile: String,
    email: String,
}

#[component]
pub fn TeacherList() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();

    let (teachers, set_teachers) = signal(Vec::<Teacher>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (editing, set_editing) = signal(Option::<Teacher>::None);

    let fields = RwSignal::new(EditFields::default());
    let new_photo = RwSignal::new_local(Option::<web_sys::File>::None);
    let photo_preview = RwSignal::new(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_teachers().await {
                Ok(list) => {
                    set_teachers.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let filtered = Memo::new(move |_| filter_list(&teachers.get(), &search.get()));
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
            toast.error("Select at least one teacher to delete");
            return;
        }
        if !confirm(&format!("Delete {} teacher(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            match api::delete_teachers(ids).await {
                Ok(()) => {
                    toast.success("Teachers deleted successfully");
                    set_selected.set(Vec::new());
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let delete_one = move |id: String| {
        if !confirm("Delete this teacher?") {
            return;
        }
        spawn_local(async move {
            match api::delete_teacher(&id).await {
                Ok(()) => {
                    toast.success("Teacher deleted successfully");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_edit = move |teacher: Teacher| {
        fields.set(EditFields {
            name: teacher.name.clone(),
            father_name: teacher.father_name.clone(),
            mother_name: teacher.mother_name.clone(),
            address: teacher.address.clone(),
            gender: teacher.gender.clone(),
            education: teacher.education.clone(),
            subject: teacher.subject.clone(),
            mobile: teacher.mobile.clone(),
            email: teacher.email.clone(),
        });
        new_photo.set(None);
        photo_preview.set(if teacher.profile_pic.is_empty() {
            None
        } else {
            Some(image_url(&teacher.profile_pic))
        });
        set_editing.set(Some(teacher));
    };

    let save_edit = move |_| {
        let Some(current) = editing.get() else {
            return;
        };
        let current_fields = fields.get();
        if current_fields.name.trim().is_empty() {
            toast.error("Name is required");
            return;
        }
        let photo = new_photo.get_untracked();
        let form = match edit_form_data(&current_fields, photo.as_ref()) {
            Ok(form) => form,
            Err(e) => {
                toast.error(e);
                return;
            }
        };
        spawn_local(async move {
            match api::update_teacher(&current.record_id, form).await {
                Ok(()) => {
                    toast.success("Teacher updated successfully");
                    set_editing.set(None);
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let field_signal = move |get: fn(&EditFields) -> String| {
        Signal::derive(move || get(&fields.get()))
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"All Teachers"</h1>
                <div class="page__actions">
                    <button class="button button--danger" on:click=delete_selected>
                        {icon("delete")}
                        "Delete Selected"
                    </button>
                    <A href="/new-teacher" attr:class="button button--primary">
                        {icon("plus")}
                        "Add Teacher"
                    </A>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="toolbar">
                <SearchInput
                    value=search
                    on_change=on_search
                    placeholder="Search by id, name, subject, mobile or email"
                />
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
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Subject"</th>
                        <th>"Mobile"</th>
                        <th>"Email"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|teacher| teacher.record_id.clone()
                        children=move |teacher| {
                            let id = teacher.record_id.clone();
                            let id_for_delete = id.clone();
                            let id_for_view = id.clone();
                            let for_edit = teacher.clone();
                            let navigate = navigate.clone();
                            view! {
                                <tr>
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id))
                                        on_change=Callback::new({
                                            let id = teacher.record_id.clone();
                                            move |checked| toggle_select(id.clone(), checked)
                                        })
                                    />
                                    <td>{teacher.id.clone()}</td>
                                    <td>{teacher.name.clone()}</td>
                                    <td>{teacher.subject.clone()}</td>
                                    <td>{teacher.mobile.clone()}</td>
                                    <td>{teacher.email.clone()}</td>
                                    <td class="table__actions">
                                        <button
                                            class="button button--icon"
                                            title="View"
                                            on:click=move |_| navigate(
                                                &format!("/view-teacher/{}", id_for_view),
                                                NavigateOptions::default(),
                                            )
                                        >
                                            {icon("eye")}
                                        </button>
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
                <p class="empty-state">"No teachers found"</p>
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
                                title="Edit Teacher"
                                on_close=Callback::new(move |_| set_editing.set(None))
                            >
                                <div class="form-grid">
                                    <TextField
                                        label="Name"
                                        value=field_signal(|f| f.name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.name = v))
                                    />
                                    <TextField
                                        label="Father's Name"
                                        value=field_signal(|f| f.father_name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.father_name = v))
                                    />
                                    <TextField
                                        label="Mother's Name"
                                        value=field_signal(|f| f.mother_name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.mother_name = v))
                                    />
                                    <TextField
                                        label="Address"
                                        value=field_signal(|f| f.address.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.address = v))
                                    />
                                    <SelectField
                                        label="Gender"
                                        value=field_signal(|f| f.gender.clone())
                                        on_change=Callback::new(move |v| fields.update(|f| f.gender = v))
                                        options=Signal::derive(gender_options)
                                    />
                                    <TextField
                                        label="Education"
                                        value=field_signal(|f| f.education.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.education = v))
                                    />
                                    <TextField
                                        label="Subject"
                                        value=field_signal(|f| f.subject.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.subject = v))
                                    />
                                    <TextField
                                        label="Mobile"
                                        value=field_signal(|f| f.mobile.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.mobile = v))
                                    />
                                    <TextField
                                        label="Email"
                                        value=field_signal(|f| f.email.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.email = v))
                                        input_type="email"
                                    />
                                    <FileField
                                        label="New Profile Picture (optional)"
                                        file=new_photo
                                        preview=photo_preview
                                    />
                                </div>
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
