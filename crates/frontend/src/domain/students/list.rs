use contracts::domain::school_class::SchoolClass;
use contracts::domain::section::Section;
use contracts::domain::student::Student;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use web_sys::FormData;

use super::api;
use crate::domain::classes::api as classes_api;
use crate::domain::sections::api as sections_api;
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

impl Searchable for Student {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.id, filter)
            || contains_ci(&self.name, filter)
            || contains_ci(&self.mobile, filter)
            || contains_ci(&self.email, filter)
    }
}

#[derive(Clone, Default)]
struct EditFields {
    name: String,
    gender: String,
    student_class: String,
    section: String,
    class_roll: String,
    address: String,
    mobile: String,
    email: String,
}

fn edit_form_data(fields: &EditFields, photo: Option<&web_sys::File>) -> Result<FormData, String> {
    let fail = |_| "Failed to build form data".to_string();
    let form = FormData::new().map_err(fail)?;
    let pairs = [
        ("name", &fields.name),
        ("gender", &fields.gender),
        ("studentClass", &fields.student_class),
        ("section", &fields.section),
        ("classRoll", &fields.class_roll),
        ("address", &fields.address),
        ("mobile", &fields.mobile),
        ("email", &fields.email),
    ];
    for (key, value) in pairs {
        form.append_with_str(key, value).map_err(fail)?;
    }
    if let Some(file) = photo {
        form.append_with_blob_and_filename("profilePic", file, &file.name())
            .map_err(fail)?;
    }
    Ok(form)
}

fn gender_options() -> Vec<(String, String)> {
    vec![
        ("Male".to_string(), "Male".to_string()),
        ("Female".to_string(), "Female".to_string()),
        ("Other".to_string(), "Other".to_string()),
    ]
}

#[component]
pub fn StudentList() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();

    let (students, set_students) = signal(Vec::<Student>::new());
    let (classes, set_classes) = signal(Vec::<SchoolClass>::new());
    let (sections, set_sections) = signal(Vec::<Section>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let (search, set_search) = signal(String::new());
    let (class_filter, set_class_filter) = signal(String::new());
    let (section_filter, set_section_filter) = signal(String::new());
    let (gender_filter, set_gender_filter) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (editing, set_editing) = signal(Option::<Student>::None);

    let fields = RwSignal::new(EditFields::default());
    let new_photo = RwSignal::new_local(Option::<web_sys::File>::None);
    let photo_preview = RwSignal::new(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_students().await {
                Ok(list) => {
                    set_students.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    spawn_local(async move {
        match classes_api::fetch_classes().await {
            Ok(list) => set_classes.set(list),
            Err(e) => log::error!("failed to load classes: {}", e),
        }
        match sections_api::fetch_sections().await {
            Ok(list) => set_sections.set(list),
            Err(e) => log::error!("failed to load sections: {}", e),
        }
    });

    // Any filter change resets the page and clears the selection.
    let reset_view = move || {
        set_page.set(1);
        set_selected.set(Vec::new());
    };

    let filtered = Memo::new(move |_| {
        let by_search = filter_list(&students.get(), &search.get());
        let class = class_filter.get();
        let section = section_filter.get();
        let gender = gender_filter.get();
        by_search
            .into_iter()
            .filter(|s| class.is_empty() || s.student_class == class)
            .filter(|s| section.is_empty() || s.section == section)
            .filter(|s| gender.is_empty() || s.gender == gender)
            .collect::<Vec<_>>()
    });
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PAGE_SIZE));
    let paged = Memo::new(move |_| paginate(&filtered.get(), page.get(), PAGE_SIZE));
    let page_ids = Memo::new(move |_| {
        paged
            .get()
            .into_iter()
            .map(|item| item.record_id)
            .collect::<Vec<_>>()
    });

    let class_options = Signal::derive(move || {
        classes
            .get()
            .into_iter()
            .map(|c| (c.class_name.clone(), c.class_name))
            .collect::<Vec<_>>()
    });
    let section_options = Signal::derive(move || {
        sections
            .get()
            .into_iter()
            .map(|s| (s.section_name.clone(), s.section_name))
            .collect::<Vec<_>>()
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
            toast.error("Select at least one student to delete");
            return;
        }
        if !confirm(&format!("Delete {} student(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            match api::delete_students(ids).await {
                Ok(()) => {
                    toast.success("Students deleted successfully");
                    set_selected.set(Vec::new());
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let delete_one = move |id: String| {
        if !confirm("Delete this student? This cannot be undone.") {
            return;
        }
        spawn_local(async move {
            match api::delete_student(&id).await {
                Ok(()) => {
                    toast.success("Student deleted successfully");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_edit = move |student: Student| {
        fields.set(EditFields {
            name: student.name.clone(),
            gender: student.gender.clone(),
            student_class: student.student_class.clone(),
            section: student.section.clone(),
            class_roll: student.class_roll.clone(),
            address: student.address.clone(),
            mobile: student.mobile.clone(),
            email: student.email.clone(),
        });
        new_photo.set(None);
        photo_preview.set(if student.profile_pic.is_empty() {
            None
        } else {
            Some(image_url(&student.profile_pic))
        });
        set_editing.set(Some(student));
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
            match api::update_student(&current.record_id, form).await {
                Ok(()) => {
                    toast.success("Student updated successfully");
                    set_editing.set(None);
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let reset_filters = move |_| {
        set_search.set(String::new());
        set_class_filter.set(String::new());
        set_section_filter.set(String::new());
        set_gender_filter.set(String::new());
        reset_view();
    };

    let field_signal = move |get: fn(&EditFields) -> String| {
        Signal::derive(move || get(&fields.get()))
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"All Students"</h1>
                <div class="page__actions">
                    <button class="button button--danger" on:click=delete_selected>
                        {icon("delete")}
                        "Delete Selected"
                    </button>
                    <A href="/new-student" attr:class="button button--primary">
                        {icon("plus")}
                        "Add Student"
                    </A>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="toolbar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |value: String| {
                        set_search.set(value);
                        reset_view();
                    })
                    placeholder="Search by id, name, mobile or email"
                />
                <select
                    class="toolbar__select"
                    prop:value=move || class_filter.get()
                    on:change=move |ev| {
                        set_class_filter.set(event_target_value(&ev));
                        reset_view();
                    }
                >
                    <option value="">"All Classes"</option>
                    {move || {
                        class_options
                            .get()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    class="toolbar__select"
                    prop:value=move || section_filter.get()
                    on:change=move |ev| {
                        set_section_filter.set(event_target_value(&ev));
                        reset_view();
                    }
                >
                    <option value="">"All Sections"</option>
                    {move || {
                        section_options
                            .get()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    class="toolbar__select"
                    prop:value=move || gender_filter.get()
                    on:change=move |ev| {
                        set_gender_filter.set(event_target_value(&ev));
                        reset_view();
                    }
                >
                    <option value="">"All Genders"</option>
                    <option value="Male">"Male"</option>
                    <option value="Female">"Female"</option>
                    <option value="Other">"Other"</option>
                </select>
                <button class="button button--secondary" on:click=reset_filters>
                    {icon("refresh")}
                    "Reset"
                </button>
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
                        <th>"Class"</th>
                        <th>"Section"</th>
                        <th>"Roll"</th>
                        <th>"Mobile"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|student| student.record_id.clone()
                        children=move |student| {
                            let id = student.record_id.clone();
                            let id_for_delete = id.clone();
                            let id_for_view = id.clone();
                            let for_edit = student.clone();
                            let navigate = navigate.clone();
                            view! {
                                <tr>
                                    <TableCheckbox
                                        checked=Signal::derive(move || selected.get().contains(&id))
                                        on_change=Callback::new({
                                            let id = student.record_id.clone();
                                            move |checked| toggle_select(id.clone(), checked)
                                        })
                                    />
                                    <td>{student.id.clone()}</td>
                                    <td>{student.name.clone()}</td>
                                    <td>{student.student_class.clone()}</td>
                                    <td>{student.section.clone()}</td>
                                    <td>{student.class_roll.clone()}</td>
                                    <td>{student.mobile.clone()}</td>
                                    <td class="table__actions">
                                        <button
                                            class="button button--icon"
                                            title="View"
                                            on:click=move |_| navigate(
                                                &format!("/view-student/{}", id_for_view),
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
                <p class="empty-state">"No students found"</p>
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
                                title="Edit Student"
                                on_close=Callback::new(move |_| set_editing.set(None))
                            >
                                <div class="form-grid">
                                    <TextField
                                        label="Name"
                                        value=field_signal(|f| f.name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.name = v))
                                    />
                                    <SelectField
                                        label="Gender"
                                        value=field_signal(|f| f.gender.clone())
                                        on_change=Callback::new(move |v| fields.update(|f| f.gender = v))
                                        options=Signal::derive(gender_options)
                                    />
                                    <SelectField
                                        label="Class"
                                        value=field_signal(|f| f.student_class.clone())
                                        on_change=Callback::new(move |v| fields.update(|f| f.student_class = v))
                                        options=class_options
                                    />
                                    <SelectField
                                        label="Section"
                                        value=field_signal(|f| f.section.clone())
                                        on_change=Callback::new(move |v| fields.update(|f| f.section = v))
                                        options=section_options
                                    />
                                    <TextField
                                        label="Class Roll"
                                        value=field_signal(|f| f.class_roll.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.class_roll = v))
                                    />
                                    <TextField
                                        label="Address"
                                        value=field_signal(|f| f.address.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.address = v))
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
                                        label="New Photo (optional)"
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
