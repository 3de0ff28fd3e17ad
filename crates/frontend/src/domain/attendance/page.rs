use contracts::domain::attendance::RosterQuery;
use contracts::domain::school_class::SchoolClass;
use contracts::domain::section::Section;
use contracts::domain::student::Student;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::state::{AttendanceSheet, Status};
use crate::domain::classes::api as classes_api;
use crate::domain::sections::api as sections_api;
use crate::domain::students::api as students_api;
use crate::shared::date_utils::today_iso;
use crate::shared::list_utils::contains_ci;
use crate::shared::toast::use_toast;
use crate::system::auth::context::current_admin;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let toast = use_toast();
    let admin = current_admin();
    let admin_name = admin.map(|a| a.name).unwrap_or_default();

    let (classes, set_classes) = signal(Vec::<SchoolClass>::new());
    let (sections, set_sections) = signal(Vec::<Section>::new());

    let (class_id, set_class_id) = signal(String::new());
    let (section_id, set_section_id) = signal(String::new());
    let (date, set_date) = signal(today_iso());
    let (search, set_search) = signal(String::new());

    let (roster, set_roster) = signal(Vec::<Student>::new());
    let sheet = RwSignal::new(AttendanceSheet::default());
    let (loading, set_loading) = signal(false);
    let (submitting, set_submitting) = signal(false);

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

    // A loaded sheet belongs to one class/section pair; changing either
    // invalidates it.
    let clear_roster = move || {
        set_roster.set(Vec::new());
        sheet.set(AttendanceSheet::default());
        set_search.set(String::new());
    };

    let load_students = move |_| {
        let class = class_id.get();
        if class.is_empty() {
            toast.error("Select a class first");
            return;
        }
        let section = section_id.get();
        let query = RosterQuery {
            class_id: class,
            section_id: if section.is_empty() {
                None
            } else {
                Some(section)
            },
        };
        set_loading.set(true);
        spawn_local(async move {
            match students_api::search_students(&query).await {
                Ok(students) => {
                    if students.is_empty() {
                        toast.error("No students found for this class");
                    }
                    sheet.set(AttendanceSheet::load(&students));
                    set_roster.set(students);
                }
                Err(e) => toast.error(e),
            }
            set_loading.set(false);
        });
    };

    // search narrows what is shown; marks for hidden rows are untouched
    let visible = Memo::new(move |_| {
        let filter = search.get();
        roster
            .get()
            .into_iter()
            .filter(|s| {
                filter.is_empty() || contains_ci(&s.name, &filter) || contains_ci(&s.id, &filter)
            })
            .collect::<Vec<_>>()
    });

    let counts = Signal::derive(move || sheet.get().counts());

    let admin_for_submit = admin_name.clone();
    let submit = move |_| {
        let current = sheet.get();
        if roster.get().is_empty() {
            toast.error("Load a class roster first");
            return;
        }
        if !current.is_complete() {
            toast.error("Every student needs a status before submitting");
            return;
        }
        let section = section_id.get();
        let submission = current.payload(
            class_id.get(),
            if section.is_empty() {
                None
            } else {
                Some(section)
            },
            date.get(),
            admin_for_submit.clone(),
        );
        set_submitting.set(true);
        spawn_local(async move {
            match api::submit_attendance(&submission).await {
                Ok(()) => {
                    toast.success("Attendance submitted successfully");
                    clear_roster();
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Take Attendance"</h1>
            </div>

            <div class="toolbar">
                <select
                    class="toolbar__select"
                    prop:value=move || class_id.get()
                    on:change=move |ev| {
                        set_class_id.set(event_target_value(&ev));
                        clear_roster();
                    }
                >
                    <option value="">"Select class"</option>
                    {move || {
                        classes
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.record_id.clone()>{c.class_name}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    class="toolbar__select"
                    prop:value=move || section_id.get()
                    on:change=move |ev| {
                        set_section_id.set(event_target_value(&ev));
                        clear_roster();
                    }
                >
                    <option value="">"All sections"</option>
                    {move || {
                        sections
                            .get()
                            .into_iter()
                            .map(|s| view! { <option value=s.record_id.clone()>{s.section_name}</option> })
                            .collect_view()
                    }}
                </select>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:change=move |ev| set_date.set(event_target_value(&ev))
                />
                <button
                    class="button button--primary"
                    on:click=load_students
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Loading..." } else { "Load Students" }}
                </button>
            </div>

            <Show when=move || !roster.get().is_empty()>
                <div class="toolbar">
                    <input
                        type="search"
                        placeholder="Find a student by name or id"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <div class="attendance-summary">
                        {move || {
                            let (present, absent, late) = counts.get();
                            format!("Present: {} · Absent: {} · Late: {}", present, absent, late)
                        }}
                    </div>
                </div>

                <table class="table">
                    <thead>
                        <tr>
                            <th>"Roll"</th>
                            <th>"Name"</th>
                            <th>
                                <button
                                    class="button button--link"
                                    on:click=move |_| sheet.update(|s| s.mark_all(Status::Present))
                                >
                                    "Present"
                                </button>
                            </th>
                            <th>
                                <button
                                    class="button button--link"
                                    on:click=move |_| sheet.update(|s| s.mark_all(Status::Absent))
                                >
                                    "Absent"
                                </button>
                            </th>
                            <th>
                                <button
                                    class="button button--link"
                                    on:click=move |_| sheet.update(|s| s.mark_all(Status::Late))
                                >
                                    "Late"
                                </button>
                            </th>
                            <th>"Remarks"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|student| student.record_id.clone()
                            children=move |student| {
                                let id = student.record_id.clone();
                                let id_present = id.clone();
                                let id_absent = id.clone();
                                let id_late = id.clone();
                                let id_remarks = id.clone();
                                let id_mark = id.clone();
                                let mark = Signal::derive(move || {
                                    sheet.get().mark_of(&id_mark).cloned().unwrap_or_default()
                                });
                                view! {
                                    <tr>
                                        <td>{student.class_roll.clone()}</td>
                                        <td>{student.name.clone()}</td>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || mark.get().present
                                                on:change=move |_| sheet.update(|s| s.mark(&id_present, Status::Present))
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || mark.get().absent
                                                on:change=move |_| sheet.update(|s| s.mark(&id_absent, Status::Absent))
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || mark.get().late
                                                on:change=move |_| sheet.update(|s| s.mark(&id_late, Status::Late))
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                placeholder="Optional"
                                                prop:value=move || mark.get().remarks
                                                on:input=move |ev| sheet.update(|s| {
                                                    s.set_remarks(&id_remarks, event_target_value(&ev));
                                                })
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <div class="form-panel__footer">
                    <button
                        class="button button--primary"
                        on:click=submit.clone()
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Submitting..." } else { "Submit Attendance" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
