use std::collections::HashMap;

use contracts::domain::exam_routine::{ExamEntry, NewExamRoutineRequest};
use contracts::domain::exam_type::ExamType;
use contracts::domain::school_class::SchoolClass;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::classes::api as classes_api;
use crate::domain::exam_types::api as exam_types_api;
use crate::domain::routines::list::DAYS;
use crate::shared::entry_list::{error_key, EntryRows};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::shared::validators::time_range_valid;
use crate::system::auth::context::current_admin;

fn validate_entries(entries: &[ExamEntry]) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        let required = [
            ("examType", &entry.exam_type, "Exam type is required"),
            ("day", &entry.day, "Day is required"),
            ("date", &entry.date, "Date is required"),
            ("timeStart", &entry.time_start, "Start time is required"),
            ("timeEnd", &entry.time_end, "End time is required"),
            ("subjectName", &entry.subject_name, "Subject is required"),
            ("className", &entry.class_name, "Class is required"),
            ("roomNumber", &entry.room_number, "Room number is required"),
            ("supervisor", &entry.supervisor, "Supervisor is required"),
        ];
        for (key, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(error_key(key, i), message.to_string());
            }
        }
        if !entry.time_start.is_empty()
            && !entry.time_end.is_empty()
            && !time_range_valid(&entry.time_start, &entry.time_end)
        {
            errors.insert(
                error_key("timeRange", i),
                "End time must be after start time".to_string(),
            );
        }
    }
    errors
}

#[component]
pub fn NewExamRoutinePage() -> impl IntoView {
    let toast = use_toast();
    let admin = current_admin();

    let blank = move || {
        let mut entry = ExamEntry::default();
        if let Some(admin) = &admin {
            entry.created_by = admin.name.clone();
            entry.teacher_id = admin.id.clone();
        }
        entry
    };

    let rows = RwSignal::new(EntryRows::new(blank()));
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    let (exam_types, set_exam_types) = signal(Vec::<ExamType>::new());
    let (classes, set_classes) = signal(Vec::<SchoolClass>::new());

    spawn_local(async move {
        match exam_types_api::fetch_exam_types().await {
            Ok(list) => set_exam_types.set(list),
            Err(e) => log::error!("failed to load exam types: {}", e),
        }
        match classes_api::fetch_classes().await {
            Ok(list) => set_classes.set(list),
            Err(e) => log::error!("failed to load classes: {}", e),
        }
    });

    let row_error = move |field: &'static str, index: usize| {
        errors.get().get(&error_key(field, index)).cloned()
    };

    let blank_for_add = blank.clone();
    let add_row = move |_| {
        rows.update(|r| r.add(blank_for_add()));
    };

    let remove_row = move |index: usize| {
        rows.update(|r| {
            errors.update(|e| {
                if !r.remove(index, e) {
                    toast.error("At least one entry is required");
                }
            });
        });
    };

    let blank_for_reset = blank.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entries = rows.get().entries();
        let validation = validate_entries(&entries);
        if !validation.is_empty() {
            errors.set(validation);
            toast.error("Please fix the errors in the form");
            return;
        }
        errors.set(HashMap::new());

        let request = NewExamRoutineRequest {
            exam_routine: entries,
        };
        let blank_for_reset = blank_for_reset.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_exam_routine(&request).await {
                Ok(()) => {
                    toast.success("Exam schedule created successfully");
                    rows.update(|r| r.reset(blank_for_reset()));
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"New Exam Schedule"</h1>
            </div>

            <form class="form-panel" on:submit=on_submit>
                <For
                    each=move || {
                        rows.get()
                            .rows()
                            .iter()
                            .cloned()
                            .enumerate()
                            .collect::<Vec<_>>()
                    }
                    key=|(_, (key, _))| *key
                    children=move |(index, (_, entry))| {
                        view! {
                            <fieldset class="entry-row">
                                <legend>{format!("Exam {}", index + 1)}</legend>
                                <div class="form-grid">
                                    <label class="field">
                                        <span class="field__label">"Exam Type"</span>
                                        <select
                                            prop:value=entry.exam_type.clone()
                                            on:change=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.exam_type = event_target_value(&ev));
                                            })
                                        >
                                            <option value="">"Select exam"</option>
                                            {move || {
                                                exam_types
                                                    .get()
                                                    .into_iter()
                                                    .map(|t| view! { <option value=t.name.clone()>{t.name.clone()}</option> })
                                                    .collect_view()
                                            }}
                                        </select>
                                        {move || row_error("examType", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Day"</span>
                                        <select
                                            prop:value=entry.day.clone()
                                            on:change=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.day = event_target_value(&ev));
                                            })
                                        >
                                            <option value="">"Select day"</option>
                                            {DAYS
                                                .iter()
                                                .map(|d| view! { <option value=*d>{*d}</option> })
                                                .collect_view()}
                                        </select>
                                        {move || row_error("day", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Date"</span>
                                        <input
                                            type="date"
                                            prop:value=entry.date.clone()
                                            on:input=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.date = event_target_value(&ev));
                                            })
                                        />
                                        {move || row_error("date", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Start Time"</span>
                                        <input
                                            type="time"
                                            prop:value=entry.time_start.clone()
                                            on:input=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.time_start = event_target_value(&ev));
                                            })
                                        />
                                        {move || row_error("timeStart", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"End Time"</span>
                                        <input
                                            type="time"
                                            prop:value=entry.time_end.clone()
                                            on:input=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.time_end = event_target_value(&ev));
                                            })
                                        />
                                        {move || row_error("timeEnd", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                        {move || row_error("timeRange", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Subject"</span>
                                        <input
                                            type="text"
                                            prop:value=entry.subject_name.clone()
                                            on:input=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.subject_name = event_target_value(&ev));
                                            })
                                        />
                                        {move || row_error("subjectName", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Class"</span>
                                        <select
                                            prop:value=entry.class_name.clone()
                                            on:change=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.class_name = event_target_value(&ev));
                                            })
                                        >
                                            <option value="">"Select class"</option>
                                            {move || {
                                                classes
                                                    .get()
                                                    .into_iter()
                                                    .map(|c| view! { <option value=c.class_name.clone()>{c.class_name.clone()}</option> })
                                                    .collect_view()
                                            }}
                                        </select>
                                        {move || row_error("className", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Room Number"</span>
                                        <input
                                            type="text"
                                            prop:value=entry.room_number.clone()
                                            on:input=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.room_number = event_target_value(&ev));
                                            })
                                        />
                                        {move || row_error("roomNumber", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                    <label class="field">
                                        <span class="field__label">"Supervisor"</span>
                                        <input
                                            type="text"
                                            prop:value=entry.supervisor.clone()
                                            on:input=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.supervisor = event_target_value(&ev));
                                            })
                                        />
                                        {move || row_error("supervisor", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                </div>
                                <button
                                    type="button"
                                    class="button button--danger button--small"
                                    on:click=move |_| remove_row(index)
                                >
                                    {icon("delete")}
                                    "Remove"
                                </button>
                            </fieldset>
                        }
                    }
                />

                <div class="form-panel__footer">
                    <button type="button" class="button button--secondary" on:click=add_row>
                        {icon("plus")}
                        "Add Another Exam"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save Schedule" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_entry() -> ExamEntry {
        ExamEntry {
            exam_type: "Half Yearly".into(),
            day: "Sunday".into(),
            date: "2024-06-10".into(),
            time_start: "10:00".into(),
            time_end: "12:00".into(),
            subject_name: "English".into(),
            class_name: "Class 8".into(),
            room_number: "204".into(),
            supervisor: "Mrs. Akter".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_entry_passes() {
        assert!(validate_entries(&[complete_entry()]).is_empty());
    }

    #[test]
    fn every_field_is_required() {
        let errors = validate_entries(&[ExamEntry::default()]);
        for key in [
            "examType",
            "day",
            "date",
            "timeStart",
            "timeEnd",
            "subjectName",
            "className",
            "roomNumber",
            "supervisor",
        ] {
            assert!(
                errors.contains_key(&error_key(key, 0)),
                "missing error for {}",
                key
            );
        }
    }

    #[test]
    fn inverted_time_range_rejected() {
        let mut entry = complete_entry();
        entry.time_start = "13:00".into();
        entry.time_end = "11:00".into();
        assert!(validate_entries(&[entry]).contains_key(&error_key("timeRange", 0)));
    }
}
