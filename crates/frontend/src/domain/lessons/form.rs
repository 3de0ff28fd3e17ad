use std::collections::HashMap;

use contracts::domain::lesson::{LessonEntry, NewLessonRequest};
use contracts::domain::school_class::SchoolClass;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::classes::api as classes_api;
use crate::domain::routines::list::DAYS;
use crate::shared::date_utils::today_iso;
use crate::shared::entry_list::{error_key, EntryRows};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::current_admin;

fn validate_entries(entries: &[LessonEntry]) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        let required = [
            ("day", &entry.day, "Day is required"),
            ("date", &entry.date, "Date is required"),
            ("className", &entry.class_name, "Class is required"),
            ("subjectName", &entry.subject_name, "Subject is required"),
            ("teacherName", &entry.teacher_name, "Teacher is required"),
            ("topicCovered", &entry.topic_covered, "Topic is required"),
        ];
        for (key, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(error_key(key, i), message.to_string());
            }
        }
    }
    errors
}

#[component]
pub fn NewLessonPage() -> impl IntoView {
    let toast = use_toast();
    let admin = current_admin();

    let blank = move || {
        let mut entry = LessonEntry::default();
        entry.date = today_iso();
        if let Some(admin) = &admin {
            entry.created_by = admin.name.clone();
            entry.teacher_id = admin.id.clone();
        }
        entry
    };

    let rows = RwSignal::new(EntryRows::new(blank()));
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    let (classes, set_classes) = signal(Vec::<SchoolClass>::new());
    spawn_local(async move {
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

        let request = NewLessonRequest { entries };
        let blank_for_reset = blank_for_reset.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_lessons(&request).await {
                Ok(()) => {
                    toast.success("Lessons saved successfully");
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
                <h1 class="page__title">"New Daily Lesson"</h1>
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
                                <legend>{format!("Lesson {}", index + 1)}</legend>
                                <div class="form-grid">
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
                                        <span class="field__label">"Teacher"</span>
                                        <input
                                            type="text"
                                            prop:value=entry.teacher_name.clone()
                                            on:input=move |ev| rows.update(|r| {
                                                r.update(index, |e| e.teacher_name = event_target_value(&ev));
                                            })
                                        />
                                        {move || row_error("teacherName", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                    </label>
                                </div>
                                <label class="field">
                                    <span class="field__label">"Topic Covered"</span>
                                    <textarea
                                        prop:value=entry.topic_covered.clone()
                                        on:input=move |ev| rows.update(|r| {
                                            r.update(index, |e| e.topic_covered = event_target_value(&ev));
                                        })
                                    ></textarea>
                                    {move || row_error("topicCovered", index).map(|e| view! { <span class="field__error">{e}</span> })}
                                </label>
                                <label class="field">
                                    <span class="field__label">"Homework"</span>
                                    <textarea
                                        prop:value=entry.homework.clone()
                                        on:input=move |ev| rows.update(|r| {
                                            r.update(index, |e| e.homework = event_target_value(&ev));
                                        })
                                    ></textarea>
                                </label>
                                <label class="field">
                                    <span class="field__label">"Note"</span>
                                    <textarea
                                        prop:value=entry.note.clone()
                                        on:input=move |ev| rows.update(|r| {
                                            r.update(index, |e| e.note = event_target_value(&ev));
                                        })
                                    ></textarea>
                                </label>
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
                        "Add Another Lesson"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save Lessons" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_entry() -> LessonEntry {
        LessonEntry {
            day: "Monday".into(),
            date: "2024-06-03".into(),
            class_name: "Class 6".into(),
            subject_name: "History".into(),
            teacher_name: "Mr. Rahman".into(),
            topic_covered: "Mughal empire".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_entry_passes() {
        assert!(validate_entries(&[complete_entry()]).is_empty());
    }

    #[test]
    fn homework_and_note_are_optional() {
        let mut entry = complete_entry();
        entry.homework = String::new();
        entry.note = String::new();
        assert!(validate_entries(&[entry]).is_empty());
    }

    #[test]
    fn required_fields_reported_per_row() {
        let entries = vec![complete_entry(), LessonEntry::default()];
        let errors = validate_entries(&entries);
        assert!(!errors.is_empty());
        for key in ["day", "className", "subjectName", "teacherName", "topicCovered"] {
            assert!(
                errors.contains_key(&error_key(key, 1)),
                "missing error for {}",
                key
            );
        }
        assert!(!errors.contains_key(&error_key("day", 0)));
    }
}
