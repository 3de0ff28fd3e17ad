use contracts::domain::lesson::{LessonEntry, LessonUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::api;
use crate::shared::components::form_fields::{TextAreaField, TextField};
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_display_date;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, page_count, paginate, SearchInput, Searchable};
use crate::shared::toast::use_toast;

const PAGE_SIZE: usize = 10;

impl Searchable for LessonEntry {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.class_name, filter)
            || contains_ci(&self.subject_name, filter)
            || contains_ci(&self.teacher_name, filter)
            || contains_ci(&self.topic_covered, filter)
    }
}

#[derive(Clone, Default)]
struct EditFields {
    day: String,
    date: String,
    class_name: String,
    subject_name: String,
    teacher_name: String,
    topic_covered: String,
    homework: String,
    note: String,
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

#[component]
pub fn LessonList() -> impl IntoView {
    let toast = use_toast();

    let (lessons, set_lessons) = signal(Vec::<LessonEntry>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (editing, set_editing) = signal(Option::<LessonEntry>::None);
    let (viewing, set_viewing) = signal(Option::<LessonEntry>::None);

    let fields = RwSignal::new(EditFields::default());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_lessons().await {
                Ok(list) => {
                    set_lessons.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let filtered = Memo::new(move |_| filter_list(&lessons.get(), &search.get()));
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PAGE_SIZE));
    let paged = Memo::new(move |_| paginate(&filtered.get(), page.get(), PAGE_SIZE));

    let delete_one = move |lesson: LessonEntry| {
        if !confirm("Delete this lesson entry?") {
            return;
        }
        spawn_local(async move {
            match api::delete_lesson(&lesson.record_id, lesson.diary_id).await {
                Ok(()) => {
                    toast.success("Lesson deleted");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_edit = move |lesson: LessonEntry| {
        fields.set(EditFields {
            day: lesson.day.clone(),
            date: lesson.date.clone(),
            class_name: lesson.class_name.clone(),
            subject_name: lesson.subject_name.clone(),
            teacher_name: lesson.teacher_name.clone(),
            topic_covered: lesson.topic_covered.clone(),
            homework: lesson.homework.clone(),
            note: lesson.note.clone(),
        });
        set_editing.set(Some(lesson));
    };

    let save_edit = move |_| {
        let Some(lesson) = editing.get() else {
            return;
        };
        let current = fields.get();
        if current.topic_covered.trim().is_empty() {
            toast.error("Topic covered is required");
            return;
        }
        let update = LessonUpdate {
            diary_id: lesson.diary_id.clone(),
            day: current.day,
            date: current.date,
            class_name: current.class_name,
            subject_name: current.subject_name,
            teacher_name: current.teacher_name,
            topic_covered: current.topic_covered,
            homework: current.homework,
            note: current.note,
        };
        spawn_local(async move {
            match api::update_lesson(&lesson.record_id, &update).await {
                Ok(()) => {
                    toast.success("Lesson updated");
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
                <h1 class="page__title">"Daily Lessons"</h1>
                <A href="/new-lesson" attr:class="button button--primary">
                    {icon("plus")}
                    "New Lesson"
                </A>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            <div class="toolbar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |value: String| {
                        set_search.set(value);
                        set_page.set(1);
                    })
                    placeholder="Search by class, subject, teacher or topic"
                />
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Class"</th>
                        <th>"Subject"</th>
                        <th>"Teacher"</th>
                        <th>"Topic"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|lesson| lesson.record_id.clone()
                        children=move |lesson| {
                            let for_view = lesson.clone();
                            let for_edit = lesson.clone();
                            let for_delete = lesson.clone();
                            view! {
                                <tr>
                                    <td>{format!("{} ({})", format_display_date(&lesson.date), lesson.day)}</td>
                                    <td>{lesson.class_name.clone()}</td>
                                    <td>{lesson.subject_name.clone()}</td>
                                    <td>{lesson.teacher_name.clone()}</td>
                                    <td>{truncate(&lesson.topic_covered, 40)}</td>
                                    <td class="table__actions">
                                        <button
                                            class="button button--icon"
                                            title="View"
                                            on:click=move |_| set_viewing.set(Some(for_view.clone()))
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
                                            on:click=move |_| delete_one(for_delete.clone())
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
                <p class="empty-state">"No lessons found"</p>
            </Show>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                on_page_change=Callback::new(move |p| set_page.set(p))
            />

            {move || {
                viewing
                    .get()
                    .map(|lesson| {
                        view! {
                            <Modal
                                title="Lesson Details"
                                on_close=Callback::new(move |_| set_viewing.set(None))
                            >
                                <div class="lesson-detail">
                                    <p><strong>"Date: "</strong>{format!("{} ({})", format_display_date(&lesson.date), lesson.day)}</p>
                                    <p><strong>"Class: "</strong>{lesson.class_name.clone()}</p>
                                    <p><strong>"Subject: "</strong>{lesson.subject_name.clone()}</p>
                                    <p><strong>"Teacher: "</strong>{lesson.teacher_name.clone()}</p>
                                    <p><strong>"Topic Covered: "</strong>{lesson.topic_covered.clone()}</p>
                                    <p><strong>"Homework: "</strong>{lesson.homework.clone()}</p>
                                    <p><strong>"Note: "</strong>{lesson.note.clone()}</p>
                                </div>
                            </Modal>
                        }
                    })
            }}

            {move || {
                editing
                    .get()
                    .map(|_| {
                        view! {
                            <Modal
                                title="Edit Lesson"
                                on_close=Callback::new(move |_| set_editing.set(None))
                            >
                                <div class="form-grid">
                                    <TextField
                                        label="Day"
                                        value=field_signal(|f| f.day.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.day = v))
                                    />
                                    <TextField
                                        label="Date"
                                        value=field_signal(|f| f.date.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.date = v))
                                        input_type="date"
                                    />
                                    <TextField
                                        label="Class"
                                        value=field_signal(|f| f.class_name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.class_name = v))
                                    />
                                    <TextField
                                        label="Subject"
                                        value=field_signal(|f| f.subject_name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.subject_name = v))
                                    />
                                    <TextField
                                        label="Teacher"
                                        value=field_signal(|f| f.teacher_name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.teacher_name = v))
                                    />
                                </div>
                                <TextAreaField
                                    label="Topic Covered"
                                    value=field_signal(|f| f.topic_covered.clone())
                                    on_input=Callback::new(move |v| fields.update(|f| f.topic_covered = v))
                                />
                                <TextAreaField
                                    label="Homework"
                                    value=field_signal(|f| f.homework.clone())
                                    on_input=Callback::new(move |v| fields.update(|f| f.homework = v))
                                />
                                <TextAreaField
                                    label="Note"
                                    value=field_signal(|f| f.note.clone())
                                    on_input=Callback::new(move |v| fields.update(|f| f.note = v))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Algebra basics", 40), "Algebra basics");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = "a".repeat(50);
        let cut = truncate(&long, 40);
        assert_eq!(cut.chars().count(), 43);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn search_covers_topic() {
        let lesson = LessonEntry {
            class_name: "Class 6".into(),
            subject_name: "History".into(),
            teacher_name: "Mr. Rahman".into(),
            topic_covered: "Mughal empire".into(),
            ..Default::default()
        };
        assert!(lesson.matches_filter("mughal"));
        assert!(lesson.matches_filter("rahman"));
        assert!(!lesson.matches_filter("geometry"));
    }
}
