use contracts::domain::exam_routine::{ExamEntry, ExamEntryUpdate, ExamRoutineDoc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::api;
use crate::shared::components::form_fields::TextField;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_display_date;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, page_count, paginate, SearchInput, Searchable};
use crate::shared::toast::use_toast;
use crate::shared::validators::time_range_valid;

const PAGE_SIZE: usize = 10;

/// One table row: a scheduled exam plus its parent document id.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamRow {
    pub routine_id: String,
    pub entry: ExamEntry,
}

impl Searchable for ExamRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.entry.exam_type, filter)
            || contains_ci(&self.entry.class_name, filter)
            || contains_ci(&self.entry.subject_name, filter)
            || contains_ci(&self.entry.supervisor, filter)
    }
}

fn flatten_docs(docs: &[ExamRoutineDoc]) -> Vec<ExamRow> {
    docs.iter()
        .flat_map(|doc| {
            doc.exam_routine.iter().map(|entry| ExamRow {
                routine_id: doc.record_id.clone(),
                entry: entry.clone(),
            })
        })
        .collect()
}

#[derive(Clone, Default)]
struct EditFields {
    exam_type: String,
    day: String,
    date: String,
    time_start: String,
    time_end: String,
    subject_name: String,
    class_name: String,
    room_number: String,
    supervisor: String,
}

#[component]
pub fn ExamRoutineList() -> impl IntoView {
    let toast = use_toast();

    let (docs, set_docs) = signal(Vec::<ExamRoutineDoc>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (editing, set_editing) = signal(Option::<ExamRow>::None);

    let fields = RwSignal::new(EditFields::default());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_exam_routines().await {
                Ok(list) => {
                    set_docs.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let filtered = Memo::new(move |_| filter_list(&flatten_docs(&docs.get()), &search.get()));
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PAGE_SIZE));
    let paged = Memo::new(move |_| paginate(&filtered.get(), page.get(), PAGE_SIZE));

    let delete_one = move |row: ExamRow| {
        if !confirm("Delete this exam schedule entry?") {
            return;
        }
        spawn_local(async move {
            match api::delete_exam_entry(&row.routine_id, &row.entry.record_id).await {
                Ok(()) => {
                    toast.success("Exam entry deleted");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_edit = move |row: ExamRow| {
        fields.set(EditFields {
            exam_type: row.entry.exam_type.clone(),
            day: row.entry.day.clone(),
            date: row.entry.date.clone(),
            time_start: row.entry.time_start.clone(),
            time_end: row.entry.time_end.clone(),
            subject_name: row.entry.subject_name.clone(),
            class_name: row.entry.class_name.clone(),
            room_number: row.entry.room_number.clone(),
            supervisor: row.entry.supervisor.clone(),
        });
        set_editing.set(Some(row));
    };

    let save_edit = move |_| {
        let Some(row) = editing.get() else {
            return;
        };
        let current = fields.get();
        if !time_range_valid(&current.time_start, &current.time_end) {
            toast.error("End time must be after start time");
            return;
        }
        let update = ExamEntryUpdate {
            exam_type: current.exam_type,
            day: current.day,
            date: current.date,
            time_start: current.time_start,
            time_end: current.time_end,
            subject_name: current.subject_name,
            class_name: current.class_name,
            room_number: current.room_number,
            supervisor: current.supervisor,
        };
        spawn_local(async move {
            match api::update_exam_entry(&row.routine_id, &row.entry.record_id, &update).await {
                Ok(()) => {
                    toast.success("Exam entry updated");
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
                <h1 class="page__title">"Exam Routine"</h1>
                <A href="/new-exam" attr:class="button button--primary">
                    {icon("plus")}
                    "New Exam Schedule"
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
                    placeholder="Search by exam, class, subject or supervisor"
                />
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Exam"</th>
                        <th>"Date"</th>
                        <th>"Time"</th>
                        <th>"Class"</th>
                        <th>"Subject"</th>
                        <th>"Room"</th>
                        <th>"Supervisor"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|row| row.entry.record_id.clone()
                        children=move |row| {
                            let for_edit = row.clone();
                            let for_delete = row.clone();
                            view! {
                                <tr>
                                    <td>{row.entry.exam_type.clone()}</td>
                                    <td>{format!("{} ({})", format_display_date(&row.entry.date), row.entry.day)}</td>
                                    <td>{format!("{} - {}", row.entry.time_start, row.entry.time_end)}</td>
                                    <td>{row.entry.class_name.clone()}</td>
                                    <td>{row.entry.subject_name.clone()}</td>
                                    <td>{row.entry.room_number.clone()}</td>
                                    <td>{row.entry.supervisor.clone()}</td>
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
                <p class="empty-state">"No exam schedules found"</p>
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
                                title="Edit Exam Entry"
                                on_close=Callback::new(move |_| set_editing.set(None))
                            >
                                <div class="form-grid">
                                    <TextField
                                        label="Exam"
                                        value=field_signal(|f| f.exam_type.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.exam_type = v))
                                    />
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
                                        label="Start Time"
                                        value=field_signal(|f| f.time_start.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.time_start = v))
                                        input_type="time"
                                    />
                                    <TextField
                                        label="End Time"
                                        value=field_signal(|f| f.time_end.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.time_end = v))
                                        input_type="time"
                                    />
                                    <TextField
                                        label="Subject"
                                        value=field_signal(|f| f.subject_name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.subject_name = v))
                                    />
                                    <TextField
                                        label="Class"
                                        value=field_signal(|f| f.class_name.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.class_name = v))
                                    />
                                    <TextField
                                        label="Room"
                                        value=field_signal(|f| f.room_number.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.room_number = v))
                                    />
                                    <TextField
                                        label="Supervisor"
                                        value=field_signal(|f| f.supervisor.clone())
                                        on_input=Callback::new(move |v| fields.update(|f| f.supervisor = v))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_pairs_entries_with_their_document() {
        let docs = vec![ExamRoutineDoc {
            record_id: "er1".into(),
            exam_routine: vec![
                ExamEntry {
                    record_id: "e1".into(),
                    exam_type: "Half Yearly".into(),
                    ..Default::default()
                },
                ExamEntry {
                    record_id: "e2".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }];
        let rows = flatten_docs(&docs);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.routine_id == "er1"));
    }

    #[test]
    fn search_covers_exam_and_supervisor() {
        let row = ExamRow {
            routine_id: "er1".into(),
            entry: ExamEntry {
                exam_type: "Final".into(),
                class_name: "Class 9".into(),
                subject_name: "Biology".into(),
                supervisor: "Mrs. Akter".into(),
                ..Default::default()
            },
        };
        assert!(row.matches_filter("final"));
        assert!(row.matches_filter("akter"));
        assert!(!row.matches_filter("chemistry"));
    }
}
