use contracts::domain::routine::{
    RoutineDoc, RoutinePeriod, RoutinePeriodUpdate, UpdateRoutineItemRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::api;
use crate::shared::components::form_fields::{SelectField, TextField};
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::dialog::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, page_count, paginate, SearchInput, Searchable};
use crate::shared::toast::use_toast;
use crate::shared::validators::time_range_valid;

const PAGE_SIZE: usize = 10;

pub const DAYS: [&str; 6] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
];

/// One table row: a period plus the id of the document holding it, which
/// every edit and delete must address.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutineRow {
    pub routine_id: String,
    pub period: RoutinePeriod,
}

impl Searchable for RoutineRow {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.period.day, filter)
            || contains_ci(&self.period.class_name, filter)
            || contains_ci(&self.period.subject_name, filter)
            || contains_ci(&self.period.teacher_name, filter)
    }
}

fn flatten_docs(docs: &[RoutineDoc]) -> Vec<RoutineRow> {
    docs.iter()
        .flat_map(|doc| {
            doc.routine.iter().map(|period| RoutineRow {
                routine_id: doc.record_id.clone(),
                period: period.clone(),
            })
        })
        .collect()
}

#[derive(Clone, Default)]
struct EditFields {
    day: String,
    class_name: String,
    subject_name: String,
    teacher_name: String,
    time_start: String,
    time_end: String,
}

fn day_options() -> Vec<(String, String)> {
    DAYS.iter().map(|d| (d.to_string(), d.to_string())).collect()
}

#[component]
pub fn RoutineList() -> impl IntoView {
    let toast = use_toast();

    let (docs, set_docs) = signal(Vec::<RoutineDoc>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (day_filter, set_day_filter) = signal(String::new());
    let (class_filter, set_class_filter) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (editing, set_editing) = signal(Option::<RoutineRow>::None);

    let fields = RwSignal::new(EditFields::default());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_routines().await {
                Ok(list) => {
                    set_docs.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let filtered = Memo::new(move |_| {
        let rows = flatten_docs(&docs.get());
        let rows = filter_list(&rows, &search.get());
        let day = day_filter.get();
        let class = class_filter.get();
        rows.into_iter()
            .filter(|r| day.is_empty() || r.period.day == day)
            .filter(|r| class.is_empty() || r.period.class_name == class)
            .collect::<Vec<_>>()
    });

    // class filter options come from the loaded data itself
    let class_names = Memo::new(move |_| {
        let mut names: Vec<String> = flatten_docs(&docs.get())
            .into_iter()
            .map(|r| r.period.class_name)
            .filter(|n| !n.is_empty())
            .collect();
        names.sort();
        names.dedup();
        names
    });
    let total_pages = Memo::new(move |_| page_count(filtered.get().len(), PAGE_SIZE));
    let paged = Memo::new(move |_| paginate(&filtered.get(), page.get(), PAGE_SIZE));

    let delete_one = move |row: RoutineRow| {
        if !confirm("Delete this routine entry?") {
            return;
        }
        spawn_local(async move {
            match api::delete_routine_item(&row.routine_id, row.period.record_id).await {
                Ok(()) => {
                    toast.success("Routine entry deleted");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let open_edit = move |row: RoutineRow| {
        fields.set(EditFields {
            day: row.period.day.clone(),
            class_name: row.period.class_name.clone(),
            subject_name: row.period.subject_name.clone(),
            teacher_name: row.period.teacher_name.clone(),
            time_start: row.period.time_start.clone(),
            time_end: row.period.time_end.clone(),
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
        let request = UpdateRoutineItemRequest {
            routine_item_id: row.period.record_id.clone(),
            updated_data: RoutinePeriodUpdate {
                day: current.day,
                class_name: current.class_name,
                subject_name: current.subject_name,
                teacher_name: current.teacher_name,
                time_start: current.time_start,
                time_end: current.time_end,
            },
        };
        spawn_local(async move {
            match api::update_routine_item(&row.routine_id, &request).await {
                Ok(()) => {
                    toast.success("Routine entry updated");
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
                <h1 class="page__title">"Class Routine"</h1>
                <A href="/new-routine" attr:class="button button--primary">
                    {icon("plus")}
                    "New Routine"
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
                    placeholder="Search by day, class, subject or teacher"
                />
                <select
                    class="toolbar__select"
                    prop:value=move || day_filter.get()
                    on:change=move |ev| {
                        set_day_filter.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                >
                    <option value="">"All Days"</option>
                    {DAYS
                        .iter()
                        .map(|d| view! { <option value=*d>{*d}</option> })
                        .collect_view()}
                </select>
                <select
                    class="toolbar__select"
                    prop:value=move || class_filter.get()
                    on:change=move |ev| {
                        set_class_filter.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                >
                    <option value="">"All Classes"</option>
                    {move || {
                        class_names
                            .get()
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Day"</th>
                        <th>"Period"</th>
                        <th>"Time"</th>
                        <th>"Class"</th>
                        <th>"Subject"</th>
                        <th>"Teacher"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || paged.get()
                        key=|row| row.period.record_id.clone()
                        children=move |row| {
                            let for_edit = row.clone();
                            let for_delete = row.clone();
                            view! {
                                <tr>
                                    <td>{row.period.day.clone()}</td>
                                    <td>{row.period.period.clone()}</td>
                                    <td>{format!("{} - {}", row.period.time_start, row.period.time_end)}</td>
                                    <td>{row.period.class_name.clone()}</td>
                                    <td>{row.period.subject_name.clone()}</td>
                                    <td>{row.period.teacher_name.clone()}</td>
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
                <p class="empty-state">"No routine entries found"</p>
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
                                title="Edit Routine Entry"
                                on_close=Callback::new(move |_| set_editing.set(None))
                            >
                                <div class="form-grid">
                                    <SelectField
                                        label="Day"
                                        value=field_signal(|f| f.day.clone())
                                        on_change=Callback::new(move |v| fields.update(|f| f.day = v))
                                        options=Signal::derive(day_options)
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

    fn doc(id: &str, periods: &[(&str, &str)]) -> RoutineDoc {
        RoutineDoc {
            record_id: id.to_string(),
            routine: periods
                .iter()
                .map(|(pid, day)| RoutinePeriod {
                    record_id: pid.to_string(),
                    day: day.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn flatten_carries_parent_id_onto_each_row() {
        let docs = vec![
            doc("r1", &[("p1", "Saturday"), ("p2", "Sunday")]),
            doc("r2", &[("p3", "Monday")]),
        ];
        let rows = flatten_docs(&docs);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].routine_id, "r1");
        assert_eq!(rows[1].routine_id, "r1");
        assert_eq!(rows[2].routine_id, "r2");
        assert_eq!(rows[2].period.record_id, "p3");
    }

    #[test]
    fn rows_search_over_day_class_subject_teacher() {
        let mut period = RoutinePeriod::default();
        period.day = "Saturday".into();
        period.class_name = "Class 7".into();
        period.subject_name = "Physics".into();
        period.teacher_name = "Mr. Karim".into();
        let row = RoutineRow {
            routine_id: "r1".into(),
            period,
        };
        assert!(row.matches_filter("satur"));
        assert!(row.matches_filter("physics"));
        assert!(row.matches_filter("karim"));
        assert!(!row.matches_filter("chemistry"));
    }
}
