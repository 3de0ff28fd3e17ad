use contracts::domain::student::{AttendanceHistoryEntry, Student};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::api;
use crate::shared::api_utils::image_url;
use crate::shared::date_utils::{date_only, format_display_date, today_iso};
use crate::shared::icons::icon;

/// Entries within `[from, to]` inclusive, newest first. ISO dates compare
/// correctly as strings, so no parsing is needed here.
fn filter_history(
    entries: &[AttendanceHistoryEntry],
    from: &str,
    to: &str,
) -> Vec<AttendanceHistoryEntry> {
    let mut rows = entries
        .iter()
        .filter(|e| {
            let date = date_only(&e.date);
            date.as_str() >= from && date.as_str() <= to
        })
        .cloned()
        .collect::<Vec<_>>();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

fn first_of_current_month() -> String {
    let today = today_iso();
    format!("{}-01", &today[..7])
}

fn status_class(status: &str) -> &'static str {
    match status {
        "present" => "badge badge--success",
        "absent" => "badge badge--danger",
        "late" => "badge badge--warning",
        _ => "badge",
    }
}

#[component]
fn DetailRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    let value = if value.is_empty() {
        "N/A".to_string()
    } else {
        value
    };
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{value}</span>
        </div>
    }
}

#[component]
pub fn StudentView() -> impl IntoView {
    let params = use_params_map();

    let (student, set_student) = signal(Option::<Student>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (from_date, set_from_date) = signal(first_of_current_month());
    let (to_date, set_to_date) = signal(today_iso());

    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else {
            return;
        };
        spawn_local(async move {
            match api::fetch_student(&id).await {
                Ok(s) => {
                    set_student.set(Some(s));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let history = Memo::new(move |_| {
        student
            .get()
            .map(|s| filter_history(&s.attendance, &from_date.get(), &to_date.get()))
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Student Profile"</h1>
                <A href="/students" attr:class="button button--secondary">
                    {icon("chevron-left")}
                    "Back to Students"
                </A>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            {move || {
                student
                    .get()
                    .map(|s| {
                        view! {
                            <div class="profile">
                                <div class="profile__header">
                                    <Show
                                        when={
                                            let has_pic = !s.profile_pic.is_empty();
                                            move || has_pic
                                        }
                                        fallback=|| view! { <div class="profile__avatar profile__avatar--empty">{icon("students")}</div> }
                                    >
                                        <img class="profile__avatar" src=image_url(&s.profile_pic) alt="Profile" />
                                    </Show>
                                    <div>
                                        <h2 class="profile__name">{s.name.clone()}</h2>
                                        <p class="profile__subtitle">
                                            {format!("{} · Section {} · Roll {}", s.student_class, s.section, s.class_roll)}
                                        </p>
                                    </div>
                                </div>

                                <div class="profile__section">
                                    <h3>"Personal Information"</h3>
                                    <DetailRow label="Student ID" value=s.id.clone() />
                                    <DetailRow label="Father's Name" value=s.father_name.clone() />
                                    <DetailRow label="Mother's Name" value=s.mother_name.clone() />
                                    <DetailRow label="Gender" value=s.gender.clone() />
                                    <DetailRow label="Birthdate" value=format_display_date(&s.birthdate) />
                                    <DetailRow label="Group" value=s.group.clone() />
                                    <DetailRow label="Religion" value=s.religion.clone() />
                                    <DetailRow label="Address" value=s.address.clone() />
                                </div>

                                <div class="profile__section">
                                    <h3>"Contact"</h3>
                                    <DetailRow label="Mobile" value=s.mobile.clone() />
                                    <DetailRow label="Email" value=s.email.clone() />
                                </div>
                            </div>
                        }
                    })
            }}

            <Show when=move || student.get().is_some()>
                <div class="profile__section">
                    <h3>"Attendance History"</h3>
                    <div class="toolbar">
                        <label class="toolbar__label">
                            "From"
                            <input
                                type="date"
                                prop:value=move || from_date.get()
                                on:change=move |ev| set_from_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="toolbar__label">
                            "To"
                            <input
                                type="date"
                                prop:value=move || to_date.get()
                                on:change=move |ev| set_to_date.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Remarks"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || history.get()
                                key=|entry| entry.date.clone()
                                children=move |entry| {
                                    view! {
                                        <tr>
                                            <td>{format_display_date(&entry.date)}</td>
                                            <td>
                                                <span class=status_class(&entry.status)>
                                                    {entry.status.clone()}
                                                </span>
                                            </td>
                                            <td>{entry.remarks.clone()}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>

                    <Show when=move || history.get().is_empty()>
                        <p class="empty-state">"No attendance records in this range"</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, status: &str) -> AttendanceHistoryEntry {
        AttendanceHistoryEntry {
            date: date.to_string(),
            status: status.to_string(),
            remarks: String::new(),
        }
    }

    #[test]
    fn range_is_inclusive_and_newest_first() {
        let entries = vec![
            entry("2024-05-01", "present"),
            entry("2024-05-15", "absent"),
            entry("2024-05-31", "late"),
            entry("2024-06-01", "present"),
        ];
        let rows = filter_history(&entries, "2024-05-01", "2024-05-31");
        let dates: Vec<_> = rows.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-05-31", "2024-05-15", "2024-05-01"]);
    }

    #[test]
    fn timestamps_match_on_date_part() {
        let entries = vec![entry("2024-05-15T08:30:00.000Z", "present")];
        assert_eq!(filter_history(&entries, "2024-05-15", "2024-05-15").len(), 1);
    }

    #[test]
    fn status_maps_to_badge() {
        assert_eq!(status_class("present"), "badge badge--success");
        assert_eq!(status_class("absent"), "badge badge--danger");
        assert_eq!(status_class("late"), "badge badge--warning");
        assert_eq!(status_class("unknown"), "badge");
    }
}
