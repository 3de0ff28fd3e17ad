use contracts::dashboard::{DashboardStats, RecentActivity};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::http;
use crate::shared::icons::icon;

/// Growth numbers are computed server-side; this just renders the sign.
fn growth_label(growth: f64) -> String {
    if growth >= 0.0 {
        format!("+{:.1}%", growth)
    } else {
        format!("{:.1}%", growth)
    }
}

#[component]
fn StatCard(
    #[prop(into)] label: String,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] growth: Option<Signal<f64>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">{move || value.get()}</span>
                {growth.map(|g| view! {
                    <span class="stat-card__growth" class:stat-card__growth--down=move || g.get() < 0.0>
                        {move || growth_label(g.get())}
                    </span>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (stats, set_stats) = signal(DashboardStats::default());
    let (activities, set_activities) = signal(Vec::<RecentActivity>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = move || {
        spawn_local(async move {
            match http::get_data::<DashboardStats>("/api/admin/dashboard/stats").await {
                Ok(s) => {
                    set_stats.set(s);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load dashboard stats: {}", e);
                    set_error.set(Some(e));
                }
            }
            match http::get_data::<Vec<RecentActivity>>("/api/admin/recent-activities").await {
                Ok(list) => set_activities.set(list),
                Err(e) => log::error!("failed to load recent activities: {}", e),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-box">{e}</div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Students"
                    icon_name="students"
                    value=Signal::derive(move || stats.get().total_students.to_string())
                    growth=Signal::derive(move || stats.get().student_growth_percent)
                />
                <StatCard
                    label="Teachers"
                    icon_name="teachers"
                    value=Signal::derive(move || stats.get().total_teachers.to_string())
                    growth=Signal::derive(move || stats.get().teacher_growth_percent)
                />
                <StatCard
                    label="Attendance Rate"
                    icon_name="attendance"
                    value=Signal::derive(move || format!("{:.0}%", stats.get().attendance_rate))
                />
                <StatCard
                    label="Exams Today"
                    icon_name="exam"
                    value=Signal::derive(move || stats.get().exams_today.to_string())
                />
            </div>

            <div class="panel">
                <h2 class="panel__title">"Recent Activity"</h2>
                <Show
                    when=move || !activities.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No recent activities found"</p> }
                >
                    <ul class="activity-feed">
                        <For
                            each={move || activities.get().into_iter().take(5).enumerate().collect::<Vec<_>>()}
                            key=|(i, _)| *i
                            children=|(_, a)| {
                                view! {
                                    <li class="activity-feed__item">
                                        <span class="activity-feed__message">{a.message.clone()}</span>
                                        <span class="activity-feed__time">{a.time.clone()}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}
