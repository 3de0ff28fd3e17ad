use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;

struct NavGroup {
    name: &'static str,
    icon_name: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        name: "Students",
        icon_name: "students",
        links: &[("All Students", "/students"), ("Add Student", "/new-student")],
    },
    NavGroup {
        name: "Teachers",
        icon_name: "teachers",
        links: &[("All Teachers", "/teachers"), ("Add Teacher", "/new-teacher")],
    },
    NavGroup {
        name: "Classes",
        icon_name: "classes",
        links: &[("All Classes", "/classes"), ("Add Class", "/new-class")],
    },
    NavGroup {
        name: "Sections",
        icon_name: "sections",
        links: &[("All Sections", "/sections"), ("Add Section", "/new-section")],
    },
    NavGroup {
        name: "Class Routine",
        icon_name: "routine",
        links: &[("All Routines", "/routine"), ("Add Routine", "/new-routine")],
    },
    NavGroup {
        name: "Exams",
        icon_name: "exam",
        links: &[
            ("Exam Routine", "/exam-routine"),
            ("Add Exam Routine", "/new-exam"),
            ("Exam Types", "/exam-types"),
            ("Add Exam Type", "/new-exam-type"),
        ],
    },
    NavGroup {
        name: "Lessons",
        icon_name: "lesson",
        links: &[("All Lessons", "/lessons"), ("Add Lesson", "/new-lesson")],
    },
    NavGroup {
        name: "Notices",
        icon_name: "notice",
        links: &[("All Notices", "/notices"), ("Send Notice", "/send-notice")],
    },
    NavGroup {
        name: "Banners",
        icon_name: "banner",
        links: &[("All Banners", "/banners"), ("Post Banner", "/post-banner")],
    },
];

#[component]
fn SidebarGroup(group: &'static NavGroup) -> impl IntoView {
    let layout = use_layout();
    let name = group.name;

    view! {
        <li class="sidebar__group">
            <button
                class="sidebar__group-toggle"
                class:sidebar__group-toggle--open=move || layout.is_group_expanded(name)
                on:click=move |_| layout.toggle_group(name)
            >
                {icon(group.icon_name)}
                <span>{name}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || layout.is_group_expanded(name)>
                <ul class="sidebar__sublist">
                    {group
                        .links
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <A href=*href>{*label}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let layout = use_layout();
    let location = use_location();

    // Collapse whichever group is open after navigating away.
    Effect::new(move |prev: Option<String>| {
        let path = location.pathname.get();
        if let Some(prev_path) = prev {
            if prev_path != path {
                layout.expanded_group.set(None);
            }
        }
        path
    });

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !layout.sidebar_open.get()>
            <nav>
                <ul class="sidebar__list">
                    <li class="sidebar__item">
                        <A href="/dashboard">
                            {icon("dashboard")}
                            <span>"Dashboard"</span>
                        </A>
                    </li>
                    {NAV_GROUPS.iter().map(|group| view! { <SidebarGroup group /> }).collect_view()}
                    <li class="sidebar__item">
                        <A href="/attendance">
                            {icon("attendance")}
                            <span>"Attendance"</span>
                        </A>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}
