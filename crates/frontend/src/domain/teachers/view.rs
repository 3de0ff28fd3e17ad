use contracts::domain::teacher::Teacher;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::api;
use crate::shared::api_utils::image_url;
use crate::shared::icons::icon;

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
pub fn TeacherView() -> impl IntoView {
    let params = use_params_map();

    let (teacher, set_teacher) = signal(Option::<Teacher>::None);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else {
            return;
        };
        spawn_local(async move {
            match api::fetch_teacher(&id).await {
                Ok(t) => {
                    set_teacher.set(Some(t));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Teacher Profile"</h1>
                <A href="/teachers" attr:class="button button--secondary">
                    {icon("chevron-left")}
                    "Back to Teachers"
                </A>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            {move || {
                teacher
                    .get()
                    .map(|t| {
                        view! {
                            <div class="profile">
                                <div class="profile__header">
                                    <Show
                                        when={
                                            let has_pic = !t.profile_pic.is_empty();
                                            move || has_pic
                                        }
                                        fallback=|| view! { <div class="profile__avatar profile__avatar--empty">{icon("teachers")}</div> }
                                    >
                                        <img class="profile__avatar" src=image_url(&t.profile_pic) alt="Profile" />
                                    </Show>
                                    <div>
                                        <h2 class="profile__name">{t.name.clone()}</h2>
                                        <p class="profile__subtitle">{t.subject.clone()}</p>
                                    </div>
                                </div>

                                <div class="profile__section">
                                    <h3>"Personal Information"</h3>
                                    <DetailRow label="Teacher ID" value=t.id.clone() />
                                    <DetailRow label="Father's Name" value=t.father_name.clone() />
                                    <DetailRow label="Mother's Name" value=t.mother_name.clone() />
                                    <DetailRow label="Gender" value=t.gender.clone() />
                                    <DetailRow label="Education" value=t.education.clone() />
                                    <DetailRow label="Address" value=t.address.clone() />
                                </div>

                                <div class="profile__section">
                                    <h3>"Contact"</h3>
                                    <DetailRow label="Mobile" value=t.mobile.clone() />
                                    <DetailRow label="Email" value=t.email.clone() />
                                    <DetailRow label="Emergency Contact" value=t.emergency_contact.clone() />
                                </div>

                                <div class="profile__section">
                                    <h3>"Identification"</h3>
                                    <DetailRow label="NID Number" value=t.nid_number.clone() />
                                    {(!t.nid_photo.is_empty()).then(|| view! {
                                        <img class="profile__document" src=image_url(&t.nid_photo) alt="NID" />
                                    })}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
