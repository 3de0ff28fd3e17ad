use std::collections::HashMap;

use contracts::domain::student::Student;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use super::api;
use crate::domain::students::api as students_api;
use crate::shared::components::form_fields::{FileField, TextAreaField, TextField};
use crate::shared::list_utils::filter_list;
use crate::shared::toast::use_toast;

fn validate(
    title: &str,
    content: &str,
    send_to_all: bool,
    selected_count: usize,
) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if title.trim().is_empty() {
        errors.insert("title".into(), "Title is required".into());
    }
    if content.trim().is_empty() {
        errors.insert("content".into(), "Content is required".into());
    }
    if !send_to_all && selected_count == 0 {
        errors.insert(
            "recipients".into(),
            "Select at least one student or send to all".into(),
        );
    }
    errors
}

fn build_form(
    title: &str,
    content: &str,
    student_ids: &[String],
    image: Option<&web_sys::File>,
) -> Result<FormData, String> {
    let fail = |_| "Failed to build form data".to_string();
    let form = FormData::new().map_err(fail)?;
    form.append_with_str("title", title).map_err(fail)?;
    form.append_with_str("content", content).map_err(fail)?;
    for id in student_ids {
        form.append_with_str("student_ids", id).map_err(fail)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(fail)?;
    }
    Ok(form)
}

#[component]
pub fn SendNoticePage() -> impl IntoView {
    let toast = use_toast();

    let (students, set_students) = signal(Vec::<Student>::new());
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let send_to_all = RwSignal::new(false);
    let (selected, set_selected) = signal(Vec::<String>::new());
    let (recipient_search, set_recipient_search) = signal(String::new());
    let image = RwSignal::new_local(Option::<web_sys::File>::None);
    let preview = RwSignal::new(Option::<String>::None);
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    spawn_local(async move {
        match students_api::fetch_students().await {
            Ok(list) => set_students.set(list),
            Err(e) => log::error!("failed to load students for notice form: {}", e),
        }
    });

    let visible_students =
        Memo::new(move |_| filter_list(&students.get(), &recipient_search.get()));

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.get().get(key).cloned())
    };

    let toggle_student = move |id: String, checked: bool| {
        set_selected.update(|sel| {
            if checked {
                if !sel.contains(&id) {
                    sel.push(id);
                }
            } else {
                sel.retain(|s| s != &id);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title_val = title.get();
        let content_val = content.get();
        let all = send_to_all.get();
        let chosen = selected.get();

        let validation = validate(&title_val, &content_val, all, chosen.len());
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(HashMap::new());

        let recipient_ids: Vec<String> = if all {
            students.get().iter().map(|s| s.record_id.clone()).collect()
        } else {
            chosen
        };

        let file = image.get_untracked();
        let form = match build_form(
            title_val.trim(),
            content_val.trim(),
            &recipient_ids,
            file.as_ref(),
        ) {
            Ok(form) => form,
            Err(e) => {
                toast.error(e);
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_notice(form).await {
                Ok(()) => {
                    toast.success("Notice sent successfully");
                    title.set(String::new());
                    content.set(String::new());
                    send_to_all.set(false);
                    set_selected.set(Vec::new());
                    image.set(None);
                    preview.set(None);
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Send Notice"</h1>
            </div>

            <form class="form-panel" on:submit=on_submit>
                <TextField
                    label="Title"
                    value=title
                    on_input=Callback::new(move |v| title.set(v))
                    error=field_error("title")
                />
                <TextAreaField
                    label="Content"
                    value=content
                    on_input=Callback::new(move |v| content.set(v))
                    error=field_error("content")
                    rows=5
                />
                <FileField
                    label="Attachment (optional)"
                    file=image
                    preview=preview
                />

                <div class="form-field">
                    <label class="form-field__label">"Recipients"</label>
                    <label class="form-field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || send_to_all.get()
                            on:change=move |ev| send_to_all.set(event_target_checked(&ev))
                        />
                        "Send to all students"
                    </label>

                    <Show when=move || !send_to_all.get()>
                        <input
                            type="text"
                            class="form-field__input"
                            placeholder="Search students..."
                            prop:value=move || recipient_search.get()
                            on:input=move |ev| set_recipient_search.set(event_target_value(&ev))
                        />
                        <div class="recipient-list">
                            <For
                                each=move || visible_students.get()
                                key=|student| student.record_id.clone()
                                children=move |student| {
                                    let id = student.record_id.clone();
                                    let id_for_toggle = id.clone();
                                    view! {
                                        <label class="recipient-list__item">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.get().contains(&id)
                                                on:change=move |ev| toggle_student(
                                                    id_for_toggle.clone(),
                                                    event_target_checked(&ev),
                                                )
                                            />
                                            <span>{student.name.clone()}</span>
                                            <span class="recipient-list__meta">
                                                {format!("{} / {}", student.student_class, student.section)}
                                            </span>
                                        </label>
                                    }
                                }
                            />
                        </div>
                        <p class="form-field__hint">
                            {move || format!("{} student(s) selected", selected.get().len())}
                        </p>
                    </Show>
                    {move || {
                        errors
                            .get()
                            .get("recipients")
                            .cloned()
                            .map(|e| view! { <p class="field-error">{e}</p> })
                    }}
                </div>

                <div class="form-panel__footer">
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Sending..." } else { "Send Notice" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn requires_recipients_unless_send_to_all() {
        let errors = validate("Holiday", "School closed tomorrow", false, 0);
        assert!(errors.contains_key("recipients"));

        let errors = validate("Holiday", "School closed tomorrow", true, 0);
        assert!(errors.is_empty());

        let errors = validate("Holiday", "School closed tomorrow", false, 2);
        assert!(errors.is_empty());
    }

    #[test]
    fn title_and_content_required() {
        let errors = validate(" ", "", true, 0);
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("content"));
    }
}
