use std::collections::HashMap;

use contracts::domain::exam_type::ExamTypePayload;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::form_fields::TextField;
use crate::shared::toast::use_toast;

fn validate(payload: &ExamTypePayload) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if payload.name.trim().is_empty() {
        errors.insert("name".into(), "Exam name is required".into());
    }
    if payload.title.trim().is_empty() {
        errors.insert("title".into(), "Exam title is required".into());
    }
    errors
}

#[component]
pub fn NewExamTypePage() -> impl IntoView {
    let toast = use_toast();

    let name = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.get().get(key).cloned())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = ExamTypePayload {
            name: name.get().trim().to_string(),
            title: title.get().trim().to_string(),
        };
        let validation = validate(&payload);
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(HashMap::new());
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_exam_type(&payload).await {
                Ok(()) => {
                    toast.success("Exam type added successfully");
                    name.set(String::new());
                    title.set(String::new());
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Add Exam Type"</h1>
            </div>

            <form class="form-panel" on:submit=on_submit>
                <TextField
                    label="Exam Name"
                    value=name
                    on_input=Callback::new(move |v| name.set(v))
                    error=field_error("name")
                    placeholder="e.g. Half Yearly"
                />
                <TextField
                    label="Exam Title"
                    value=title
                    on_input=Callback::new(move |v| title.set(v))
                    error=field_error("title")
                    placeholder="e.g. Half Yearly Examination 2025"
                />
                <div class="form-panel__footer">
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save Exam Type" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let errors = validate(&ExamTypePayload::default());
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("title"));
    }

    #[test]
    fn complete_payload_passes() {
        let errors = validate(&ExamTypePayload {
            name: "Final".into(),
            title: "Final Examination".into(),
        });
        assert!(errors.is_empty());
    }
}
