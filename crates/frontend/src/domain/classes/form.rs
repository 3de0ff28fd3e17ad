use std::collections::HashMap;

use contracts::domain::school_class::SchoolClassPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::form_fields::TextField;
use crate::shared::toast::use_toast;

fn validate(payload: &SchoolClassPayload) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if payload.class_name.trim().is_empty() {
        errors.insert("className".into(), "Class name is required".into());
    }
    if payload.class_teacher.trim().is_empty() {
        errors.insert("classTeacher".into(), "Class teacher is required".into());
    }
    errors
}

#[component]
pub fn NewClassPage() -> impl IntoView {
    let toast = use_toast();

    let class_name = RwSignal::new(String::new());
    let class_teacher = RwSignal::new(String::new());
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.get().get(key).cloned())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = SchoolClassPayload {
            class_name: class_name.get().trim().to_string(),
            class_teacher: class_teacher.get().trim().to_string(),
        };
        let validation = validate(&payload);
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(HashMap::new());
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_class(&payload).await {
                Ok(()) => {
                    toast.success("Class added successfully");
                    class_name.set(String::new());
                    class_teacher.set(String::new());
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Add New Class"</h1>
            </div>

            <form class="form-panel" on:submit=on_submit>
                <TextField
                    label="Class Name"
                    value=class_name
                    on_input=Callback::new(move |v| class_name.set(v))
                    error=field_error("className")
                    placeholder="e.g. Class 7"
                />
                <TextField
                    label="Class Teacher"
                    value=class_teacher
                    on_input=Callback::new(move |v| class_teacher.set(v))
                    error=field_error("classTeacher")
                    placeholder="Teacher's full name"
                />
                <div class="form-panel__footer">
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save Class" }}
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
        let errors = validate(&SchoolClassPayload::default());
        assert!(errors.contains_key("className"));
        assert!(errors.contains_key("classTeacher"));
    }

    #[test]
    fn whitespace_is_not_a_value() {
        let errors = validate(&SchoolClassPayload {
            class_name: "   ".into(),
            class_teacher: "Mr. Rahman".into(),
        });
        assert!(errors.contains_key("className"));
        assert!(!errors.contains_key("classTeacher"));
    }

    #[test]
    fn complete_payload_passes() {
        let errors = validate(&SchoolClassPayload {
            class_name: "Class 7".into(),
            class_teacher: "Mr. Rahman".into(),
        });
        assert!(errors.is_empty());
    }
}
