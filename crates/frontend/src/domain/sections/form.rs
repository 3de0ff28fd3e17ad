use std::collections::HashMap;

use contracts::domain::section::SectionPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::form_fields::{SelectField, TextField};
use crate::shared::toast::use_toast;

fn validate(payload: &SectionPayload) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if payload.section_name.trim().is_empty() {
        errors.insert("sectionName".into(), "Section name is required".into());
    }
    if payload.section_type.trim().is_empty() {
        errors.insert("sectionType".into(), "Section type is required".into());
    }
    errors
}

#[component]
pub fn NewSectionPage() -> impl IntoView {
    let toast = use_toast();

    let section_name = RwSignal::new(String::new());
    let section_type = RwSignal::new(String::new());
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.get().get(key).cloned())
    };

    let type_options = Signal::derive(|| {
        vec![
            ("General".to_string(), "General".to_string()),
            ("Science".to_string(), "Science".to_string()),
            ("Commerce".to_string(), "Commerce".to_string()),
            ("Arts".to_string(), "Arts".to_string()),
        ]
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = SectionPayload {
            section_name: section_name.get().trim().to_string(),
            section_type: section_type.get().trim().to_string(),
        };
        let validation = validate(&payload);
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(HashMap::new());
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_section(&payload).await {
                Ok(()) => {
                    toast.success("Section added successfully");
                    section_name.set(String::new());
                    section_type.set(String::new());
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Add New Section"</h1>
            </div>

            <form class="form-panel" on:submit=on_submit>
                <TextField
                    label="Section Name"
                    value=section_name
                    on_input=Callback::new(move |v| section_name.set(v))
                    error=field_error("sectionName")
                    placeholder="e.g. A"
                />
                <SelectField
                    label="Section Type"
                    value=section_type
                    on_change=Callback::new(move |v| section_type.set(v))
                    options=type_options
                    error=field_error("sectionType")
                />
                <div class="form-panel__footer">
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Save Section" }}
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
        let errors = validate(&SectionPayload::default());
        assert!(errors.contains_key("sectionName"));
        assert!(errors.contains_key("sectionType"));
    }

    #[test]
    fn complete_payload_passes() {
        let errors = validate(&SectionPayload {
            section_name: "A".into(),
            section_type: "Science".into(),
        });
        assert!(errors.is_empty());
    }
}
