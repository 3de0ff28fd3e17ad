use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use super::api;
use crate::shared::components::form_fields::{FileField, TextAreaField, TextField};
use crate::shared::toast::use_toast;

fn validate(title: &str, description: &str, has_image: bool) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if title.trim().is_empty() {
        errors.insert("title".into(), "Title is required".into());
    }
    if description.trim().is_empty() {
        errors.insert("description".into(), "Description is required".into());
    }
    if !has_image {
        errors.insert("image".into(), "Please select an image".into());
    }
    errors
}

fn build_form(title: &str, description: &str, image: &web_sys::File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_str("title", title)
        .map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_str("description", description)
        .map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob_and_filename("image", image, &image.name())
        .map_err(|_| "Failed to build form data".to_string())?;
    Ok(form)
}

#[component]
pub fn PostBannerPage() -> impl IntoView {
    let toast = use_toast();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image = RwSignal::new_local(Option::<web_sys::File>::None);
    let preview = RwSignal::new(Option::<String>::None);
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.get().get(key).cloned())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title_val = title.get();
        let description_val = description.get();
        let file = image.get_untracked();

        let validation = validate(&title_val, &description_val, file.is_some());
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(HashMap::new());

        let Some(file) = file else { return };
        let form = match build_form(title_val.trim(), description_val.trim(), &file) {
            Ok(form) => form,
            Err(e) => {
                toast.error(e);
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_banner(form).await {
                Ok(()) => {
                    toast.success("Banner posted successfully");
                    title.set(String::new());
                    description.set(String::new());
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
                <h1 class="page__title">"Post Banner"</h1>
            </div>

            <form class="form-panel" on:submit=on_submit>
                <TextField
                    label="Title"
                    value=title
                    on_input=Callback::new(move |v| title.set(v))
                    error=field_error("title")
                />
                <TextAreaField
                    label="Description"
                    value=description
                    on_input=Callback::new(move |v| description.set(v))
                    error=field_error("description")
                />
                <FileField
                    label="Banner Image"
                    file=image
                    preview=preview
                    error=field_error("image")
                />
                <div class="form-panel__footer">
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Posting..." } else { "Post Banner" }}
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
    fn image_is_mandatory() {
        let errors = validate("Sports Day", "Annual sports day", false);
        assert_eq!(
            errors.get("image").map(String::as_str),
            Some("Please select an image")
        );
    }

    #[test]
    fn all_fields_required() {
        let errors = validate("", "", false);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn complete_form_passes() {
        assert!(validate("Sports Day", "Annual sports day", true).is_empty());
    }
}
