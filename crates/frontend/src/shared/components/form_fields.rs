//! Labeled form inputs with inline validation errors.
//!
//! Every create/edit form renders these; validation itself runs on submit
//! in the form's `validate` function and lands here only as the per-field
//! error text.

use leptos::prelude::*;
use web_sys::HtmlInputElement;

#[component]
fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, optional)] error: Signal<Option<String>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <input
                type=input_type
                class="form-field__input"
                class:form-field__input--invalid=move || error.get().is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// (option value, option label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into, optional)] error: Signal<Option<String>>,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Select...".to_string()
    } else {
        placeholder
    };
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <select
                class="form-field__input"
                class:form-field__input--invalid=move || error.get().is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(val, text)| {
                            let is_selected = val == selected;
                            view! {
                                <option value=val selected=is_selected>{text}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, optional)] error: Signal<Option<String>>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let rows = rows.unwrap_or(3);
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <textarea
                class="form-field__input"
                class:form-field__input--invalid=move || error.get().is_some()
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError error=error />
        </div>
    }
}

/// File picker that keeps the raw `File` in form state and derives an
/// object-URL preview for immediate display. The api layer switches the
/// submission to multipart only when a file is actually present.
#[component]
pub fn FileField(
    #[prop(into)] label: String,
    #[prop(optional)] accept: Option<&'static str>,
    file: RwSignal<Option<web_sys::File>, LocalStorage>,
    preview: RwSignal<Option<String>>,
    #[prop(into, optional)] error: Signal<Option<String>>,
) -> impl IntoView {
    let accept = accept.unwrap_or("image/*");

    let handle_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input.files().and_then(|list| list.get(0));
        if let Some(f) = selected {
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&f) {
                preview.set(Some(url));
            }
            file.set(Some(f));
        }
    };

    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <input
                type="file"
                class="form-field__input form-field__input--file"
                accept=accept
                on:change=handle_change
            />
            {move || {
                preview
                    .get()
                    .map(|url| view! { <img class="form-field__preview" src=url alt="Preview" /> })
            }}
            <FieldError error=error />
        </div>
    }
}
