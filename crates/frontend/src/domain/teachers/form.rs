use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use super::api;
use crate::shared::components::form_fields::{FileField, SelectField, TextAreaField, TextField};
use crate::shared::toast::use_toast;
use crate::shared::validators::{
    is_valid_email, is_valid_mobile, is_valid_nid, is_valid_password,
};

#[derive(Clone, Default)]
struct TeacherForm {
    id: String,
    name: String,
    father_name: String,
    mother_name: String,
    address: String,
    gender: String,
    education: String,
    subject: String,
    mobile: String,
    email: String,
    password: String,
    nid_number: String,
    emergency_contact: String,
}

fn validate(
    form: &TeacherForm,
    has_profile_pic: bool,
    has_nid_photo: bool,
) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    let required = [
        ("id", &form.id, "ID is required"),
        ("name", &form.name, "Name is required"),
        ("fatherName", &form.father_name, "Father's name is required"),
        ("motherName", &form.mother_name, "Mother's name is required"),
        ("address", &form.address, "Address is required"),
        ("gender", &form.gender, "Gender is required"),
        ("education", &form.education, "Education is required"),
        ("subject", &form.subject, "Subject is required"),
    ];
    for (key, value, message) in required {
        if value.trim().is_empty() {
            errors.insert(key.to_string(), message.to_string());
        }
    }
    if !is_valid_mobile(&form.mobile) {
        errors.insert(
            "mobile".into(),
            "Valid 11-digit mobile number required".into(),
        );
    }
    if !is_valid_email(&form.email) {
        errors.insert("email".into(), "Valid email required".into());
    }
    if !is_valid_password(&form.password) {
        errors.insert(
            "password".into(),
            "Password must be at least 6 characters".into(),
        );
    }
    if !is_valid_nid(&form.nid_number) {
        errors.insert("nidNumber".into(), "Valid NID number required".into());
    }
    if !is_valid_mobile(&form.emergency_contact) {
        errors.insert(
            "emergencyContact".into(),
            "Valid 11-digit emergency contact required".into(),
        );
    }
    if !has_profile_pic {
        errors.insert("profilePic".into(), "Profile picture is required".into());
    }
    if !has_nid_photo {
        errors.insert("nidPhoto".into(), "NID photo is required".into());
    }
    errors
}

fn build_form(
    form: &TeacherForm,
    profile_pic: &web_sys::File,
    nid_photo: &web_sys::File,
) -> Result<FormData, String> {
    let fail = |_| "Failed to build form data".to_string();
    let data = FormData::new().map_err(fail)?;
    let fields = [
        ("id", &form.id),
        ("name", &form.name),
        ("fatherName", &form.father_name),
        ("motherName", &form.mother_name),
        ("address", &form.address),
        ("gender", &form.gender),
        ("education", &form.education),
        ("subject", &form.subject),
        ("mobile", &form.mobile),
        ("email", &form.email),
        ("password", &form.password),
        ("nidNumber", &form.nid_number),
        ("emergencyContact", &form.emergency_contact),
    ];
    for (key, value) in fields {
        data.append_with_str(key, value).map_err(fail)?;
    }
    data.append_with_blob_and_filename("profilePic", profile_pic, &profile_pic.name())
        .map_err(fail)?;
    data.append_with_blob_and_filename("nidPhoto", nid_photo, &nid_photo.name())
        .map_err(fail)?;
    Ok(data)
}

#[component]
pub fn NewTeacherPage() -> impl IntoView {
    let toast = use_toast();

    let form = RwSignal::new(TeacherForm::default());
    let profile_pic = RwSignal::new_local(Option::<web_sys::File>::None);
    let profile_preview = RwSignal::new(Option::<String>::None);
    let nid_photo = RwSignal::new_local(Option::<web_sys::File>::None);
    let nid_preview = RwSignal::new(Option::<String>::None);
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.get().get(key).cloned())
    };
    let field_signal = move |get: fn(&TeacherForm) -> String| {
        Signal::derive(move || get(&form.get()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get();
        let pic = profile_pic.get_untracked();
        let nid = nid_photo.get_untracked();

        let validation = validate(&current, pic.is_some(), nid.is_some());
        if !validation.is_empty() {
            errors.set(validation);
            toast.error("Please fix the errors in the form");
            return;
        }
        errors.set(HashMap::new());

        let (Some(pic), Some(nid)) = (pic, nid) else {
            return;
        };
        let data = match build_form(&current, &pic, &nid) {
            Ok(data) => data,
            Err(e) => {
                toast.error(e);
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_teacher(data).await {
                Ok(()) => {
                    toast.success("Teacher created successfully");
                    form.set(TeacherForm::default());
                    profile_pic.set(None);
                    profile_preview.set(None);
                    nid_photo.set(None);
                    nid_preview.set(None);
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Add New Teacher"</h1>
            </div>

            <form class="form-panel" on:submit=on_submit>
                <div class="form-grid">
                    <TextField
                        label="Teacher ID"
                        value=field_signal(|f| f.id.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.id = v))
                        error=field_error("id")
                    />
                    <TextField
                        label="Name"
                        value=field_signal(|f| f.name.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        error=field_error("name")
                    />
                    <TextField
                        label="Father's Name"
                        value=field_signal(|f| f.father_name.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.father_name = v))
                        error=field_error("fatherName")
                    />
                    <TextField
                        label="Mother's Name"
                        value=field_signal(|f| f.mother_name.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.mother_name = v))
                        error=field_error("motherName")
                    />
                    <SelectField
                        label="Gender"
                        value=field_signal(|f| f.gender.clone())
                        on_change=Callback::new(move |v| form.update(|f| f.gender = v))
                        options=Signal::derive(|| vec![
                            ("Male".to_string(), "Male".to_string()),
                            ("Female".to_string(), "Female".to_string()),
                            ("Other".to_string(), "Other".to_string()),
                        ])
                        error=field_error("gender")
                    />
                    <TextField
                        label="Education"
                        value=field_signal(|f| f.education.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.education = v))
                        error=field_error("education")
                    />
                    <TextField
                        label="Subject"
                        value=field_signal(|f| f.subject.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.subject = v))
                        error=field_error("subject")
                    />
                    <TextField
                        label="Mobile"
                        value=field_signal(|f| f.mobile.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.mobile = v))
                        error=field_error("mobile")
                        placeholder="01XXXXXXXXX"
                    />
                    <TextField
                        label="Email"
                        value=field_signal(|f| f.email.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=field_error("email")
                        input_type="email"
                    />
                    <TextField
                        label="Password"
                        value=field_signal(|f| f.password.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        error=field_error("password")
                        input_type="password"
                    />
                    <TextField
                        label="NID Number"
                        value=field_signal(|f| f.nid_number.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.nid_number = v))
                        error=field_error("nidNumber")
                    />
                    <TextField
                        label="Emergency Contact"
                        value=field_signal(|f| f.emergency_contact.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.emergency_contact = v))
                        error=field_error("emergencyContact")
                        placeholder="01XXXXXXXXX"
                    />
                </div>

                <TextAreaField
                    label="Address"
                    value=field_signal(|f| f.address.clone())
                    on_input=Callback::new(move |v| form.update(|f| f.address = v))
                    error=field_error("address")
                />

                <div class="form-grid">
                    <FileField
                        label="Profile Picture"
                        file=profile_pic
                        preview=profile_preview
                        error=field_error("profilePic")
                    />
                    <FileField
                        label="NID Photo"
                        file=nid_photo
                        preview=nid_preview
                        error=field_error("nidPhoto")
                    />
                </div>

                <div class="form-panel__footer">
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating..." } else { "Create Teacher" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> TeacherForm {
        TeacherForm {
            id: "T-101".into(),
            name: "Karim Mia".into(),
            father_name: "Abdul Mia".into(),
            mother_name: "Amina Begum".into(),
            address: "Dhaka".into(),
            gender: "Male".into(),
            education: "MSc in Mathematics".into(),
            subject: "Mathematics".into(),
            mobile: "01712345678".into(),
            email: "karim@school.edu".into(),
            password: "secret123".into(),
            nid_number: "1234567890123".into(),
            emergency_contact: "01898765432".into(),
        }
    }

    #[test]
    fn complete_form_with_photos_passes() {
        assert!(validate(&complete_form(), true, true).is_empty());
    }

    #[test]
    fn photos_are_required() {
        let errors = validate(&complete_form(), false, false);
        assert!(errors.contains_key("profilePic"));
        assert!(errors.contains_key("nidPhoto"));
    }

    #[test]
    fn mobile_and_nid_format_checked() {
        let mut form = complete_form();
        form.mobile = "12345".into();
        form.nid_number = "abc".into();
        let errors = validate(&form, true, true);
        assert!(errors.contains_key("mobile"));
        assert!(errors.contains_key("nidNumber"));
    }

    #[test]
    fn every_required_text_field_reports() {
        let errors = validate(&TeacherForm::default(), true, true);
        for key in [
            "id",
            "name",
            "fatherName",
            "motherName",
            "address",
            "gender",
            "education",
            "subject",
            "mobile",
            "email",
            "password",
            "nidNumber",
            "emergencyContact",
        ] {
            assert!(errors.contains_key(key), "missing error for {}", key);
        }
    }
}
