use std::collections::HashMap;

use contracts::domain::school_class::SchoolClass;
use contracts::domain::section::Section;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use super::api;
use crate::domain::classes::api as classes_api;
use crate::domain::sections::api as sections_api;
use crate::shared::components::form_fields::{FileField, SelectField, TextAreaField, TextField};
use crate::shared::toast::use_toast;
use crate::shared::validators::{is_valid_email, is_valid_mobile, is_valid_password};

#[derive(Clone, Default)]
struct StudentForm {
    id: String,
    name: String,
    father_name: String,
    mother_name: String,
    gender: String,
    birthdate: String,
    education: String,
    subject: String,
    mobile: String,
    email: String,
    password: String,
    confirm_password: String,
    class_roll: String,
    student_class: String,
    section: String,
    group: String,
    religion: String,
    address: String,
}

fn validate(form: &StudentForm, has_profile_pic: bool) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    let required = [
        ("id", &form.id, "ID is required"),
        ("name", &form.name, "Name is required"),
        ("fatherName", &form.father_name, "Father's name is required"),
        ("motherName", &form.mother_name, "Mother's name is required"),
        ("gender", &form.gender, "Gender is required"),
        ("birthdate", &form.birthdate, "Birthdate is required"),
        ("classRoll", &form.class_roll, "Class roll is required"),
        ("studentClass", &form.student_class, "Class is required"),
        ("section", &form.section, "Section is required"),
        ("religion", &form.religion, "Religion is required"),
        ("address", &form.address, "Address is required"),
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
    if form.confirm_password != form.password {
        errors.insert("confirmPassword".into(), "Passwords do not match".into());
    }
    if !has_profile_pic {
        errors.insert("profilePic".into(), "Profile picture is required".into());
    }
    errors
}

fn build_form(form: &StudentForm, profile_pic: &web_sys::File) -> Result<FormData, String> {
    let fail = |_| "Failed to build form data".to_string();
    let data = FormData::new().map_err(fail)?;
    let fields = [
        ("id", &form.id),
        ("name", &form.name),
        ("fatherName", &form.father_name),
        ("motherName", &form.mother_name),
        ("gender", &form.gender),
        ("birthdate", &form.birthdate),
        ("education", &form.education),
        ("subject", &form.subject),
        ("mobile", &form.mobile),
        ("email", &form.email),
        ("password", &form.password),
        ("confirmPassword", &form.confirm_password),
        ("classRoll", &form.class_roll),
        ("studentClass", &form.student_class),
        ("section", &form.section),
        ("group", &form.group),
        ("religion", &form.religion),
        ("address", &form.address),
    ];
    for (key, value) in fields {
        data.append_with_str(key, value).map_err(fail)?;
    }
    data.append_with_blob_and_filename("profilePic", profile_pic, &profile_pic.name())
        .map_err(fail)?;
    Ok(data)
}

#[component]
pub fn NewStudentPage() -> impl IntoView {
    let toast = use_toast();

    let form = RwSignal::new(StudentForm::default());
    let profile_pic = RwSignal::new_local(Option::<web_sys::File>::None);
    let profile_preview = RwSignal::new(Option::<String>::None);
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let (submitting, set_submitting) = signal(false);

    let (classes, set_classes) = signal(Vec::<SchoolClass>::new());
    let (sections, set_sections) = signal(Vec::<Section>::new());

    spawn_local(async move {
        match classes_api::fetch_classes().await {
            Ok(list) => set_classes.set(list),
            Err(e) => log::error!("failed to load classes: {}", e),
        }
        match sections_api::fetch_sections().await {
            Ok(list) => set_sections.set(list),
            Err(e) => log::error!("failed to load sections: {}", e),
        }
    });

    let class_options = Signal::derive(move || {
        classes
            .get()
            .into_iter()
            .map(|c| (c.class_name.clone(), c.class_name))
            .collect::<Vec<_>>()
    });
    let section_options = Signal::derive(move || {
        sections
            .get()
            .into_iter()
            .map(|s| (s.section_name.clone(), s.section_name))
            .collect::<Vec<_>>()
    });

    let field_error = move |key: &'static str| {
        Signal::derive(move || errors.get().get(key).cloned())
    };
    let field_signal = move |get: fn(&StudentForm) -> String| {
        Signal::derive(move || get(&form.get()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get();
        let pic = profile_pic.get_untracked();

        let validation = validate(&current, pic.is_some());
        if !validation.is_empty() {
            errors.set(validation);
            toast.error("Please fix the errors in the form");
            return;
        }
        errors.set(HashMap::new());

        let Some(pic) = pic else {
            return;
        };
        let data = match build_form(&current, &pic) {
            Ok(data) => data,
            Err(e) => {
                toast.error(e);
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_student(data).await {
                Ok(()) => {
                    toast.success("Student created successfully");
                    form.set(StudentForm::default());
                    profile_pic.set(None);
                    profile_preview.set(None);
                }
                Err(e) => toast.error(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Add New Student"</h1>
            </div>

            <form class="form-panel" on:submit=on_submit>
                <div class="form-grid">
                    <TextField
                        label="Student ID"
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
                        label="Birthdate"
                        value=field_signal(|f| f.birthdate.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.birthdate = v))
                        error=field_error("birthdate")
                        input_type="date"
                    />
                    <TextField
                        label="Education"
                        value=field_signal(|f| f.education.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.education = v))
                    />
                    <TextField
                        label="Subject"
                        value=field_signal(|f| f.subject.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.subject = v))
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
                        label="Confirm Password"
                        value=field_signal(|f| f.confirm_password.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.confirm_password = v))
                        error=field_error("confirmPassword")
                        input_type="password"
                    />
                    <TextField
                        label="Class Roll"
                        value=field_signal(|f| f.class_roll.clone())
                        on_input=Callback::new(move |v| form.update(|f| f.class_roll = v))
                        error=field_error("classRoll")
                    />
                    <SelectField
                        label="Class"
                        value=field_signal(|f| f.student_class.clone())
                        on_change=Callback::new(move |v| form.update(|f| f.student_class = v))
                        options=class_options
                        error=field_error("studentClass")
                    />
                    <SelectField
                        label="Section"
                        value=field_signal(|f| f.section.clone())
                        on_change=Callback::new(move |v| form.update(|f| f.section = v))
                        options=section_options
                        error=field_error("section")
                    />
                    <SelectField
                        label="Group"
                        value=field_signal(|f| f.group.clone())
                        on_change=Callback::new(move |v| form.update(|f| f.group = v))
                        options=Signal::derive(|| vec![
                            ("General".to_string(), "General".to_string()),
                            ("Science".to_string(), "Science".to_string()),
                            ("Commerce".to_string(), "Commerce".to_string()),
                            ("Arts".to_string(), "Arts".to_string()),
                        ])
                    />
                    <SelectField
                        label="Religion"
                        value=field_signal(|f| f.religion.clone())
                        on_change=Callback::new(move |v| form.update(|f| f.religion = v))
                        options=Signal::derive(|| vec![
                            ("Islam".to_string(), "Islam".to_string()),
                            ("Hinduism".to_string(), "Hinduism".to_string()),
                            ("Buddhism".to_string(), "Buddhism".to_string()),
                            ("Christianity".to_string(), "Christianity".to_string()),
                            ("Other".to_string(), "Other".to_string()),
                        ])
                        error=field_error("religion")
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
                </div>

                <div class="form-panel__footer">
                    <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating..." } else { "Create Student" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> StudentForm {
        StudentForm {
            id: "S-2041".into(),
            name: "Rahim Uddin".into(),
            father_name: "Jalal Uddin".into(),
            mother_name: "Salma Khatun".into(),
            gender: "Male".into(),
            birthdate: "2010-04-12".into(),
            education: String::new(),
            subject: String::new(),
            mobile: "01712345678".into(),
            email: "rahim@school.edu".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
            class_roll: "17".into(),
            student_class: "Class 7".into(),
            section: "A".into(),
            group: String::new(),
            religion: "Islam".into(),
            address: "Chattogram".into(),
        }
    }

    #[test]
    fn complete_form_with_photo_passes() {
        assert!(validate(&complete_form(), true).is_empty());
    }

    #[test]
    fn education_and_group_are_optional() {
        let mut form = complete_form();
        form.education = String::new();
        form.subject = String::new();
        form.group = String::new();
        assert!(validate(&form, true).is_empty());
    }

    #[test]
    fn mismatched_passwords_rejected() {
        let mut form = complete_form();
        form.confirm_password = "different".into();
        let errors = validate(&form, true);
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn photo_is_required() {
        let errors = validate(&complete_form(), false);
        assert!(errors.contains_key("profilePic"));
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let errors = validate(&StudentForm::default(), false);
        for key in [
            "id",
            "name",
            "fatherName",
            "motherName",
            "gender",
            "birthdate",
            "classRoll",
            "studentClass",
            "section",
            "religion",
            "address",
            "mobile",
            "email",
            "password",
        ] {
            assert!(errors.contains_key(key), "missing error for {}", key);
        }
    }
}
