use serde::{Deserialize, Serialize};

/// One line of a student's embedded attendance history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceHistoryEntry {
    #[serde(default)]
    pub date: String,
    /// "present" | "absent" | "late"
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub remarks: String,
}

/// Student record as stored by the backend.
///
/// `id` is the school-issued admission number, distinct from the
/// database `_id` used for addressing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "fatherName", default)]
    pub father_name: String,
    #[serde(rename = "motherName", default)]
    pub mother_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birthdate: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "studentClass", default)]
    pub student_class: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub religion: String,
    #[serde(rename = "classRoll", default)]
    pub class_roll: String,
    /// Filename under the backend's `/images/` prefix.
    #[serde(rename = "profilePic", default)]
    pub profile_pic: String,
    #[serde(default)]
    pub attendance: Vec<AttendanceHistoryEntry>,
}
