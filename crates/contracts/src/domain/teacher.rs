use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "_id", default)]
    pub record_id: String,
    /// School-issued staff id, distinct from the database `_id`.
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
    pub subject: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "nidNumber", default)]
    pub nid_number: String,
    #[serde(rename = "emergencyContact", default)]
    pub emergency_contact: String,
    #[serde(rename = "profilePic", default)]
    pub profile_pic: String,
    #[serde(rename = "nidPhoto", default)]
    pub nid_photo: String,
}
