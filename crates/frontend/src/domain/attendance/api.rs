use contracts::domain::attendance::AttendanceSubmission;

use crate::shared::http;

pub async fn submit_attendance(submission: &AttendanceSubmission) -> Result<(), String> {
    http::post_json("/api/admin/attendance", submission).await
}
