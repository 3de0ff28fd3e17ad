use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard landing screen.
///
/// Every number here, including the growth percentages, is computed
/// server-side; the client renders them verbatim and derives nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalStudents", default)]
    pub total_students: u64,
    #[serde(rename = "totalTeachers", default)]
    pub total_teachers: u64,
    #[serde(rename = "studentGrowthPercent", default)]
    pub student_growth_percent: f64,
    #[serde(rename = "teacherGrowthPercent", default)]
    pub teacher_growth_percent: f64,
    #[serde(rename = "attendanceRate", default)]
    pub attendance_rate: f64,
    #[serde(rename = "examsToday", default)]
    pub exams_today: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub time: String,
}
