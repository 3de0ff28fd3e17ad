//! Attendance sheet state, kept separate from the page so the marking
//! rules are testable without a DOM.

use std::collections::BTreeMap;

use contracts::domain::attendance::{AttendanceMark, AttendanceSubmission};
use contracts::domain::student::Student;

/// The three mutually exclusive statuses a student can be marked with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Present,
    Absent,
    Late,
}

/// Marks for one loaded roster, keyed by student record id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttendanceSheet {
    marks: BTreeMap<String, AttendanceMark>,
}

impl AttendanceSheet {
    /// Fresh sheet for a loaded roster; every student starts as present.
    pub fn load(roster: &[Student]) -> Self {
        let marks = roster
            .iter()
            .map(|s| {
                (
                    s.record_id.clone(),
                    AttendanceMark {
                        present: true,
                        ..Default::default()
                    },
                )
            })
            .collect();
        Self { marks }
    }

    pub fn mark_of(&self, student_id: &str) -> Option<&AttendanceMark> {
        self.marks.get(student_id)
    }

    /// Set one student's status. The three flags are mutually exclusive;
    /// remarks survive status changes.
    pub fn mark(&mut self, student_id: &str, status: Status) {
        if let Some(mark) = self.marks.get_mut(student_id) {
            mark.present = status == Status::Present;
            mark.absent = status == Status::Absent;
            mark.late = status == Status::Late;
        }
    }

    pub fn mark_all(&mut self, status: Status) {
        let ids: Vec<String> = self.marks.keys().cloned().collect();
        for id in ids {
            self.mark(&id, status);
        }
    }

    pub fn set_remarks(&mut self, student_id: &str, remarks: String) {
        if let Some(mark) = self.marks.get_mut(student_id) {
            mark.remarks = remarks;
        }
    }

    /// A sheet is submittable only when every student has exactly one
    /// status flag set.
    pub fn is_complete(&self) -> bool {
        !self.marks.is_empty()
            && self.marks.values().all(|m| {
                let set = [m.present, m.absent, m.late].iter().filter(|f| **f).count();
                set == 1
            })
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        let present = self.marks.values().filter(|m| m.present).count();
        let absent = self.marks.values().filter(|m| m.absent).count();
        let late = self.marks.values().filter(|m| m.late).count();
        (present, absent, late)
    }

    pub fn payload(
        &self,
        class_id: String,
        section_id: Option<String>,
        date: String,
        created_by: String,
    ) -> AttendanceSubmission {
        AttendanceSubmission {
            class_id,
            section_id,
            date,
            attendance: self.marks.clone(),
            created_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[&str]) -> Vec<Student> {
        ids.iter()
            .map(|id| Student {
                record_id: id.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn load_defaults_everyone_present() {
        let sheet = AttendanceSheet::load(&roster(&["a", "b", "c"]));
        assert!(sheet.is_complete());
        assert_eq!(sheet.counts(), (3, 0, 0));
    }

    #[test]
    fn statuses_are_mutually_exclusive() {
        let mut sheet = AttendanceSheet::load(&roster(&["a"]));
        sheet.mark("a", Status::Late);
        let mark = sheet.mark_of("a").unwrap();
        assert!(!mark.present);
        assert!(!mark.absent);
        assert!(mark.late);
        sheet.mark("a", Status::Present);
        let mark = sheet.mark_of("a").unwrap();
        assert!(mark.present);
        assert!(!mark.late);
    }

    #[test]
    fn remarks_survive_status_changes() {
        let mut sheet = AttendanceSheet::load(&roster(&["a"]));
        sheet.set_remarks("a", "came at 9:15".into());
        sheet.mark("a", Status::Late);
        assert_eq!(sheet.mark_of("a").unwrap().remarks, "came at 9:15");
    }

    #[test]
    fn one_absent_among_three() {
        let mut sheet = AttendanceSheet::load(&roster(&["s1", "s2", "s3"]));
        sheet.mark("s2", Status::Absent);
        assert_eq!(sheet.counts(), (2, 1, 0));
        assert!(sheet.is_complete());
        let payload = sheet.payload("c1".into(), Some("sec1".into()), "2024-06-10".into(), "admin".into());
        assert!(payload.attendance["s2"].absent);
        assert!(payload.attendance["s1"].present);
        assert!(payload.attendance["s3"].present);
    }

    #[test]
    fn mark_all_overrides_every_row() {
        let mut sheet = AttendanceSheet::load(&roster(&["a", "b"]));
        sheet.mark("a", Status::Absent);
        sheet.mark_all(Status::Late);
        assert_eq!(sheet.counts(), (0, 0, 2));
    }

    #[test]
    fn empty_sheet_is_not_complete() {
        assert!(!AttendanceSheet::load(&[]).is_complete());
    }

    #[test]
    fn unknown_student_is_ignored() {
        let mut sheet = AttendanceSheet::load(&roster(&["a"]));
        sheet.mark("ghost", Status::Absent);
        sheet.set_remarks("ghost", "n/a".into());
        assert_eq!(sheet.counts(), (1, 0, 0));
    }

    #[test]
    fn payload_carries_context_fields() {
        let sheet = AttendanceSheet::load(&roster(&["a"]));
        let payload = sheet.payload("c9".into(), None, "2024-01-05".into(), "Head Admin".into());
        assert_eq!(payload.class_id, "c9");
        assert_eq!(payload.section_id, None);
        assert_eq!(payload.date, "2024-01-05");
        assert_eq!(payload.created_by, "Head Admin");
    }
}
