//! Multi-entry form management.
//!
//! The routine, exam-routine, and lesson forms all edit an array of entry
//! rows: "add another" appends a blank template, rows can be removed by
//! index (but at least one must remain), and validation errors are keyed
//! `field_{index}` so removing a row has to prune and reindex them.

use std::collections::HashMap;
use uuid::Uuid;

/// Key for a field error on a specific entry row.
pub fn error_key(field: &str, index: usize) -> String {
    format!("{}_{}", field, index)
}

/// Ordered entry rows, each with a stable key for keyed rendering.
#[derive(Clone, Debug)]
pub struct EntryRows<T> {
    rows: Vec<(Uuid, T)>,
}

impl<T: Clone> EntryRows<T> {
    pub fn new(first: T) -> Self {
        Self {
            rows: vec![(Uuid::new_v4(), first)],
        }
    }

    pub fn rows(&self) -> &[(Uuid, T)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn entries(&self) -> Vec<T> {
        self.rows.iter().map(|(_, e)| e.clone()).collect()
    }

    /// Append a blank row. The template carries forward creator/session
    /// metadata, so the caller builds it.
    pub fn add(&mut self, template: T) {
        self.rows.push((Uuid::new_v4(), template));
    }

    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut T)) {
        if let Some((_, entry)) = self.rows.get_mut(index) {
            f(entry);
        }
    }

    /// Remove the row at `index`, pruning its errors and shifting down the
    /// error keys of every row above it. Refuses to remove the last row.
    pub fn remove(&mut self, index: usize, errors: &mut HashMap<String, String>) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        reindex_errors(errors, index);
        true
    }

    /// Reset to a single blank row (after successful submission).
    pub fn reset(&mut self, first: T) {
        self.rows = vec![(Uuid::new_v4(), first)];
    }
}

/// Drop errors keyed to `removed` and renumber those keyed above it.
fn reindex_errors(errors: &mut HashMap<String, String>, removed: usize) {
    let old = std::mem::take(errors);
    for (key, value) in old {
        match split_key(&key) {
            Some((field, idx)) if idx == removed => {
                // errors for the removed row vanish with it
                let _ = (field, value);
            }
            Some((field, idx)) if idx > removed => {
                errors.insert(error_key(field, idx - 1), value);
            }
            _ => {
                errors.insert(key, value);
            }
        }
    }
}

fn split_key(key: &str) -> Option<(&str, usize)> {
    let (field, idx) = key.rsplit_once('_')?;
    Some((field, idx.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct ExamRow {
        subject: String,
    }

    #[test]
    fn starts_with_one_blank_entry() {
        let rows = EntryRows::new(ExamRow::default());
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn add_appends_blank_template() {
        let mut rows = EntryRows::new(ExamRow::default());
        rows.add(ExamRow::default());
        assert_eq!(rows.len(), 2);
        // stable keys differ so keyed rendering can tell the rows apart
        assert_ne!(rows.rows()[0].0, rows.rows()[1].0);
    }

    #[test]
    fn cannot_remove_last_entry() {
        let mut rows = EntryRows::new(ExamRow::default());
        let mut errors = HashMap::new();
        assert!(!rows.remove(0, &mut errors));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn remove_first_keeps_second_and_clears_its_errors() {
        let mut rows = EntryRows::new(ExamRow {
            subject: "Math".into(),
        });
        rows.add(ExamRow {
            subject: "English".into(),
        });

        let mut errors = HashMap::new();
        errors.insert(error_key("subjectName", 0), "Subject is required".into());
        errors.insert(error_key("day", 0), "Day is required".into());
        errors.insert(error_key("subjectName", 1), "Subject is required".into());

        assert!(rows.remove(0, &mut errors));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows()[0].1.subject, "English");

        // index-0 errors are gone, index-1 errors moved down to index 0
        assert!(!errors.contains_key(&error_key("day", 0)));
        assert_eq!(
            errors.get(&error_key("subjectName", 0)).map(String::as_str),
            Some("Subject is required")
        );
        assert!(!errors.contains_key(&error_key("subjectName", 1)));
    }

    #[test]
    fn unindexed_errors_survive_reindexing() {
        let mut rows = EntryRows::new(ExamRow::default());
        rows.add(ExamRow::default());
        let mut errors = HashMap::new();
        errors.insert("form".to_string(), "Something else".to_string());
        rows.remove(1, &mut errors);
        assert_eq!(errors.get("form").map(String::as_str), Some("Something else"));
    }

    #[test]
    fn update_edits_in_place() {
        let mut rows = EntryRows::new(ExamRow::default());
        rows.update(0, |r| r.subject = "Bangla".into());
        assert_eq!(rows.entries()[0].subject, "Bangla");
    }
}
