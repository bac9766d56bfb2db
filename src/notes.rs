use crate::calendar::same_month;
use crate::errors::GridError;
use crate::models::{Note, NoteId};
use chrono::NaiveDate;

/// Notes attached to calendar days, in creation order.
#[derive(Debug, Clone, Default)]
pub struct NoteBook {
    notes: Vec<Note>,
}

impl NoteBook {
    pub fn add(&mut self, date: NaiveDate, text: &str) -> Result<Note, GridError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GridError::EmptyNote);
        }

        let note = Note {
            id: NoteId::new(),
            date,
            text: text.to_string(),
        };
        self.notes.push(note.clone());
        Ok(note)
    }

    pub fn in_month(&self, reference: NaiveDate) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| same_month(note.date, reference))
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[Note] {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn blank_notes_are_rejected() {
        let mut book = NoteBook::default();
        assert_eq!(book.add(ymd(2024, 2, 1), "  \n"), Err(GridError::EmptyNote));
        assert!(book.all().is_empty());
    }

    #[test]
    fn notes_are_filtered_by_month() {
        let mut book = NoteBook::default();
        book.add(ymd(2024, 2, 3), " slept badly ").unwrap();
        book.add(ymd(2024, 3, 1), "new month").unwrap();
        book.add(ymd(2023, 2, 3), "a year ago").unwrap();

        let february = book.in_month(ymd(2024, 2, 20));
        assert_eq!(february.len(), 1);
        assert_eq!(february[0].text, "slept badly");
        assert_eq!(book.all().len(), 3);
    }
}
