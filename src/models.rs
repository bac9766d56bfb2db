use crate::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable habit identifier, assigned once at creation. The ledger keys on it
/// so two habits sharing a display name never share completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(Uuid);

impl HabitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub goal: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub date: NaiveDate,
    pub text: String,
}

/// `goal` stays untyped so a non-integer reaches validation instead of
/// failing deserialization.
#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub goal: serde_json::Value,
}

/// Raw add-habit form fields; `goal` is kept as typed so a rejected submit
/// can show it back.
#[derive(Debug, Deserialize)]
pub struct HabitForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub goal: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub habit_id: HabitId,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct NoteRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub habit_id: HabitId,
    pub date: NaiveDate,
    pub checked: bool,
    pub achieved: u32,
    pub goal: u32,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub day: u32,
    pub weekday: String,
    pub is_today: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellView {
    pub date: NaiveDate,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitRow {
    pub id: HabitId,
    pub name: String,
    pub goal: u32,
    pub achieved: u32,
    pub status: Status,
    pub color: String,
    pub status_color: String,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitDraft {
    pub name: String,
    pub goal: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub date: NaiveDate,
    pub text: String,
    pub error: Option<String>,
}

/// At most one dialog is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dialog {
    #[default]
    Closed,
    AddHabit(HabitDraft),
    Note(NoteDraft),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridView {
    pub title: String,
    pub reference_date: NaiveDate,
    pub today: NaiveDate,
    pub days: Vec<DayColumn>,
    pub rows: Vec<HabitRow>,
    pub notes: Vec<Note>,
    pub dialog: Dialog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub habit_id: HabitId,
    pub date: NaiveDate,
    pub checked: bool,
}

/// Serialized form of the whole grid state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub reference_date: NaiveDate,
    pub habits: Vec<Habit>,
    pub ledger: Vec<LedgerEntry>,
    pub notes: Vec<Note>,
}
