//! The habit grid state container.
//!
//! All state lives in [`HabitGrid`]; its methods are the only way to change
//! it. Rendering goes through [`HabitGrid::view`], which derives every
//! aggregate from the ledger on each call, so achieved counts cannot drift.

use crate::calendar::{self, CalendarDay};
use crate::errors::GridError;
use crate::ledger::CompletionLedger;
use crate::models::{
    CellView, DayColumn, Dialog, GridView, Habit, HabitDraft, HabitId, HabitRow, Note, NoteDraft,
    Snapshot, ToggleResponse,
};
use crate::notes::NoteBook;
use crate::registry::{parse_goal, HabitRegistry};
use crate::status::{classify, habit_color};
use chrono::NaiveDate;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct HabitGrid {
    reference_date: NaiveDate,
    registry: HabitRegistry,
    ledger: CompletionLedger,
    notes: NoteBook,
    dialog: Dialog,
}

impl HabitGrid {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            registry: HabitRegistry::default(),
            ledger: CompletionLedger::default(),
            notes: NoteBook::default(),
            dialog: Dialog::Closed,
        }
    }

    pub fn visible_days(&self) -> Vec<CalendarDay> {
        calendar::month_days(self.reference_date)
    }

    fn visible_dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.visible_days().into_iter().map(|day| day.date)
    }

    pub fn go_to_previous_month(&mut self) -> NaiveDate {
        self.shift_month(-1)
    }

    pub fn go_to_next_month(&mut self) -> NaiveDate {
        self.shift_month(1)
    }

    fn shift_month(&mut self, delta: i32) -> NaiveDate {
        let from = self.reference_date;
        self.reference_date = calendar::shift_months(from, delta);
        info!(%from, to = %self.reference_date, "month changed");
        self.reference_date
    }

    pub fn add_habit(&mut self, name: &str, goal: i64) -> Result<Habit, GridError> {
        let days = calendar::days_in_month(self.reference_date);
        match self.registry.add(name, goal, days) {
            Ok(habit) => {
                info!(habit_id = %habit.id, name = %habit.name, goal = habit.goal, "habit added");
                Ok(habit)
            }
            Err(err) => {
                warn!(error = %err, "habit rejected");
                Err(err)
            }
        }
    }

    pub fn habits(&self) -> impl Iterator<Item = &Habit> {
        self.registry.iter()
    }

    /// Flips a cell. The date does not have to lie in the visible month.
    pub fn toggle(&mut self, habit_id: HabitId, date: NaiveDate) -> Result<ToggleResponse, GridError> {
        let goal = self
            .registry
            .get(habit_id)
            .map(|habit| habit.goal)
            .ok_or(GridError::UnknownHabit(habit_id))?;

        let checked = self.ledger.toggle(habit_id, date);
        let achieved = self.achieved(habit_id);
        info!(%habit_id, %date, checked, achieved, "cell toggled");

        Ok(ToggleResponse {
            habit_id,
            date,
            checked,
            achieved,
            goal,
            status: classify(achieved, goal),
        })
    }

    /// Checked days of the visible month only.
    pub fn achieved(&self, habit_id: HabitId) -> u32 {
        self.ledger.count_checked(habit_id, self.visible_dates())
    }

    pub fn open_habit_dialog(&mut self) {
        self.dialog = Dialog::AddHabit(HabitDraft::default());
    }

    pub fn cancel_habit_dialog(&mut self) {
        if matches!(self.dialog, Dialog::AddHabit(_)) {
            self.dialog = Dialog::Closed;
        }
    }

    /// Submits the add-habit form. On rejection the dialog stays open with
    /// the typed values and the reason; on success it closes and clears.
    pub fn submit_habit_dialog(&mut self, name: &str, goal: &str) -> Result<Habit, GridError> {
        let result = parse_goal(goal).and_then(|goal| self.add_habit(name, goal));
        match &result {
            Ok(_) => self.dialog = Dialog::Closed,
            Err(err) => {
                self.dialog = Dialog::AddHabit(HabitDraft {
                    name: name.to_string(),
                    goal: goal.to_string(),
                    error: Some(err.to_string()),
                });
            }
        }
        result
    }

    /// Opens the note dialog on `today` when it is visible, otherwise on the
    /// first day of the visible month.
    pub fn open_note_dialog(&mut self, today: NaiveDate) {
        let date = if calendar::same_month(today, self.reference_date) {
            today
        } else {
            calendar::first_of_month(self.reference_date)
        };
        self.dialog = Dialog::Note(NoteDraft {
            date,
            text: String::new(),
            error: None,
        });
    }

    pub fn cancel_note_dialog(&mut self) {
        if matches!(self.dialog, Dialog::Note(_)) {
            self.dialog = Dialog::Closed;
        }
    }

    pub fn add_note(&mut self, date: NaiveDate, text: &str) -> Result<Note, GridError> {
        match self.notes.add(date, text) {
            Ok(note) => {
                info!(note_id = %note.id, %date, "note saved");
                Ok(note)
            }
            Err(err) => {
                warn!(error = %err, %date, "note rejected");
                Err(err)
            }
        }
    }

    pub fn save_note_dialog(&mut self, date: NaiveDate, text: &str) -> Result<Note, GridError> {
        let result = self.add_note(date, text);
        match &result {
            Ok(_) => self.dialog = Dialog::Closed,
            Err(err) => {
                self.dialog = Dialog::Note(NoteDraft {
                    date,
                    text: text.to_string(),
                    error: Some(err.to_string()),
                });
            }
        }
        result
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.all()
    }

    pub fn view(&self, today: NaiveDate) -> GridView {
        let days = self.visible_days();

        let columns = days
            .iter()
            .map(|day| DayColumn {
                date: day.date,
                day: day.day(),
                weekday: day.label().to_string(),
                is_today: day.date == today,
            })
            .collect();

        let rows = self
            .registry
            .iter()
            .enumerate()
            .map(|(position, habit)| {
                let cells: Vec<CellView> = days
                    .iter()
                    .map(|day| CellView {
                        date: day.date,
                        checked: self.ledger.is_checked(habit.id, day.date),
                    })
                    .collect();
                let achieved = cells.iter().filter(|cell| cell.checked).count() as u32;
                let status = classify(achieved, habit.goal);
                HabitRow {
                    id: habit.id,
                    name: habit.name.clone(),
                    goal: habit.goal,
                    achieved,
                    status,
                    color: habit_color(position).to_string(),
                    status_color: status.color().to_string(),
                    cells,
                }
            })
            .collect();

        GridView {
            title: calendar::month_title(self.reference_date),
            reference_date: self.reference_date,
            today,
            days: columns,
            rows,
            notes: self.notes.in_month(self.reference_date),
            dialog: self.dialog.clone(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            reference_date: self.reference_date,
            habits: self.registry.iter().cloned().collect(),
            ledger: self.ledger.entries(),
            notes: self.notes.all().to_vec(),
        }
    }
}
