use crate::models::{HabitId, LedgerEntry};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sparse record of checked cells. A missing entry reads as unchecked;
/// entries are flipped, never removed.
#[derive(Debug, Clone, Default)]
pub struct CompletionLedger {
    entries: BTreeMap<(HabitId, NaiveDate), bool>,
}

impl CompletionLedger {
    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, habit: HabitId, date: NaiveDate) -> bool {
        let entry = self.entries.entry((habit, date)).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_checked(&self, habit: HabitId, date: NaiveDate) -> bool {
        self.entries.get(&(habit, date)).copied().unwrap_or(false)
    }

    pub fn count_checked<I>(&self, habit: HabitId, dates: I) -> u32
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates
            .into_iter()
            .filter(|date| self.is_checked(habit, *date))
            .count() as u32
    }

    pub fn entries(&self) -> Vec<LedgerEntry> {
        self.entries
            .iter()
            .map(|(&(habit_id, date), &checked)| LedgerEntry {
                habit_id,
                date,
                checked,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::month_days;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn absent_cells_are_unchecked() {
        let ledger = CompletionLedger::default();
        assert!(!ledger.is_checked(HabitId::new(), ymd(2024, 5, 1)));
    }

    #[test]
    fn double_toggle_restores_the_cell() {
        let mut ledger = CompletionLedger::default();
        let habit = HabitId::new();
        let date = ymd(2024, 5, 1);

        assert!(ledger.toggle(habit, date));
        assert!(ledger.is_checked(habit, date));
        assert!(!ledger.toggle(habit, date));
        assert!(!ledger.is_checked(habit, date));
    }

    #[test]
    fn count_is_scoped_to_the_given_dates() {
        let mut ledger = CompletionLedger::default();
        let habit = HabitId::new();
        let days: Vec<NaiveDate> = month_days(ymd(2024, 5, 1)).iter().map(|d| d.date).collect();

        for date in days.iter().take(10) {
            ledger.toggle(habit, *date);
        }
        ledger.toggle(habit, ymd(2024, 6, 3));

        assert_eq!(ledger.count_checked(habit, days.iter().copied()), 10);
        assert_eq!(ledger.count_checked(habit, [ymd(2024, 6, 3)]), 1);
    }

    #[test]
    fn habits_do_not_share_cells() {
        let mut ledger = CompletionLedger::default();
        let first = HabitId::new();
        let second = HabitId::new();
        let date = ymd(2024, 5, 1);

        ledger.toggle(first, date);
        assert!(ledger.is_checked(first, date));
        assert!(!ledger.is_checked(second, date));
    }

    #[test]
    fn unchecked_entries_are_kept() {
        let mut ledger = CompletionLedger::default();
        let habit = HabitId::new();
        let date = ymd(2024, 5, 1);
        ledger.toggle(habit, date);
        ledger.toggle(habit, date);

        let entries = ledger.entries();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].checked);
    }
}
