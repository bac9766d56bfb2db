use crate::errors::GridError;
use crate::models::{Habit, HabitId};

/// Ordered list of habits. Habits are appended and never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct HabitRegistry {
    habits: Vec<Habit>,
}

impl HabitRegistry {
    /// Validates and appends a habit. `days_in_month` is the length of the
    /// month visible at creation time and caps the goal.
    pub fn add(&mut self, name: &str, goal: i64, days_in_month: u32) -> Result<Habit, GridError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GridError::EmptyName);
        }
        if goal <= 0 {
            return Err(GridError::GoalNotPositive(goal.to_string()));
        }
        if goal > i64::from(days_in_month) {
            return Err(GridError::GoalExceedsMonth {
                goal,
                days: days_in_month,
            });
        }

        let habit = Habit {
            id: HabitId::new(),
            name: name.to_string(),
            goal: goal as u32,
        };
        self.habits.push(habit.clone());
        Ok(habit)
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter()
    }
}

/// Parses the goal field as typed in the add-habit form.
pub fn parse_goal(raw: &str) -> Result<i64, GridError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| GridError::GoalNotPositive(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_habits_leave_the_registry_unchanged() {
        let mut registry = HabitRegistry::default();

        assert_eq!(registry.add("", 5, 31), Err(GridError::EmptyName));
        assert_eq!(registry.add("   ", 5, 31), Err(GridError::EmptyName));
        assert_eq!(
            registry.add("Read", 0, 31),
            Err(GridError::GoalNotPositive("0".into()))
        );
        assert_eq!(
            registry.add("Read", -3, 31),
            Err(GridError::GoalNotPositive("-3".into()))
        );
        assert_eq!(
            registry.add("Read", 999, 31),
            Err(GridError::GoalExceedsMonth { goal: 999, days: 31 })
        );
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn goal_may_equal_month_length() {
        let mut registry = HabitRegistry::default();
        assert!(registry.add("Water", 29, 29).is_ok());
        assert!(registry.add("Water", 30, 29).is_err());
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn names_are_trimmed_and_order_is_kept() {
        let mut registry = HabitRegistry::default();
        registry.add("  Read ", 10, 30).unwrap();
        registry.add("Run", 5, 30).unwrap();

        let names: Vec<&str> = registry.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Read", "Run"]);
    }

    #[test]
    fn same_name_gets_distinct_ids() {
        let mut registry = HabitRegistry::default();
        let first = registry.add("Read", 10, 30).unwrap().id;
        let second = registry.add("Read", 10, 30).unwrap().id;
        assert_ne!(first, second);
        assert_eq!(registry.get(second).map(|h| h.goal), Some(10));
    }

    #[test]
    fn goal_text_must_be_an_integer() {
        assert_eq!(parse_goal(" 12 "), Ok(12));
        assert_eq!(parse_goal("-1"), Ok(-1));
        assert_eq!(parse_goal(""), Err(GridError::GoalNotPositive(String::new())));
        assert_eq!(parse_goal("2.5"), Err(GridError::GoalNotPositive("2.5".into())));
    }
}
