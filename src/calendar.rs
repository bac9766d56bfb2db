use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

/// Single-letter weekday labels, indexed from Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["D", "L", "M", "M", "J", "V", "S"];

const MONTH_NAMES: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u32,
}

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: date.weekday().num_days_from_sunday(),
        }
    }

    pub fn label(&self) -> &'static str {
        WEEKDAY_LABELS[self.weekday as usize]
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Every day of `reference`'s month, first to last.
pub fn month_days(reference: NaiveDate) -> Vec<CalendarDay> {
    let first = first_of_month(reference);
    (0..u64::from(days_in_month(reference)))
        .map(|offset| CalendarDay::new(first + Days::new(offset)))
        .collect()
}

pub fn days_in_month(reference: NaiveDate) -> u32 {
    last_of_month(reference).day()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Moves `date` by `delta` calendar months, clamping the day of month to the
/// last day of a shorter target month. Saturates at chrono's date bounds.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_lengths_follow_the_calendar() {
        assert_eq!(month_days(ymd(2023, 2, 14)).len(), 28);
        assert_eq!(month_days(ymd(2024, 2, 14)).len(), 29);
        assert_eq!(month_days(ymd(2024, 4, 30)).len(), 30);
        assert_eq!(month_days(ymd(2024, 12, 1)).len(), 31);
        assert_eq!(days_in_month(ymd(1900, 2, 1)), 28);
        assert_eq!(days_in_month(ymd(2000, 2, 1)), 29);
    }

    #[test]
    fn month_days_span_first_to_last() {
        for month in 1..=12 {
            let reference = ymd(2024, month, 15);
            let days = month_days(reference);
            assert_eq!(days.first().unwrap().date, ymd(2024, month, 1));
            let last = days.last().unwrap().date;
            assert_eq!(last.month(), month);
            assert_ne!(last.succ_opt().unwrap().month(), month);
            assert_eq!(days.len() as u32, days_in_month(reference));
        }
    }

    #[test]
    fn weekday_labels_start_on_sunday() {
        // 2024-09-01 is a Sunday.
        let days = month_days(ymd(2024, 9, 1));
        assert_eq!(days[0].weekday, 0);
        assert_eq!(days[0].label(), "D");
        assert_eq!(days[1].label(), "L");
        assert_eq!(days[6].weekday, 6);
        assert_eq!(days[6].label(), "S");
    }

    #[test]
    fn shift_clamps_to_month_end() {
        assert_eq!(shift_months(ymd(2024, 3, 31), -1), ymd(2024, 2, 29));
        assert_eq!(shift_months(ymd(2023, 3, 31), -1), ymd(2023, 2, 28));
        assert_eq!(shift_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(shift_months(ymd(2024, 12, 15), 1), ymd(2025, 1, 15));
        assert_eq!(shift_months(ymd(2024, 1, 15), -1), ymd(2023, 12, 15));
    }

    #[test]
    fn clamped_day_is_kept_after_the_short_month() {
        let feb = shift_months(ymd(2024, 1, 31), 1);
        assert_eq!(shift_months(feb, 1), ymd(2024, 3, 29));
    }

    #[test]
    fn next_then_previous_stays_in_the_same_month() {
        let start = ymd(2024, 2, 1);
        for offset in 0..400 {
            let date = start + Days::new(offset);
            assert!(same_month(shift_months(shift_months(date, 1), -1), date));
            assert!(same_month(shift_months(shift_months(date, -1), 1), date));
        }
    }

    #[test]
    fn shift_saturates_at_the_bounds() {
        assert_eq!(shift_months(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(shift_months(NaiveDate::MIN, -1), NaiveDate::MIN);
    }

    #[test]
    fn last_representable_month_is_complete() {
        let days = month_days(NaiveDate::MAX);
        assert_eq!(days.len(), 31);
        assert_eq!(days_in_month(NaiveDate::MAX), 31);
        assert_eq!(days.last().unwrap().date, NaiveDate::MAX);
        assert_eq!(days.first().unwrap().day(), 1);
    }

    #[test]
    fn first_representable_month_is_complete() {
        let days = month_days(NaiveDate::MIN);
        assert_eq!(days.first().unwrap().date, NaiveDate::MIN);
        assert_eq!(days.len() as u32, last_of_month(NaiveDate::MIN).day());
    }

    #[test]
    fn titles_use_french_month_names() {
        assert_eq!(month_title(ymd(2024, 2, 1)), "février 2024");
        assert_eq!(month_title(ymd(2025, 8, 31)), "août 2025");
    }
}
