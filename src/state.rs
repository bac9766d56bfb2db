use crate::grid::HabitGrid;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub grid: Arc<Mutex<HabitGrid>>,
}

impl AppState {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            grid: Arc::new(Mutex::new(HabitGrid::new(reference_date))),
        }
    }
}
