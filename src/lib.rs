pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod extractors;
pub mod grid;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod notes;
pub mod registry;
pub mod state;
pub mod status;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use grid::HabitGrid;
pub use state::AppState;
