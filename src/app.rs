use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/month/prev", post(handlers::previous_month))
        .route("/month/next", post(handlers::next_month))
        .route("/habits", post(handlers::submit_habit))
        .route("/habits/new", post(handlers::open_habit_dialog))
        .route("/habits/cancel", post(handlers::cancel_habit_dialog))
        .route("/toggle", post(handlers::toggle_cell))
        .route("/notes", post(handlers::save_note))
        .route("/notes/new", post(handlers::open_note_dialog))
        .route("/notes/cancel", post(handlers::cancel_note_dialog))
        .route("/api/grid", get(handlers::get_grid))
        .route("/api/month/prev", post(handlers::api_previous_month))
        .route("/api/month/next", post(handlers::api_next_month))
        .route("/api/habits", post(handlers::add_habit))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/notes", get(handlers::list_notes).post(handlers::add_note))
        .route("/api/snapshot", get(handlers::get_snapshot))
        .with_state(state)
}
