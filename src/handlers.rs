use crate::errors::AppError;
use crate::extractors::{extract_form, extract_json, goal_from_json};
use crate::models::{
    AddHabitRequest, GridView, Habit, HabitForm, Note, NoteRequest, Snapshot, ToggleRequest,
    ToggleResponse,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let grid = state.grid.lock().await;
    Html(render_index(&grid.view(today())))
}

pub async fn previous_month(State(state): State<AppState>) -> Redirect {
    state.grid.lock().await.go_to_previous_month();
    Redirect::to("/")
}

pub async fn next_month(State(state): State<AppState>) -> Redirect {
    state.grid.lock().await.go_to_next_month();
    Redirect::to("/")
}

pub async fn open_habit_dialog(State(state): State<AppState>) -> Redirect {
    state.grid.lock().await.open_habit_dialog();
    Redirect::to("/")
}

pub async fn cancel_habit_dialog(State(state): State<AppState>) -> Redirect {
    state.grid.lock().await.cancel_habit_dialog();
    Redirect::to("/")
}

/// A rejected form is shown back in the dialog, so both outcomes redirect.
pub async fn submit_habit(State(state): State<AppState>, Form(form): Form<HabitForm>) -> Redirect {
    let _ = state
        .grid
        .lock()
        .await
        .submit_habit_dialog(&form.name, &form.goal);
    Redirect::to("/")
}

pub async fn toggle_cell(
    State(state): State<AppState>,
    body: Result<Form<ToggleRequest>, FormRejection>,
) -> Result<Redirect, AppError> {
    let request = extract_form(body)?;
    state
        .grid
        .lock()
        .await
        .toggle(request.habit_id, request.date)?;
    Ok(Redirect::to("/"))
}

pub async fn open_note_dialog(State(state): State<AppState>) -> Redirect {
    state.grid.lock().await.open_note_dialog(today());
    Redirect::to("/")
}

pub async fn cancel_note_dialog(State(state): State<AppState>) -> Redirect {
    state.grid.lock().await.cancel_note_dialog();
    Redirect::to("/")
}

pub async fn save_note(State(state): State<AppState>, Form(request): Form<NoteRequest>) -> Redirect {
    let _ = state
        .grid
        .lock()
        .await
        .save_note_dialog(request.date, &request.text);
    Redirect::to("/")
}

pub async fn get_grid(State(state): State<AppState>) -> Json<GridView> {
    let grid = state.grid.lock().await;
    Json(grid.view(today()))
}

pub async fn api_previous_month(State(state): State<AppState>) -> Json<GridView> {
    let mut grid = state.grid.lock().await;
    grid.go_to_previous_month();
    Json(grid.view(today()))
}

pub async fn api_next_month(State(state): State<AppState>) -> Json<GridView> {
    let mut grid = state.grid.lock().await;
    grid.go_to_next_month();
    Json(grid.view(today()))
}

pub async fn add_habit(
    State(state): State<AppState>,
    body: Result<Json<AddHabitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let request = extract_json(body)?;
    let goal = goal_from_json(&request.goal)?;
    let habit = state
        .grid
        .lock()
        .await
        .add_habit(&request.name, goal)?;
    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn toggle(
    State(state): State<AppState>,
    body: Result<Json<ToggleRequest>, JsonRejection>,
) -> Result<Json<ToggleResponse>, AppError> {
    let request = extract_json(body)?;
    let response = state
        .grid
        .lock()
        .await
        .toggle(request.habit_id, request.date)?;
    Ok(Json(response))
}

pub async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    let grid = state.grid.lock().await;
    Json(grid.notes().to_vec())
}

pub async fn add_note(
    State(state): State<AppState>,
    body: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let request = extract_json(body)?;
    let note = state
        .grid
        .lock()
        .await
        .add_note(request.date, &request.text)?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn get_snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    let grid = state.grid.lock().await;
    Json(grid.snapshot())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
