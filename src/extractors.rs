//! Body extraction that keeps malformed requests in the `AppError` shape.

use crate::errors::{AppError, GridError};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::{Form, Json};
use serde_json::Value;

/// Unwraps a JSON body, turning axum's plain-text rejection into an
/// `AppError` with the same status.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result.map(|Json(value)| value).map_err(|err| AppError {
        status: err.status(),
        message: err.body_text(),
    })
}

pub fn extract_form<T>(result: Result<Form<T>, FormRejection>) -> Result<T, AppError> {
    result.map(|Form(value)| value).map_err(|err| AppError {
        status: err.status(),
        message: err.body_text(),
    })
}

/// Reads a JSON goal. Anything but an integer is not a positive integer.
pub fn goal_from_json(goal: &Value) -> Result<i64, GridError> {
    goal.as_i64()
        .ok_or_else(|| GridError::GoalNotPositive(goal.to_string()))
}
