use crate::models::HabitId;
use axum::http::StatusCode;
use thiserror::Error;

/// Rejections raised by the grid's mutation entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("habit name must not be empty")]
    EmptyName,

    #[error("goal must be a positive integer, got `{0}`")]
    GoalNotPositive(String),

    #[error("goal {goal} exceeds the {days} days of the visible month")]
    GoalExceedsMonth { goal: i64, days: u32 },

    #[error("note text must not be empty")]
    EmptyNote,

    #[error("unknown habit {0}")]
    UnknownHabit(HabitId),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<GridError> for AppError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::UnknownHabit(_) => Self::not_found(err.to_string()),
            _ => Self::unprocessable(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": {
                "code": self.status.as_u16(),
                "message": self.message,
            }
        });
        (self.status, axum::Json(body)).into_response()
    }
}
