use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    error::AppError,
    models::attendance::{AttendanceRecord, AttendanceStatus},
    state::AppState,
    validation::status::{select_options, status_options},
};

#[derive(Debug, Serialize)]
pub struct StatusOptionResponse {
    pub value: &'static str,
    pub indicator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl From<AttendanceStatus> for StatusOptionResponse {
    fn from(status: AttendanceStatus) -> Self {
        Self {
            value: status.label(),
            indicator: status.indicator_class(),
            description: status.description(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusOptionsResponse {
    pub options: [&'static str; 6],
    pub select_options: String,
    pub statuses: Vec<StatusOptionResponse>,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    #[serde(flatten)]
    pub status: StatusOptionResponse,
}

pub async fn get_status_options() -> Json<StatusOptionsResponse> {
    Json(StatusOptionsResponse {
        options: status_options(),
        select_options: select_options(),
        statuses: AttendanceStatus::ALL
            .into_iter()
            .map(StatusOptionResponse::from)
            .collect(),
    })
}

pub async fn validate_attendance(
    State(state): State<AppState>,
    Json(record): Json<AttendanceRecord>,
) -> Result<Json<ValidationResponse>, AppError> {
    let status = state.validator.validate(&record).inspect_err(|err| match err {
        AppError::Status(err) => tracing::info!(
            status = record.status.as_deref().unwrap_or("<missing>"),
            employee = %record.employee,
            error = %err,
            "Rejected attendance status"
        ),
        AppError::Validation(errors) => tracing::info!(
            employee = %record.employee,
            errors = ?errors,
            "Attendance record failed base validation"
        ),
        AppError::NotFound(_) => {}
    })?;

    tracing::debug!(status = %status, employee = %record.employee, "Attendance record accepted");

    Ok(Json(ValidationResponse {
        valid: true,
        status: status.into(),
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
