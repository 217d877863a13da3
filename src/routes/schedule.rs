use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    message::{ErrorResponse, ScheduleRequest},
    services::scheduler::generate_schedule,
    state::SharedState,
};

pub async fn schedule_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;

    let result = generate_schedule(
        state.model.as_ref(),
        payload.age,
        &payload.subjects,
        payload.goals(),
    )
    .await;

    match result {
        Ok(schedule) => Ok(Json(schedule).into_response()),
        Err(err) => {
            tracing::warn!(error = %err, "schedule generation failed");
            Ok(Json(ErrorResponse { error: err.to_string() }).into_response())
        }
    }
}
