use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use orderpoint_planning::PlanningError;

pub fn planning_error_to_response(err: PlanningError) -> axum::response::Response {
    match err {
        PlanningError::InvalidInput(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_input", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
