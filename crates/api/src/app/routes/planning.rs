use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use orderpoint_planning::{CaseStudy, CurveSpec, builtin_case_studies, evaluate};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/eoq", post(evaluate_eoq))
        .route("/case-studies", get(list_case_studies))
        .route("/case-studies/:slug", get(get_case_study))
}

pub async fn evaluate_eoq(
    Json(body): Json<dto::EvaluateEoqRequest>,
) -> axum::response::Response {
    let curve = body.curve_spec();
    if let Err(e) = curve.validate() {
        return errors::json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid_curve",
            e.to_string(),
        );
    }

    let params = body.parameters();

    tracing::debug!(
        annual_demand = params.annual_demand,
        ordering_cost = params.ordering_cost,
        holding_cost = params.holding_cost,
        "evaluating order quantity"
    );

    match evaluate(&params, &curve) {
        Ok(evaluation) => (
            StatusCode::OK,
            Json(dto::evaluation_to_json(&evaluation, body.currency.as_deref())),
        )
            .into_response(),
        Err(e) => errors::planning_error_to_response(e),
    }
}

pub async fn list_case_studies() -> axum::response::Response {
    let studies: Vec<_> = builtin_case_studies()
        .iter()
        .map(dto::case_study_to_json)
        .collect();

    Json(serde_json::json!({ "case_studies": studies })).into_response()
}

pub async fn get_case_study(Path(slug): Path<String>) -> axum::response::Response {
    let Some(study) = CaseStudy::find(&slug) else {
        return errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("no case study with slug {slug}"),
        );
    };

    // Built-in presets always carry valid parameters, but keep the error
    // path uniform rather than unwrapping.
    match evaluate(&study.parameters, &CurveSpec::default()) {
        Ok(evaluation) => Json(serde_json::json!({
            "case_study": dto::case_study_to_json(&study),
            "evaluation": dto::evaluation_to_json(&evaluation, Some(&study.currency)),
        }))
        .into_response(),
        Err(e) => errors::planning_error_to_response(e),
    }
}
