use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ChildId, EvaluationSubmission, PracticeLogQuery, PracticeLogSubmission};
use super::repository::{
    EvaluationRepository, PlayerRepository, PracticeLogRepository, RepositoryError,
};
use super::service::{JournalService, JournalServiceError};
use crate::rubric::{EvaluationValues, Recommendation};

type SharedService<P, L, E> = Arc<JournalService<P, L, E>>;

/// Router exposing the rubric, practice journal, roster, and evaluation endpoints.
pub fn journal_router<P, L, E>(service: SharedService<P, L, E>) -> Router
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    Router::new()
        .route("/api/v1/rubric", get(rubric_handler::<P, L, E>))
        .route(
            "/api/v1/recommendations",
            post(recommendations_handler::<P, L, E>),
        )
        .route(
            "/api/v1/practice-logs",
            post(create_practice_log_handler::<P, L, E>).get(list_practice_logs_handler::<P, L, E>),
        )
        .route("/api/v1/players", get(list_players_handler::<P, L, E>))
        .route("/api/v1/players/:player_id", get(player_handler::<P, L, E>))
        .route(
            "/api/v1/players/:player_id/evaluations",
            get(player_evaluations_handler::<P, L, E>),
        )
        .route(
            "/api/v1/evaluations",
            post(create_evaluation_handler::<P, L, E>),
        )
        .route("/api/v1/coach/summary", get(coach_summary_handler::<P, L, E>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(default)]
    scores: EvaluationValues,
}

fn error_response(error: JournalServiceError) -> Response {
    let status = match &error {
        JournalServiceError::Validation(_) | JournalServiceError::Scores(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        JournalServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        JournalServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        JournalServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

/// Malformed bodies and query strings share the validation error shape.
fn rejection_response(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

pub(crate) async fn rubric_handler<P, L, E>(State(service): State<SharedService<P, L, E>>) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    let rubric = service.rubric();
    (StatusCode::OK, Json(json!({ "rubric": &*rubric }))).into_response()
}

pub(crate) async fn recommendations_handler<P, L, E>(
    State(service): State<SharedService<P, L, E>>,
    request: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match service.recommend(&request.scores) {
        Ok(details) => {
            let recommendations: Vec<String> =
                details.iter().map(Recommendation::formatted).collect();
            let payload = json!({
                "recommendations": recommendations,
                "details": details,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_practice_log_handler<P, L, E>(
    State(service): State<SharedService<P, L, E>>,
    submission: Result<Json<PracticeLogSubmission>, JsonRejection>,
) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    let Json(submission) = match submission {
        Ok(submission) => submission,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match service.record_practice(submission) {
        Ok(log) => (StatusCode::CREATED, Json(log)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_practice_logs_handler<P, L, E>(
    State(service): State<SharedService<P, L, E>>,
    query: Result<Query<PracticeLogQuery>, QueryRejection>,
) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match service.practice_logs(query) {
        Ok(logs) => (StatusCode::OK, Json(logs)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_players_handler<P, L, E>(
    State(service): State<SharedService<P, L, E>>,
) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    match service.players() {
        Ok(players) => (StatusCode::OK, Json(json!({ "players": players }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn player_handler<P, L, E>(
    State(service): State<SharedService<P, L, E>>,
    Path(player_id): Path<ChildId>,
) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    match service.player(player_id) {
        Ok(player) => (StatusCode::OK, Json(json!({ "player": player }))).into_response(),
        Err(JournalServiceError::Repository(RepositoryError::NotFound)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "player not found" })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn player_evaluations_handler<P, L, E>(
    State(service): State<SharedService<P, L, E>>,
    Path(player_id): Path<ChildId>,
) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    match service.evaluations_for(player_id) {
        Ok(evaluations) => {
            (StatusCode::OK, Json(json!({ "evaluations": evaluations }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_evaluation_handler<P, L, E>(
    State(service): State<SharedService<P, L, E>>,
    submission: Result<Json<EvaluationSubmission>, JsonRejection>,
) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    let Json(submission) = match submission {
        Ok(submission) => submission,
        Err(rejection) => return rejection_response(rejection.body_text()),
    };
    match service.record_evaluation(submission) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn coach_summary_handler<P, L, E>(
    State(service): State<SharedService<P, L, E>>,
) -> Response
where
    P: PlayerRepository + 'static,
    L: PracticeLogRepository + 'static,
    E: EvaluationRepository + 'static,
{
    match service.coach_summary() {
        Ok(summary) => (StatusCode::OK, Json(json!({ "summary": summary }))).into_response(),
        Err(error) => error_response(error),
    }
}
