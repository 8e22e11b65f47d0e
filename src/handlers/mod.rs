pub mod diagnostic;
pub mod library;
pub mod progress;
pub mod study;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// All JSON API routes
pub fn api_router(state: AppState) -> Router {
  Router::new()
    .route("/api/library", get(library::get_library))
    .route("/api/user-performance", get(progress::user_performance))
    .route("/api/study/batch", get(study::study_batch))
    .route("/api/study/ratings", post(study::submit_ratings))
    .route("/api/study/summary", get(progress::study_summary))
    .route("/api/words/{word}/hard", post(library::toggle_hard))
    .route("/api/diagnostic/urgency", get(diagnostic::urgency_report))
    .with_state(state)
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub error: String,
}

/// Log a failure and answer with a JSON 500
pub(crate) fn internal_error(context: &str, e: impl std::fmt::Display) -> Response {
  tracing::error!("{}: {}", context, e);
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(ErrorBody {
      error: context.to_string(),
    }),
  )
    .into_response()
}

/// Current wall clock in epoch milliseconds
pub(crate) fn now_ms() -> i64 {
  chrono::Utc::now().timestamp_millis()
}

/// Local calendar date for day-boundary checks
pub(crate) fn today() -> chrono::NaiveDate {
  chrono::Local::now().date_naive()
}
