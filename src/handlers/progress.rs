//! Learner-state and session summary handlers.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::srs;
use crate::state::{self, AppState};

use super::{internal_error, now_ms, today};

/// GET /api/user-performance
///
/// The learner state as the frontend should see it on load: the day
/// boundary is applied first, and persisted only when it actually rolled.
pub async fn user_performance(State(app): State<AppState>) -> Response {
  let store = match state::try_lock(&app.store) {
    Ok(store) => store,
    Err(e) => return internal_error("Document store unavailable", e),
  };
  let mut study = match store.load_state() {
    Ok(study) => study,
    Err(e) => return internal_error("Failed to load learner state", e),
  };

  if srs::reset_if_new_day(&mut study, today()) {
    if let Err(e) = store.save_state(&study) {
      return internal_error("Failed to save learner state", e);
    }
  }

  Json(study).into_response()
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
  /// Words the next round would contain
  pub remaining_due: usize,
  /// Today's uniques already mastered or failed out
  pub completed_today: usize,
  pub daily_unique_count: usize,
  pub session_complete: bool,
}

/// GET /api/study/summary
pub async fn study_summary(State(app): State<AppState>) -> Response {
  let store = match state::try_lock(&app.store) {
    Ok(store) => store,
    Err(e) => return internal_error("Document store unavailable", e),
  };
  let mut study = match store.load_state() {
    Ok(study) => study,
    Err(e) => return internal_error("Failed to load learner state", e),
  };

  if srs::reset_if_new_day(&mut study, today()) {
    if let Err(e) = store.save_state(&study) {
      return internal_error("Failed to save learner state", e);
    }
  }

  let mut rng = rand::rng();
  let due = srs::select_batch(&study, &store.library, &app.scheduler, now_ms(), &mut rng);

  Json(SummaryResponse {
    remaining_due: due.len(),
    completed_today: study.completed_today(),
    daily_unique_count: study.daily_unique_words.len(),
    session_complete: due.is_empty(),
  })
  .into_response()
}
