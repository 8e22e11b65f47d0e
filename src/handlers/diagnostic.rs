//! Scheduler diagnostics for tuning the urgency weights.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::srs;
use crate::state::{self, AppState};

use super::{internal_error, now_ms};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgencyRow {
  pub word_id: String,
  pub status: String,
  pub score: i64,
}

/// GET /api/diagnostic/urgency
///
/// Urgency scores over the active pool, highest first. Read-only: the
/// state is reported as stored, without running the day reset.
pub async fn urgency_report(State(app): State<AppState>) -> Response {
  let store = match state::try_lock(&app.store) {
    Ok(store) => store,
    Err(e) => return internal_error("Document store unavailable", e),
  };
  let study = match store.load_state() {
    Ok(study) => study,
    Err(e) => return internal_error("Failed to load learner state", e),
  };

  let now = now_ms();
  let mut rows: Vec<UrgencyRow> = store
    .library
    .keys()
    .filter(|id| {
      study
        .progress
        .get(*id)
        .is_none_or(|p| !p.status.is_done_for_today())
    })
    .map(|id| {
      let progress = study.progress.get(id);
      UrgencyRow {
        word_id: id.clone(),
        status: progress
          .map(|p| p.status.as_str())
          .unwrap_or("new")
          .to_string(),
        score: srs::urgency_score(progress, now, &app.scheduler),
      }
    })
    .collect();

  rows.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word_id.cmp(&b.word_id)));

  Json(rows).into_response()
}
