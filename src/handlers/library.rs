//! Library handlers: the read-only word list and the difficulty flag.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::state::{self, AppState};

use super::{ErrorBody, internal_error};

/// GET /api/library
pub async fn get_library(State(app): State<AppState>) -> Response {
  let store = match state::try_lock(&app.store) {
    Ok(store) => store,
    Err(e) => return internal_error("Document store unavailable", e),
  };
  Json(store.library.clone()).into_response()
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardToggleResponse {
  pub word_id: String,
  pub is_hard: bool,
}

/// POST /api/words/{word}/hard
///
/// Flips the learner's difficulty flag, creating the progress record on
/// first use so the flag survives before the word is ever rated.
pub async fn toggle_hard(State(app): State<AppState>, Path(word): Path<String>) -> Response {
  let store = match state::try_lock(&app.store) {
    Ok(store) => store,
    Err(e) => return internal_error("Document store unavailable", e),
  };

  if !store.library.contains_key(&word) {
    return (
      StatusCode::NOT_FOUND,
      Json(ErrorBody {
        error: format!("Unknown word: {}", word),
      }),
    )
      .into_response();
  }

  let mut study = match store.load_state() {
    Ok(study) => study,
    Err(e) => return internal_error("Failed to load learner state", e),
  };

  let progress = study.progress_or_insert(&word);
  progress.is_hard = !progress.is_hard;
  let is_hard = progress.is_hard;

  if let Err(e) = store.save_state(&study) {
    return internal_error("Failed to save learner state", e);
  }

  tracing::debug!("Toggled hard flag for {}: {}", word, is_hard);
  Json(HardToggleResponse {
    word_id: word,
    is_hard,
  })
  .into_response()
}
