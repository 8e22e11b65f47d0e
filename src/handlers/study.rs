//! Study round handlers: batch selection and rating submission.
//!
//! Each handler is one load → transform → save unit over the learner state;
//! the engine functions themselves stay pure.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Rating, VocabEntry};
use crate::srs;
use crate::state::{self, AppState};

use super::{internal_error, now_ms, today};

/// One card of a study round
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
  pub word_id: String,
  /// Description variant to prompt with
  pub description_index: usize,
  pub data: VocabEntry,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
  /// True when nothing is due: the day's session is finished
  pub session_complete: bool,
  pub items: Vec<QuizItem>,
}

#[derive(Debug, Deserialize)]
pub struct RatingsForm {
  /// Word id → rating for one submitted round
  pub ratings: BTreeMap<String, Rating>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsResponse {
  pub completed_today: usize,
  pub daily_unique_count: usize,
}

/// GET /api/study/batch
pub async fn study_batch(State(app): State<AppState>) -> Response {
  let store = match state::try_lock(&app.store) {
    Ok(store) => store,
    Err(e) => return internal_error("Document store unavailable", e),
  };
  let mut study = match store.load_state() {
    Ok(study) => study,
    Err(e) => return internal_error("Failed to load learner state", e),
  };

  let rolled = srs::reset_if_new_day(&mut study, today());
  if rolled {
    tracing::info!("New session day: daily counters cleared");
  }

  let mut rng = rand::rng();
  let batch = srs::select_batch(&study, &store.library, &app.scheduler, now_ms(), &mut rng);

  if batch.is_empty() {
    if rolled {
      if let Err(e) = store.save_state(&study) {
        return internal_error("Failed to save learner state", e);
      }
    }
    return Json(BatchResponse {
      session_complete: true,
      items: Vec::new(),
    })
    .into_response();
  }

  let mut items = Vec::with_capacity(batch.len());
  for word_id in &batch {
    let Some(entry) = store.library.get(word_id) else {
      continue; // the selector only returns library ids
    };

    let last_index = study
      .progress
      .get(word_id)
      .and_then(|p| p.last_used_description_index);
    let index = pick_description_index(entry.description_count(), last_index, &mut rng);
    if let Some(p) = study.progress.get_mut(word_id) {
      p.last_used_description_index = Some(index);
    }

    // Introduced words count against the daily budget from this point on
    study.record_daily_word(word_id);

    items.push(QuizItem {
      word_id: word_id.clone(),
      description_index: index,
      data: entry.clone(),
    });
  }

  if let Err(e) = store.save_state(&study) {
    return internal_error("Failed to save learner state", e);
  }

  tracing::debug!("Serving study round with {} words", items.len());
  Json(BatchResponse {
    session_complete: false,
    items,
  })
  .into_response()
}

/// POST /api/study/ratings
pub async fn submit_ratings(
  State(app): State<AppState>,
  Json(form): Json<RatingsForm>,
) -> Response {
  let store = match state::try_lock(&app.store) {
    Ok(store) => store,
    Err(e) => return internal_error("Document store unavailable", e),
  };
  let mut study = match store.load_state() {
    Ok(study) => study,
    Err(e) => return internal_error("Failed to load learner state", e),
  };

  // A round submitted across midnight lands on the new day
  srs::reset_if_new_day(&mut study, today());

  let now = now_ms();
  for (word_id, rating) in &form.ratings {
    srs::apply_rating(&mut study, word_id, *rating, now, &app.scheduler);
  }

  if let Err(e) = store.save_state(&study) {
    return internal_error("Failed to save learner state", e);
  }

  tracing::debug!("Applied {} ratings", form.ratings.len());
  Json(RatingsResponse {
    completed_today: study.completed_today(),
    daily_unique_count: study.daily_unique_words.len(),
  })
  .into_response()
}

/// Random prompt variant, avoiding the previous one when there is a choice
fn pick_description_index<R: Rng + ?Sized>(
  count: usize,
  last: Option<usize>,
  rng: &mut R,
) -> usize {
  match count {
    0 | 1 => 0,
    _ => {
      let mut index = rng.random_range(0..count);
      if Some(index) == last {
        index = (index + 1) % count;
      }
      index
    }
  }
}
