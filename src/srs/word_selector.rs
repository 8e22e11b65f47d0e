//! Due-word batch selection.
//!
//! Composes the urgency scorer and the weighted sampler over three priority
//! pools: outstanding in-session failures, words already introduced today,
//! and fresh words within the daily-unique budget. Selection is pure; the
//! caller commits the resulting ids to `daily_unique_words` when it commits
//! the batch.

use rand::Rng;

use crate::config::SchedulerConfig;
use crate::domain::{Library, StudyState};
use crate::srs::sampler::weighted_sample;

/// Pick the ids for the next study round.
///
/// An empty result means the day's session is complete. Words currently
/// `mastered_today`/`failed_today` never appear. Failed-today words are
/// returned in full ahead of everything else, even past `batch_size`; the
/// remaining slots are filled by weighted sampling.
pub fn select_batch<R: Rng + ?Sized>(
  state: &StudyState,
  library: &Library,
  config: &SchedulerConfig,
  now: i64,
  rng: &mut R,
) -> Vec<String> {
  // Words still in play today: never rated, or not yet mastered/failed out
  let active_pool: Vec<String> = library
    .keys()
    .filter(|id| {
      state
        .progress
        .get(*id)
        .is_none_or(|p| !p.status.is_done_for_today())
    })
    .cloned()
    .collect();

  if active_pool.is_empty() {
    return Vec::new();
  }

  // Outstanding failures always resurface, unconditionally
  let mut result: Vec<String> = active_pool
    .iter()
    .filter(|id| {
      state
        .progress
        .get(*id)
        .is_some_and(|p| p.today_fail_count > 0)
    })
    .cloned()
    .collect();

  // Words already introduced today fill the next slots
  let current_session: Vec<String> = active_pool
    .iter()
    .filter(|id| state.daily_unique_words.iter().any(|w| w == *id))
    .filter(|id| !result.contains(*id))
    .cloned()
    .collect();

  let slots = config.batch_size.saturating_sub(result.len());
  result.extend(weighted_sample(
    &current_session,
    &state.progress,
    now,
    slots,
    config,
    rng,
  ));

  // Fresh words only while the daily-unique budget lasts
  let fresh: Vec<String> = active_pool
    .iter()
    .filter(|id| !state.daily_unique_words.iter().any(|w| w == *id))
    .cloned()
    .collect();

  let remaining_budget = config
    .max_unique_words_per_day
    .saturating_sub(state.daily_unique_words.len());
  let needed = remaining_budget.min(config.batch_size.saturating_sub(result.len()));
  if needed > 0 && !fresh.is_empty() {
    result.extend(weighted_sample(
      &fresh,
      &state.progress,
      now,
      needed,
      config,
      rng,
    ));
  }

  result
}
