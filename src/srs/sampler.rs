//! Weighted random sampling without replacement.
//!
//! Selection is biased by urgency score but never deterministic: every
//! candidate keeps at least weight 1, so low-urgency words still surface
//! occasionally instead of starving behind a fixed ranking.

use rand::Rng;
use std::collections::BTreeMap;

use crate::config::SchedulerConfig;
use crate::domain::WordProgress;
use crate::srs::urgency::urgency_score;

/// Draw up to `count` distinct ids from `pool`, biased by urgency.
///
/// When the pool fits inside `count` the whole pool is returned and no
/// randomness is consumed. The RNG is caller-supplied so tests can pin the
/// draws.
pub fn weighted_sample<R: Rng + ?Sized>(
  pool: &[String],
  progress: &BTreeMap<String, WordProgress>,
  now: i64,
  count: usize,
  config: &SchedulerConfig,
  rng: &mut R,
) -> Vec<String> {
  if count == 0 || pool.is_empty() {
    return Vec::new();
  }
  if pool.len() <= count {
    return pool.to_vec();
  }

  // Shift scores so every weight is positive
  let scored: Vec<(&String, i64)> = pool
    .iter()
    .map(|id| (id, urgency_score(progress.get(id), now, config)))
    .collect();
  let min_score = scored.iter().map(|(_, s)| *s).min().unwrap_or(0);

  let mut remaining: Vec<(&String, i64)> = scored
    .into_iter()
    .map(|(id, score)| (id, (score - min_score + 1).max(1)))
    .collect();

  let mut selected = Vec::with_capacity(count);
  for _ in 0..count {
    // The pool shrinks every draw, so the total is recomputed fresh each time
    let total: i64 = remaining.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.random_range(0..total);

    let mut index = remaining.len() - 1;
    for (i, (_, weight)) in remaining.iter().enumerate() {
      if roll < *weight {
        index = i;
        break;
      }
      roll -= *weight;
    }

    let (id, _) = remaining.remove(index);
    selected.push(id.clone());
  }

  selected
}
