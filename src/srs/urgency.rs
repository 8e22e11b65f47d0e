//! Urgency scoring for due-word selection.
//!
//! Every rule below is additive: a word collects the contribution of each
//! condition that holds, so a hard, overdue, struggling word outranks one
//! that is merely overdue. The contributions live in
//! `config::URGENCY_WEIGHTS` so tuning does not touch this logic.

use crate::config::{DAY_MS, HISTORY_TAIL_LEN, SchedulerConfig, URGENCY_WEIGHTS};
use crate::domain::{Rating, WordProgress, WordStatus};

/// Integer priority of a word for the current moment.
///
/// `progress` is `None` for words the learner has never rated; those get the
/// flat unseen weight. Scores are non-negative.
pub fn urgency_score(progress: Option<&WordProgress>, now: i64, config: &SchedulerConfig) -> i64 {
  let w = &URGENCY_WEIGHTS;

  let Some(p) = progress else {
    return w.unseen;
  };

  let mut score = 0;

  if p.is_hard && p.status != WordStatus::MasteredToday {
    score += w.hard_flag;
  }

  // Failed today: must resurface before anything else
  if p.today_fail_count > 0 {
    score += w.failed_today_base + w.failed_today_per_fail * i64::from(p.today_fail_count);
  }

  // Overdue, scaled by full days late
  if p.due_date > 0 && p.due_date <= now {
    let days_overdue = (now - p.due_date) / DAY_MS;
    score += w.overdue_base + w.overdue_per_day * days_overdue;
  }

  if p.status == WordStatus::Learning && p.today_success_count == 0 {
    score += w.learning_unpracticed;
  }
  if p.status == WordStatus::New && p.today_success_count == 0 {
    score += w.new_unpracticed;
  }

  // Partial success today is damped, so repeats space out within the session
  if p.today_success_count > 0 && p.today_success_count < config.required_successes_per_day {
    score += (w.partial_success_start
      - w.partial_success_step * i64::from(p.today_success_count))
    .max(w.partial_success_floor);
  }

  // Difficulty pattern over the recent history tail
  let tail = &p.history[p.history.len().saturating_sub(HISTORY_TAIL_LEN)..];
  let failures = tail.iter().filter(|r| **r == Rating::Forget).count();
  if failures * 2 > tail.len() && !tail.is_empty() {
    score += w.struggling;
  }

  // Proactive boost for words coming due soon
  if p.due_date > now {
    let days_until_due = (p.due_date - now) / DAY_MS;
    if days_until_due <= 1 {
      score += w.due_tomorrow;
    } else if days_until_due <= 3 {
      score += w.due_soon;
    }
  }

  score
}

#[cfg(test)]
mod tests {
  use super::*;

  const NOW: i64 = 1_750_000_000_000;

  fn config() -> SchedulerConfig {
    SchedulerConfig::default()
  }

  fn progress(status: WordStatus) -> WordProgress {
    let mut p = WordProgress::new("Haus");
    p.status = status;
    p
  }

  #[test]
  fn test_unseen_word_scores_flat_weight() {
    assert_eq!(urgency_score(None, NOW, &config()), 50);
  }

  #[test]
  fn test_new_record_scores_like_unseen() {
    let p = progress(WordStatus::New);
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 50);
  }

  #[test]
  fn test_learning_without_success_today() {
    let p = progress(WordStatus::Learning);
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 55);
  }

  #[test]
  fn test_failed_today_scales_with_fail_count() {
    let mut p = progress(WordStatus::Learning);
    p.today_fail_count = 1;
    // failed (100 + 20) + learning without success (55)
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 175);

    p.today_fail_count = 3;
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 215);
  }

  #[test]
  fn test_overdue_scales_with_days_late() {
    let mut p = progress(WordStatus::Review);
    p.interval = 2;
    p.due_date = NOW - DAY_MS / 2; // half a day late: 0 full days
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 60);

    p.due_date = NOW - 2 * DAY_MS - DAY_MS / 2; // 2 full days late
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 90);
  }

  #[test]
  fn test_due_date_zero_is_not_overdue() {
    let p = progress(WordStatus::Review);
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 0);
  }

  #[test]
  fn test_partial_success_damping() {
    let mut p = progress(WordStatus::Learning);
    p.today_success_count = 1;
    p.history = vec![Rating::Remember];
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 20);

    p.today_success_count = 2;
    p.history = vec![Rating::Remember, Rating::Remember];
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 10);
  }

  #[test]
  fn test_reaching_required_successes_ends_damping() {
    let mut p = progress(WordStatus::MasteredToday);
    p.today_success_count = 3;
    p.history = vec![Rating::Remember, Rating::Remember, Rating::Remember];
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 0);
  }

  #[test]
  fn test_struggling_history_tail() {
    let mut p = progress(WordStatus::Review);
    p.history = vec![Rating::Forget, Rating::Forget, Rating::Remember];
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 25);
  }

  #[test]
  fn test_struggling_looks_at_last_five_only() {
    let mut p = progress(WordStatus::Review);
    // Old failures scroll out of the tail; the last five are 4/5 successes
    p.history = vec![
      Rating::Forget,
      Rating::Forget,
      Rating::Forget,
      Rating::Remember,
      Rating::Remember,
      Rating::Forget,
      Rating::Remember,
      Rating::Remember,
    ];
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 0);
  }

  #[test]
  fn test_empty_history_is_not_struggling() {
    let p = progress(WordStatus::Review);
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 0);
  }

  #[test]
  fn test_due_soon_boosts() {
    let mut p = progress(WordStatus::Review);
    p.due_date = NOW + DAY_MS / 2; // due within a day
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 40);

    p.due_date = NOW + 2 * DAY_MS + DAY_MS / 2; // due in 2 full days
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 20);

    p.due_date = NOW + 5 * DAY_MS; // far out: no boost
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 0);
  }

  #[test]
  fn test_hard_flag_boost() {
    let mut p = progress(WordStatus::Review);
    p.is_hard = true;
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 30);
  }

  #[test]
  fn test_hard_flag_ignored_once_mastered() {
    let mut p = progress(WordStatus::MasteredToday);
    p.is_hard = true;
    p.today_success_count = 3;
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 0);
  }

  #[test]
  fn test_rules_are_additive() {
    let mut p = progress(WordStatus::Learning);
    p.is_hard = true;
    p.today_fail_count = 1;
    p.due_date = NOW - DAY_MS; // exactly 1 full day late
    p.history = vec![Rating::Forget];

    // hard (30) + failed (120) + overdue (60 + 15) + learning (55) + struggling (25)
    assert_eq!(urgency_score(Some(&p), NOW, &config()), 305);
  }
}
