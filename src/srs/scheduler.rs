//! The rating state machine.
//!
//! A word moves `new → learning` on its first rating of the day and leaves
//! the day's rotation either as `mastered_today` (enough successes) or
//! `failed_today` (too many failures). Interval growth happens only at the
//! mastery transition; the daily counters are cleared exclusively by the
//! day-boundary reset.

use crate::config::{DAY_MS, SchedulerConfig};
use crate::domain::{Rating, StudyState, WordStatus};

/// Apply one flip-card rating to the learner state.
///
/// Creates the progress record on first contact and records the word in
/// today's unique list (idempotent). Ratings for distinct words commute:
/// applying a batch in any order produces the same state.
pub fn apply_rating(
  state: &mut StudyState,
  word_id: &str,
  rating: Rating,
  now: i64,
  config: &SchedulerConfig,
) {
  state.record_daily_word(word_id);

  let progress = state.progress_or_insert(word_id);
  progress.history.push(rating);
  if progress.status == WordStatus::New {
    progress.status = WordStatus::Learning;
  }

  match rating {
    Rating::Forget => {
      progress.today_fail_count += 1;

      if progress.today_fail_count >= config.max_failures_per_day {
        progress.status = WordStatus::FailedToday;
        progress.due_date = now + DAY_MS;
        if progress.interval > 1 {
          // Keep the pre-failure level so recovery can jump back to it
          progress.last_max_interval = progress.interval;
        }
        progress.interval = 1;
      }
    }
    Rating::Remember => {
      progress.today_success_count += 1;

      if progress.today_success_count >= config.required_successes_per_day {
        progress.status = WordStatus::MasteredToday;

        let next_interval = if progress.today_fail_count == 0 {
          if progress.interval == 0 {
            1
          } else if progress.last_max_interval > 0 && progress.interval == 1 {
            // Clean day after an earlier failure: restore lost momentum
            progress.last_max_interval * 2
          } else {
            (progress.interval * 2).max(1)
          }
        } else {
          // Mastered today, but with struggles: no growth credit
          1
        };

        progress.interval = next_interval;
        progress.due_date = now + next_interval * DAY_MS;
      }
    }
  }
}
