use chrono::NaiveDate;

use crate::domain::{StudyState, WordStatus};

/// Roll the learner state over to a new calendar day if needed.
///
/// Returns `true` when a rollover happened; on `false` the state is
/// untouched and the caller may skip persisting it. Per-day counters and
/// history are cleared on every record, and words parked as mastered or
/// failed for the day rejoin the review rotation.
pub fn reset_if_new_day(state: &mut StudyState, today: NaiveDate) -> bool {
  let today = today.to_string();
  if state.last_session_date == today {
    return false;
  }

  for progress in state.progress.values_mut() {
    progress.today_fail_count = 0;
    progress.today_success_count = 0;
    progress.history.clear();
    if progress.status.is_done_for_today() {
      progress.status = WordStatus::Review;
    }
  }

  state.daily_unique_words.clear();
  state.last_session_date = today;
  true
}
