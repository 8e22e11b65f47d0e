use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scheduling lifecycle of a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WordStatus {
  /// Never rated
  #[default]
  New,
  /// Rated at least once, not yet through a full day
  Learning,
  /// Carried across days on its interval schedule
  Review,
  /// Reached the required successes for the current day
  MasteredToday,
  /// Reached the failure cap for the current day
  FailedToday,
}

impl WordStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::New => "new",
      Self::Learning => "learning",
      Self::Review => "review",
      Self::MasteredToday => "mastered_today",
      Self::FailedToday => "failed_today",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "new" => Some(Self::New),
      "learning" => Some(Self::Learning),
      "review" => Some(Self::Review),
      "mastered_today" => Some(Self::MasteredToday),
      "failed_today" => Some(Self::FailedToday),
      _ => None,
    }
  }

  /// True once the word needs no further reviews this calendar day
  pub fn is_done_for_today(&self) -> bool {
    matches!(self, Self::MasteredToday | Self::FailedToday)
  }
}

/// A single flip-card answer; also the element type of the per-day history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
  Remember,
  Forget,
}

impl Rating {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Remember => "remember",
      Self::Forget => "forget",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "remember" => Some(Self::Remember),
      "forget" => Some(Self::Forget),
      _ => None,
    }
  }

  pub fn is_success(&self) -> bool {
    matches!(self, Self::Remember)
  }
}

/// Per-word learning progress, created lazily the first time a word is rated.
///
/// Serialized field names match the frontend's document format; every field
/// added after the first release carries a default so older documents load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordProgress {
  pub id: String,
  /// Days until the next due date; 0 = never scheduled
  pub interval: i64,
  /// Epoch milliseconds, 0 if unset
  pub due_date: i64,
  /// Highest interval reached before a failure reset it
  pub last_max_interval: i64,
  pub status: WordStatus,
  pub today_fail_count: u32,
  pub today_success_count: u32,
  /// Ratings received during the current day, oldest first
  pub history: Vec<Rating>,
  /// Learner-set difficulty flag
  pub is_hard: bool,
  /// Description variant shown on the word's last appearance
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_used_description_index: Option<usize>,
}

impl Default for WordProgress {
  fn default() -> Self {
    Self {
      id: String::new(),
      interval: 0,
      due_date: 0,
      last_max_interval: 0,
      status: WordStatus::New,
      today_fail_count: 0,
      today_success_count: 0,
      history: Vec::new(),
      is_hard: false,
      last_used_description_index: None,
    }
  }
}

impl WordProgress {
  pub fn new(id: &str) -> Self {
    Self {
      id: id.to_string(),
      ..Self::default()
    }
  }
}

/// The learner's full scheduling state: one progress record per touched word
/// plus the bookkeeping of the current calendar-day session.
///
/// A word absent from `progress` is an implicit untouched new word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyState {
  pub progress: BTreeMap<String, WordProgress>,
  /// Calendar date (YYYY-MM-DD) of the last session, empty if none yet
  pub last_session_date: String,
  /// Distinct words touched today, insertion order preserved
  pub daily_unique_words: Vec<String>,
}

impl StudyState {
  /// Record a word as touched today. Idempotent, keeps insertion order.
  pub fn record_daily_word(&mut self, id: &str) {
    if !self.daily_unique_words.iter().any(|w| w == id) {
      self.daily_unique_words.push(id.to_string());
    }
  }

  /// Progress record for `id`, created fresh if the word was never rated
  pub fn progress_or_insert(&mut self, id: &str) -> &mut WordProgress {
    self
      .progress
      .entry(id.to_string())
      .or_insert_with(|| WordProgress::new(id))
  }

  /// Words finished (mastered or failed out) among today's uniques
  pub fn completed_today(&self) -> usize {
    self
      .daily_unique_words
      .iter()
      .filter(|id| {
        self
          .progress
          .get(*id)
          .is_some_and(|p| p.status.is_done_for_today())
      })
      .count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // WordStatus tests

  #[test]
  fn test_status_as_str_roundtrip() {
    let statuses = vec![
      WordStatus::New,
      WordStatus::Learning,
      WordStatus::Review,
      WordStatus::MasteredToday,
      WordStatus::FailedToday,
    ];

    for status in statuses {
      let s = status.as_str();
      assert_eq!(WordStatus::from_str(s), Some(status));
    }
  }

  #[test]
  fn test_status_from_str_invalid() {
    assert_eq!(WordStatus::from_str("invalid"), None);
    assert_eq!(WordStatus::from_str(""), None);
    assert_eq!(WordStatus::from_str("New"), None); // case sensitive
  }

  #[test]
  fn test_status_is_done_for_today() {
    assert!(WordStatus::MasteredToday.is_done_for_today());
    assert!(WordStatus::FailedToday.is_done_for_today());
    assert!(!WordStatus::New.is_done_for_today());
    assert!(!WordStatus::Learning.is_done_for_today());
    assert!(!WordStatus::Review.is_done_for_today());
  }

  #[test]
  fn test_status_serde_snake_case() {
    let s: WordStatus = serde_json::from_str("\"mastered_today\"").unwrap();
    assert_eq!(s, WordStatus::MasteredToday);
    assert_eq!(
      serde_json::to_string(&WordStatus::FailedToday).unwrap(),
      "\"failed_today\""
    );
  }

  // Rating tests

  #[test]
  fn test_rating_roundtrip() {
    for rating in [Rating::Remember, Rating::Forget] {
      assert_eq!(Rating::from_str(rating.as_str()), Some(rating));
    }
  }

  #[test]
  fn test_rating_is_success() {
    assert!(Rating::Remember.is_success());
    assert!(!Rating::Forget.is_success());
  }

  #[test]
  fn test_rating_serde_lowercase() {
    let r: Rating = serde_json::from_str("\"forget\"").unwrap();
    assert_eq!(r, Rating::Forget);
    assert_eq!(serde_json::to_string(&Rating::Remember).unwrap(), "\"remember\"");
  }

  // WordProgress tests

  #[test]
  fn test_progress_new_defaults() {
    let p = WordProgress::new("Haus");

    assert_eq!(p.id, "Haus");
    assert_eq!(p.interval, 0);
    assert_eq!(p.due_date, 0);
    assert_eq!(p.last_max_interval, 0);
    assert_eq!(p.status, WordStatus::New);
    assert_eq!(p.today_fail_count, 0);
    assert_eq!(p.today_success_count, 0);
    assert!(p.history.is_empty());
    assert!(!p.is_hard);
    assert!(p.last_used_description_index.is_none());
  }

  #[test]
  fn test_progress_serde_camel_case() {
    let p = WordProgress {
      id: "Haus".to_string(),
      interval: 4,
      due_date: 1_700_000_000_000,
      last_max_interval: 8,
      status: WordStatus::Review,
      today_fail_count: 1,
      today_success_count: 2,
      history: vec![Rating::Forget, Rating::Remember],
      is_hard: true,
      last_used_description_index: Some(1),
    };

    let json = serde_json::to_string(&p).unwrap();
    assert!(json.contains("\"dueDate\":1700000000000"));
    assert!(json.contains("\"lastMaxInterval\":8"));
    assert!(json.contains("\"todayFailCount\":1"));
    assert!(json.contains("\"todaySuccessCount\":2"));
    assert!(json.contains("\"isHard\":true"));
    assert!(json.contains("\"lastUsedDescriptionIndex\":1"));

    let back: WordProgress = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
  }

  #[test]
  fn test_progress_deserialize_older_document() {
    // Records written before the difficulty flag and description tracking
    // existed must still load, with the gaps defaulted.
    let json = r#"{
      "id": "Tisch",
      "interval": 2,
      "dueDate": 1700000000000,
      "status": "review"
    }"#;

    let p: WordProgress = serde_json::from_str(json).unwrap();
    assert_eq!(p.id, "Tisch");
    assert_eq!(p.interval, 2);
    assert_eq!(p.last_max_interval, 0);
    assert_eq!(p.today_fail_count, 0);
    assert_eq!(p.today_success_count, 0);
    assert!(p.history.is_empty());
    assert!(!p.is_hard);
    assert!(p.last_used_description_index.is_none());
  }

  // StudyState tests

  #[test]
  fn test_state_default_is_pristine() {
    let state = StudyState::default();
    assert!(state.progress.is_empty());
    assert!(state.last_session_date.is_empty());
    assert!(state.daily_unique_words.is_empty());
  }

  #[test]
  fn test_record_daily_word_idempotent() {
    let mut state = StudyState::default();

    state.record_daily_word("Haus");
    state.record_daily_word("Baum");
    state.record_daily_word("Haus");

    assert_eq!(state.daily_unique_words, vec!["Haus", "Baum"]);
  }

  #[test]
  fn test_progress_or_insert_creates_once() {
    let mut state = StudyState::default();

    state.progress_or_insert("Haus").is_hard = true;
    assert!(state.progress_or_insert("Haus").is_hard);
    assert_eq!(state.progress.len(), 1);
    assert_eq!(state.progress["Haus"].id, "Haus");
  }

  #[test]
  fn test_completed_today_counts_done_statuses() {
    let mut state = StudyState::default();
    for (id, status) in [
      ("Haus", WordStatus::MasteredToday),
      ("Baum", WordStatus::FailedToday),
      ("Tisch", WordStatus::Learning),
    ] {
      state.record_daily_word(id);
      state.progress_or_insert(id).status = status;
    }
    // Done status outside today's uniques does not count
    state.progress_or_insert("Stuhl").status = WordStatus::MasteredToday;

    assert_eq!(state.completed_today(), 2);
  }

  #[test]
  fn test_state_deserialize_empty_document() {
    let state: StudyState = serde_json::from_str("{}").unwrap();
    assert_eq!(state, StudyState::default());
  }

  #[test]
  fn test_state_serde_roundtrip() {
    let mut state = StudyState::default();
    state.last_session_date = "2026-08-06".to_string();
    state.record_daily_word("Haus");
    state.progress_or_insert("Haus").today_success_count = 1;

    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"lastSessionDate\":\"2026-08-06\""));
    assert!(json.contains("\"dailyUniqueWords\":[\"Haus\"]"));

    let back: StudyState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
  }
}
