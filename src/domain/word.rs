use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The read-only vocabulary library, keyed by the German word.
///
/// Sorted map so selection pools iterate in a stable order; the scheduler's
/// only nondeterminism is its injected RNG.
pub type Library = BTreeMap<String, VocabEntry>;

/// Translations of a library entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meanings {
  #[serde(rename = "Englisch", default, skip_serializing_if = "Vec::is_empty")]
  pub english: Vec<String>,
  #[serde(rename = "Indonesisch", default, skip_serializing_if = "Vec::is_empty")]
  pub indonesian: Vec<String>,
}

impl Meanings {
  pub fn is_empty(&self) -> bool {
    self.english.is_empty() && self.indonesian.is_empty()
  }
}

/// One vocabulary entry as authored in library.json.
///
/// The scheduler only ever consults the number of description variants; the
/// rest is carried for the frontend. Keys the schema does not model
/// (synonyms, antonyms, comparatives, ...) survive a round trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
  /// German prompt texts; one is shown per card appearance
  #[serde(rename = "Beschreibung", default, skip_serializing_if = "Vec::is_empty")]
  pub descriptions: Vec<String>,
  #[serde(rename = "Bedeutung", default, skip_serializing_if = "Meanings::is_empty")]
  pub meanings: Meanings,
  #[serde(rename = "Plural", default, skip_serializing_if = "Option::is_none")]
  pub plural: Option<String>,
  #[serde(rename = "Konjugation", default, skip_serializing_if = "Option::is_none")]
  pub conjugation: Option<BTreeMap<String, String>>,
  #[serde(flatten)]
  pub extra: BTreeMap<String, serde_json::Value>,
}

impl VocabEntry {
  /// Number of prompt variants available for rotation
  pub fn description_count(&self) -> usize {
    self.descriptions.len()
  }
}
