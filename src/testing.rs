//! Test utilities.
//!
//! Provides a ready document store over a temporary directory so handler
//! and flow tests share one seeded library.

use rand::RngCore;
use std::fs;
use tempfile::TempDir;

use crate::config::SchedulerConfig;
use crate::state::AppState;
use crate::storage::Store;

/// RNG that always yields zero.
///
/// Weighted draws land on the first remaining candidate, so sampling-based
/// code becomes fully predictable under test.
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

/// Six-word German library used across tests
pub const TEST_LIBRARY_JSON: &str = r#"{
    "Apfel": {
        "Beschreibung": ["Eine runde Frucht, oft rot oder grün."],
        "Bedeutung": { "Englisch": ["apple"], "Indonesisch": ["apel"] },
        "Plural": "Äpfel"
    },
    "Baum": {
        "Beschreibung": ["Eine große Pflanze mit Stamm und Ästen."],
        "Bedeutung": { "Englisch": ["tree"], "Indonesisch": ["pohon"] },
        "Plural": "Bäume"
    },
    "Haus": {
        "Beschreibung": ["Ein Gebäude, in dem Menschen wohnen.", "Man wohnt darin."],
        "Bedeutung": { "Englisch": ["house"], "Indonesisch": ["rumah"] },
        "Plural": "Häuser"
    },
    "laufen": {
        "Beschreibung": ["Sich schnell zu Fuß bewegen.", "Eine Sportart.", "Joggen."],
        "Bedeutung": { "Englisch": ["to run"], "Indonesisch": ["berlari"] },
        "Konjugation": { "ich": "laufe", "du": "läufst", "er/sie/es": "läuft" }
    },
    "schnell": {
        "Beschreibung": ["Mit hoher Geschwindigkeit."],
        "Bedeutung": { "Englisch": ["fast"], "Indonesisch": ["cepat"] },
        "Vergleichsmessung": { "Komparativ": "schneller", "Superlativ": "am schnellsten" }
    },
    "Zeit": {
        "Beschreibung": ["Was die Uhr misst."],
        "Bedeutung": { "Englisch": ["time"], "Indonesisch": ["waktu"] }
    }
}"#;

/// Test environment with a seeded library and an empty learner state.
///
/// The temporary directory is kept alive for the lifetime of the
/// environment; dropping it cleans everything up.
pub struct TestEnv {
    pub temp: TempDir,
    pub app: AppState,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_scheduler(SchedulerConfig::default())
    }

    pub fn with_scheduler(scheduler: SchedulerConfig) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let library_path = temp.path().join("library.json");
        fs::write(&library_path, TEST_LIBRARY_JSON).expect("Failed to seed library");

        let store = Store::open(&library_path, temp.path().join("user_performance.json"))
            .expect("Failed to open test store");

        Self {
            temp,
            app: AppState::new(store, scheduler),
        }
    }
}
