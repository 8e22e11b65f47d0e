//! Application configuration.
//!
//! Centralizes the scheduling policy parameters, the urgency weights table
//! and the data document paths so tuning is a data change, not a code change.

use serde::Deserialize;
use std::path::PathBuf;

use crate::storage::LogOnError;

// ==================== File Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    data: Option<DataConfig>,
    scheduler: Option<SchedulerConfig>,
}

#[derive(Debug, Deserialize)]
struct DataConfig {
    library: Option<String>,
    state: Option<String>,
}

fn read_config_file() -> Option<AppConfig> {
    let contents = std::fs::read_to_string("config.toml").ok()?;
    toml::from_str::<AppConfig>(&contents).log_warn("Ignoring malformed config.toml")
}

/// Load library and learner-state paths with priority: config.toml > .env > default
pub fn load_data_paths() -> (PathBuf, PathBuf) {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let file_config = read_config_file().and_then(|c| c.data);

    let library = file_config
        .as_ref()
        .and_then(|d| d.library.clone())
        .map(|p| {
            tracing::info!("Using library from config.toml: {}", p);
            PathBuf::from(p)
        })
        .or_else(|| {
            std::env::var("LIBRARY_PATH").ok().map(|p| {
                tracing::info!("Using library from LIBRARY_PATH env: {}", p);
                PathBuf::from(p)
            })
        })
        .unwrap_or_else(|| PathBuf::from("data/library.json"));

    let state = file_config
        .as_ref()
        .and_then(|d| d.state.clone())
        .map(|p| {
            tracing::info!("Using learner state from config.toml: {}", p);
            PathBuf::from(p)
        })
        .or_else(|| {
            std::env::var("USER_DATA_PATH").ok().map(|p| {
                tracing::info!("Using learner state from USER_DATA_PATH env: {}", p);
                PathBuf::from(p)
            })
        })
        .unwrap_or_else(|| PathBuf::from("data/user_performance.json"));

    (library, state)
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 5000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Scheduling Policy ====================

/// One calendar day in epoch milliseconds
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Daily scheduling policy parameters.
///
/// Every knob can be overridden from the `[scheduler]` table in config.toml.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Cap on distinct words introduced into a single calendar day
    pub max_unique_words_per_day: usize,
    /// Failures after which a word is parked as failed for the day
    pub max_failures_per_day: u32,
    /// Successes required to master a word for the day
    pub required_successes_per_day: u32,
    /// Words handed to the frontend per study round
    pub batch_size: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_unique_words_per_day: 10,
            max_failures_per_day: 3,
            required_successes_per_day: 3,
            batch_size: 5,
        }
    }
}

/// Load scheduling policy with priority: config.toml > default
pub fn load_scheduler_config() -> SchedulerConfig {
    match read_config_file().and_then(|c| c.scheduler) {
        Some(config) => {
            tracing::info!("Using scheduler policy from config.toml: {:?}", config);
            config
        }
        None => SchedulerConfig::default(),
    }
}

// ==================== Urgency Weights ====================

/// Additive urgency score contributions.
///
/// Kept as one table rather than literals inside the scorer; see
/// `srs::urgency` for the condition each entry is attached to.
pub struct UrgencyWeights {
    /// Word with no progress record yet
    pub unseen: i64,
    /// Word flagged hard by the learner (unless already mastered today)
    pub hard_flag: i64,
    /// Base for any word failed today
    pub failed_today_base: i64,
    /// Added per failure accumulated today
    pub failed_today_per_fail: i64,
    /// Base for an overdue word
    pub overdue_base: i64,
    /// Added per full day overdue
    pub overdue_per_day: i64,
    /// Learning-status word with no success yet today
    pub learning_unpracticed: i64,
    /// New-status word with no success yet today
    pub new_unpracticed: i64,
    /// Start of the partial-success damping ramp
    pub partial_success_start: i64,
    /// Subtracted per success already earned today
    pub partial_success_step: i64,
    /// Damping ramp never drops below this
    pub partial_success_floor: i64,
    /// Majority of the recent history tail were failures
    pub struggling: i64,
    /// Due within one day
    pub due_tomorrow: i64,
    /// Due within three days
    pub due_soon: i64,
}

/// Default weights table
pub const URGENCY_WEIGHTS: UrgencyWeights = UrgencyWeights {
    unseen: 50,
    hard_flag: 30,
    failed_today_base: 100,
    failed_today_per_fail: 20,
    overdue_base: 60,
    overdue_per_day: 15,
    learning_unpracticed: 55,
    new_unpracticed: 50,
    partial_success_start: 30,
    partial_success_step: 10,
    partial_success_floor: 10,
    struggling: 25,
    due_tomorrow: 40,
    due_soon: 20,
};

/// Recent history entries considered by the struggling heuristic
pub const HISTORY_TAIL_LEN: usize = 5;
