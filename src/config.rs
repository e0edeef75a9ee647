use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calendar::CalendarView;
use crate::error::{BoardError, BoardResult};

pub const CONFIG_PATH_ENV: &str = "DISPATCH_BOARD_CONFIG";
pub const HTTP_ADDR_ENV: &str = "DISPATCH_BOARD_HTTP_ADDR";

/// Longest draft a cell click may create: one week.
pub const MAX_NEW_TASK_DURATION_MINUTES: i64 = 7 * 24 * 60;

/// Board settings, read from a JSON document. Every field has a default so
/// a partial (or empty) document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub default_view: CalendarView,
    pub week_starts_on: Weekday,
    /// Start time given to tasks created by clicking an empty cell.
    pub new_task_start: NaiveTime,
    pub new_task_duration_minutes: i64,
    pub http_addr: String,
    /// Replaces the bundled sample records when set.
    pub seed_path: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_view: CalendarView::Week,
            week_starts_on: Weekday::Mon,
            new_task_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            new_task_duration_minutes: 60,
            http_addr: "0.0.0.0:3000".to_string(),
            seed_path: None,
        }
    }
}

impl BoardConfig {
    pub fn load_from_json<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: BoardConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        info!(path = %path.as_ref().display(), "loaded board config");
        Ok(config)
    }

    /// Resolves the config from the process environment.
    pub fn from_env() -> BoardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BoardConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> BoardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => Self::load_from_json(path.trim())?,
            _ => Self::default(),
        };
        if let Some(addr) = lookup(HTTP_ADDR_ENV) {
            if !addr.trim().is_empty() {
                config.http_addr = addr.trim().to_string();
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> BoardResult<()> {
        if !(0..=MAX_NEW_TASK_DURATION_MINUTES).contains(&self.new_task_duration_minutes) {
            return Err(BoardError::invalid(format!(
                "new_task_duration_minutes must be between 0 and {} (got {})",
                MAX_NEW_TASK_DURATION_MINUTES, self.new_task_duration_minutes
            )));
        }
        Ok(())
    }
}
