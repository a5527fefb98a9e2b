use crate::errors::{AppError, AppResult};
use crate::extract::{
    ExtractOptions, FLIGHT_PAIRING_DISTANCE, SEGMENT_WINDOW_AFTER, SEGMENT_WINDOW_BEFORE,
    YEAR_ROLLOVER_DAYS,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default = "default_rollover_days")]
    pub year_rollover_days: i64,
    #[serde(default = "default_pairing_distance")]
    pub pairing_distance: usize,
    #[serde(default = "default_window_before")]
    pub window_before: usize,
    #[serde(default = "default_window_after")]
    pub window_after: usize,
    #[serde(default = "default_calendar_url")]
    pub calendar_base_url: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_format() -> String {
    "table".to_string()
}
fn default_rollover_days() -> i64 {
    YEAR_ROLLOVER_DAYS
}
fn default_pairing_distance() -> usize {
    FLIGHT_PAIRING_DISTANCE
}
fn default_window_before() -> usize {
    SEGMENT_WINDOW_BEFORE
}
fn default_window_after() -> usize {
    SEGMENT_WINDOW_AFTER
}
fn default_calendar_url() -> String {
    DEFAULT_CALENDAR_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_format: default_format(),
            year_rollover_days: default_rollover_days(),
            pairing_distance: default_pairing_distance(),
            window_before: default_window_before(),
            window_after: default_window_after(),
            calendar_base_url: default_calendar_url(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcalgrab")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcalgrab")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcalgrab.conf")
    }

    /// Return the full path of the SQLite audit database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcalgrab.sqlite")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let cfg: Self = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.year_rollover_days < 0 {
            return Err(AppError::Config(format!(
                "year_rollover_days must be >= 0 (found {})",
                self.year_rollover_days
            )));
        }
        if self.pairing_distance == 0 {
            return Err(AppError::Config("pairing_distance must be > 0".to_string()));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Serialize(e.to_string()))
    }

    /// Heuristic parameters for the extraction engine.
    pub fn extract_options(&self, today: NaiveDate) -> ExtractOptions {
        ExtractOptions {
            today,
            year_rollover_days: self.year_rollover_days,
            pairing_distance: self.pairing_distance,
            window_before: self.window_before,
            window_after: self.window_after,
        }
    }

    /// Initialize configuration directory, config file and database path.
    /// Returns the configuration that was written (or would have been, in test mode).
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // In test mode the user's config file is never touched
        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            file.write_all(yaml.as_bytes())
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        Ok(config)
    }
}
