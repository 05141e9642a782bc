use crate::core::settings::{
    ClassificationPolicy, DEFAULT_PAID_DAY_OFF_MINUTES, Rates, ReportSettings,
};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default)]
    pub rates: Rates,
    #[serde(default = "default_paid_day_off_minutes")]
    pub paid_day_off_minutes: i64,
    #[serde(default = "default_unpaid_label")]
    pub unpaid_day_off_label: String,
    #[serde(default = "default_paid_label")]
    pub paid_day_off_label: String,
    #[serde(default)]
    pub policy: ClassificationPolicy,
    /// Lines printed above PDF reports (practice name, address, tax ids).
    #[serde(default)]
    pub header_lines: Vec<String>,
}

fn default_paid_day_off_minutes() -> i64 {
    DEFAULT_PAID_DAY_OFF_MINUTES
}
fn default_unpaid_label() -> String {
    "unpaid day off".to_string()
}
fn default_paid_label() -> String {
    "paid day off".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_store(Self::store_file())
    }
}

impl Config {
    fn with_store(store: PathBuf) -> Self {
        Self {
            store: store.to_string_lossy().to_string(),
            rates: Rates::default(),
            paid_day_off_minutes: default_paid_day_off_minutes(),
            unpaid_day_off_label: default_unpaid_label(),
            paid_day_off_label: default_paid_label(),
            policy: ClassificationPolicy::default(),
            header_lines: Vec::new(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the default path of the event store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("events.json")
    }

    /// Resolve a user-supplied store location: `~/` is expanded and a
    /// relative path lives in the config directory.
    pub fn resolve_store(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn store_path(&self) -> &Path {
        Path::new(&self.store)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut cfg: Self = serde_yaml::from_str(&content)?;
        cfg.store = Self::resolve_store(&cfg.store).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Engine settings derived from this configuration.
    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            policy: self.policy,
            rates: self.rates,
            paid_day_off_minutes: self.paid_day_off_minutes,
            unpaid_day_off_label: self.unpaid_day_off_label.clone(),
            paid_day_off_label: self.paid_day_off_label.clone(),
        }
    }

    /// Initialize configuration file and empty event store.
    ///
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let store_path = match custom_store {
            Some(name) => Self::resolve_store(&name),
            None => Self::store_file(),
        };

        let config = Self::with_store(store_path.clone());

        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if !store_path.exists() {
            crate::store::EventStore::default().save(&store_path)?;
        }
        success(format!("Event store: {}", store_path.display()));

        Ok(config)
    }
}
