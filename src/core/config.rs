use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application settings.
/// NOTE: TypeScript mirror types are in ui/src/types.ts
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Directory holding catalog.json and tracked.json
    pub data_dir: PathBuf,
    /// Seconds between reminder polls
    pub poll_interval_seconds: u64,
    /// Master switch for reminder notifications
    #[serde(default = "default_reminders_enabled")]
    pub reminders_enabled: bool,
}

fn default_reminders_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        // Keep the tables somewhere the user can find and edit them.
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());

        Self {
            data_dir: PathBuf::from(home).join("Documents/MedMinder"),
            poll_interval_seconds: 60,
            reminders_enabled: true,
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}
