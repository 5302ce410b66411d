use crate::error::{ClassworkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STUDENTS_FILE: &str = "students.db";
const DEFAULT_CURRENCY: &str = "руб.";

pub const KEYS: [&str; 2] = ["students-file", "currency"];

/// Configuration for classwork, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassworkConfig {
    /// Roster file name, relative to the home directory unless absolute
    #[serde(default = "default_students_file")]
    pub students_file: String,

    /// Label printed after prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_students_file() -> String {
    DEFAULT_STUDENTS_FILE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for ClassworkConfig {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
            currency: default_currency(),
        }
    }
}

impl ClassworkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ClassworkError::Io)?;
        let config: ClassworkConfig =
            serde_json::from_str(&content).map_err(ClassworkError::Serialization)?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ClassworkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ClassworkError::Serialization)?;
        fs::write(&config_path, content).map_err(ClassworkError::Io)?;
        debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "students-file" => Some(self.students_file.clone()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ClassworkError::InvalidArgument(format!(
                "{} cannot be empty",
                key
            )));
        }
        match key {
            "students-file" => self.students_file = value.to_string(),
            "currency" => self.currency = value.to_string(),
            _ => {
                return Err(ClassworkError::InvalidArgument(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }

    /// Roster path: the configured file, resolved against `home` when relative.
    pub fn students_path<P: AsRef<Path>>(&self, home: P) -> std::path::PathBuf {
        let file = Path::new(&self.students_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            home.as_ref().join(file)
        }
    }
}
