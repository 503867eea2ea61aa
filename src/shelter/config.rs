use crate::error::{Result, ShelterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PETS_FILE: &str = "pets.txt";
const DEFAULT_ADOPTERS_FILE: &str = "adopters.txt";

pub const KEYS: [&str; 2] = ["pets-file", "adopters-file"];

/// Configuration for a shelter data directory, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelterConfig {
    /// File name of the pets file, relative to the data directory
    #[serde(default = "default_pets_file")]
    pub pets_file: String,

    /// File name of the adopters file, relative to the data directory
    #[serde(default = "default_adopters_file")]
    pub adopters_file: String,
}

fn default_pets_file() -> String {
    DEFAULT_PETS_FILE.to_string()
}

fn default_adopters_file() -> String {
    DEFAULT_ADOPTERS_FILE.to_string()
}

impl Default for ShelterConfig {
    fn default() -> Self {
        Self {
            pets_file: default_pets_file(),
            adopters_file: default_adopters_file(),
        }
    }
}

impl ShelterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShelterConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "pets-file" => Some(self.pets_file.clone()),
            "adopters-file" => Some(self.adopters_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let other = match key {
            "pets-file" => &self.adopters_file,
            "adopters-file" => &self.pets_file,
            _ => return Err(ShelterError::Config(format!("Unknown config key: {}", key))),
        };

        let value = value.trim();
        if value.is_empty() || value.contains(['/', '\\']) {
            return Err(ShelterError::Config(format!(
                "{} must be a plain file name, got {:?}",
                key, value
            )));
        }
        if value == other {
            return Err(ShelterError::Config(
                "pets-file and adopters-file must differ".to_string(),
            ));
        }

        if key == "pets-file" {
            self.pets_file = value.to_string();
        } else {
            self.adopters_file = value.to_string();
        }
        Ok(())
    }
}
