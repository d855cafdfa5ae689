// Vidmarks Settings Engine
// Loads, saves and edits `settings.json`: storage backend, metadata endpoint, export filename.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::Settings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<Settings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &Settings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &Path;
}

/// Settings engine that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: PathBuf,
    settings: Settings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// Uses `path_override` when given, otherwise `settings.json` in the
    /// platform config directory. Nothing is read until [`load`](SettingsEngineTrait::load).
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let config_path =
            path_override.unwrap_or_else(|| platform::get_config_dir().join("settings.json"));
        Self {
            config_path,
            settings: Settings::default(),
        }
    }

    /// Path of the bookmark storage for the current settings: the configured
    /// override, or the backend's default file in the data directory.
    pub fn storage_path(&self) -> PathBuf {
        let storage = &self.settings.storage;
        match &storage.path {
            Some(p) => PathBuf::from(p),
            None => platform::get_data_dir().join(storage.default_file_name()),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the config file.
    ///
    /// A missing file yields defaults; a malformed one is an error.
    fn load(&mut self) -> Result<Settings, SettingsError> {
        if !self.config_path.exists() {
            self.settings = Settings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        self.settings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(&self.config_path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Updates one setting by dot-notation key path and saves.
    ///
    /// The new value is validated by deserializing the edited tree back into
    /// `Settings`, e.g. `"storage.backend"` only accepts `"sqlite"`, `"json"`
    /// or `"memory"`.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut tree = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        let (parents, last) = match key.rsplit_once('.') {
            Some((parents, last)) => (Some(parents), last),
            None => (None, key),
        };

        let mut current = &mut tree;
        for part in parents.into_iter().flat_map(|p| p.split('.')) {
            current = current.get_mut(part).ok_or_else(|| {
                SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
            })?;
        }

        match current {
            serde_json::Value::Object(map) if map.contains_key(last) => {
                map.insert(last.to_string(), value);
            }
            serde_json::Value::Object(_) => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    key
                )));
            }
            _ => {
                return Err(SettingsError::InvalidKey(format!(
                    "Cannot navigate to key '{}': intermediate value is not an object",
                    key
                )));
            }
        }

        self.settings = serde_json::from_value(tree).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.save()
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = Settings::default();
        self.save()
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
