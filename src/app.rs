//! App Core for Vidmarks.
//!
//! Wires settings, the configured storage backend and the metadata fetcher
//! into one bookmark store shared by the CLI and the RPC server.

use std::path::PathBuf;

use crate::managers::bookmark_store::BookmarkStore;
use crate::services::metadata_fetcher::{MetadataFetcher, NoembedFetcher};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{self, KeyValueStore};

/// Store type used by the binaries: backend chosen at runtime from settings.
pub type AppStore<F = NoembedFetcher> = BookmarkStore<Box<dyn KeyValueStore + Send>, F>;

/// Central application struct holding the settings engine and the store.
pub struct App<F = NoembedFetcher> {
    pub settings_engine: SettingsEngine,
    pub store: AppStore<F>,
}

impl App<NoembedFetcher> {
    /// Loads settings (defaults if the file is missing or unreadable) and
    /// opens the configured backend.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(config_path);
        if let Err(e) = settings_engine.load() {
            log::warn!(
                "could not load {}, using defaults: {}",
                settings_engine.get_config_path().display(),
                e
            );
        }

        let fetcher = NoembedFetcher::new(&settings_engine.get_settings().metadata);
        Self::with_fetcher(settings_engine, fetcher)
    }
}

impl<F: MetadataFetcher> App<F> {
    /// Opens the backend named in `settings_engine`'s current settings and
    /// builds the store around `fetcher`.
    pub fn with_fetcher(
        settings_engine: SettingsEngine,
        fetcher: F,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let storage_settings = &settings_engine.get_settings().storage;
        let path = settings_engine.storage_path();
        let backend = storage::open_backend(storage_settings.backend, &path)?;
        let store = BookmarkStore::with_slot_key(backend, fetcher, &storage_settings.slot_key);
        log::info!(
            "bookmark store ready ({:?} at {})",
            storage_settings.backend,
            path.display()
        );
        Ok(Self {
            settings_engine,
            store,
        })
    }

    /// File name offered for exports.
    pub fn export_filename(&self) -> &str {
        &self.settings_engine.get_settings().export.filename
    }
}
