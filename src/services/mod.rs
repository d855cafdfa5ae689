// Vidmarks services
// Stateless helpers around the store: URL parsing, metadata lookup, settings.

pub mod metadata_fetcher;
pub mod settings_engine;
pub mod video_id;
