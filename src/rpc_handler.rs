//! RPC method handler for the Vidmarks JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches one method call against the shared `App`.
//! Failures come back as the short user-facing message for the error case.

use serde_json::{json, Value};
use tokio::sync::Mutex;

use crate::app::App;
use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::services::metadata_fetcher::MetadataFetcher;
use crate::services::settings_engine::SettingsEngineTrait;

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}

/// Accepts tags either as a comma-separated string or as an array of strings.
fn tags_param(params: &Value) -> Option<String> {
    match params.get("tags")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    }
}

/// Dispatch a JSON-RPC method call to the bookmark store or settings engine.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method<F: MetadataFetcher>(
    app: &Mutex<App<F>>,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    log::debug!("rpc {} {}", method, params);
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmark.list" => {
            let a = app.lock().await;
            serde_json::to_value(a.store.list()).map_err(|e| e.to_string())
        }
        "bookmark.get" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let a = app.lock().await;
            let bm = a.store.get(id).ok_or_else(|| format!("Bookmark not found: {}", id))?;
            serde_json::to_value(bm).map_err(|e| e.to_string())
        }
        "bookmark.add" => {
            let url = str_param(params, "url").ok_or("missing url")?;
            let timestamp = str_param(params, "timestamp");
            let tags = tags_param(params);
            let mut a = app.lock().await;
            match a.store.add(url, timestamp, tags.as_deref()).await {
                Ok(bm) => serde_json::to_value(bm).map_err(|e| e.to_string()),
                Err(e) => {
                    log::info!("add rejected: {}", e);
                    Err(e.user_message().to_string())
                }
            }
        }
        "bookmark.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().await;
            a.store.delete(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.query" => {
            let search = str_param(params, "search");
            let tag = str_param(params, "tag");
            let a = app.lock().await;
            serde_json::to_value(a.store.query(search, tag)).map_err(|e| e.to_string())
        }
        "bookmark.tags" => {
            let a = app.lock().await;
            Ok(json!(a.store.distinct_tags()))
        }
        "bookmark.export" => {
            let a = app.lock().await;
            let bytes = a.store.export().map_err(|e| e.to_string())?;
            let data = String::from_utf8(bytes).map_err(|e| e.to_string())?;
            Ok(json!({"filename": a.export_filename(), "data": data}))
        }
        "bookmark.import" => {
            let data = str_param(params, "data").ok_or("missing data")?;
            let mut a = app.lock().await;
            match a.store.import(data.as_bytes()) {
                Ok(count) => Ok(json!({"imported": count})),
                Err(e) => {
                    log::info!("import rejected: {}", e);
                    Err(e.user_message().to_string())
                }
            }
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().await;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().await;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            let restart_required = key.starts_with("storage.") || key.starts_with("metadata.");
            Ok(json!({"ok": true, "restart_required": restart_required}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
