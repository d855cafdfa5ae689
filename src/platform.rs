// Vidmarks platform paths.
//
// Linux:   $XDG_CONFIG_HOME/vidmarks, $XDG_DATA_HOME/vidmarks
// macOS:   ~/Library/Application Support/Vidmarks
// Windows: %APPDATA%\Vidmarks
//
// VIDMARKS_DATA_DIR overrides both directories.

use std::env;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "VIDMARKS_DATA_DIR";

fn home() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

#[cfg(target_os = "linux")]
fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("vidmarks"),
        _ => fallback
            .iter()
            .fold(home(), |path, part| path.join(part))
            .join("vidmarks"),
    }
}

#[cfg(target_os = "macos")]
fn app_support_dir() -> PathBuf {
    home()
        .join("Library")
        .join("Application Support")
        .join("Vidmarks")
}

#[cfg(target_os = "windows")]
fn appdata_dir() -> PathBuf {
    env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home())
        .join("Vidmarks")
}

/// Directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_CONFIG_HOME", &[".config"])
    }
    #[cfg(target_os = "macos")]
    {
        app_support_dir()
    }
    #[cfg(target_os = "windows")]
    {
        appdata_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home().join(".vidmarks")
    }
}

/// Directory holding the bookmark database or slot files.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_DATA_HOME", &[".local", "share"])
    }
    #[cfg(target_os = "macos")]
    {
        app_support_dir()
    }
    #[cfg(target_os = "windows")]
    {
        appdata_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home().join(".vidmarks")
    }
}
