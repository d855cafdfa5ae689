//! Vidmarks: save, tag, search and export bookmarks to video URLs.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
