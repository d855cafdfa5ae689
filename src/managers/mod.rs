// Vidmarks state managers
// The bookmark store and its import/export operations.

pub mod bookmark_store;
pub mod transfer;
