//! Data persistence
//!
//! Settings storage for the feed application.

pub mod settings;
pub mod storage;

// Re-export common types
pub use settings::Settings;
pub use storage::{config_dir, data_path, delete, load, save};
