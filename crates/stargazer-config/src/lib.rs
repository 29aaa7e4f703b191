//! Configuration and local storage for the stargazer session client
//!
//! This crate provides:
//! - Directory and file path utilities
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Durable key/value storage for session data

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod storage;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, data_dir, local_storage_path};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageKey};
