//! Configuration and file management for trek-finder
//!
//! This crate provides:
//! - File path utilities for cache and data files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - File-backed storage for the palette's recent history

pub mod app_config;
pub mod config_file;
pub mod file_store;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use file_store::FileStore;
pub use paths::{cache_dir, data_dir};
