//! diskcheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod testing;

pub use adapters::ReqwestDiskClient;
pub use config::{ConfigError, DiskConfig, folders_from_env, folders_from_lookup, load_env_file};
pub use testing::TestRunner;
