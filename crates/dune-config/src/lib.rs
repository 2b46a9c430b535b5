//! Runtime settings persisted as RON, with clap CLI overrides.
//!
//! Precedence is CLI over file over defaults; unknown or missing fields in
//! the file fall back per section, so old config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AudioConfig, Config, DebugConfig, InputConfig, TerrainConfig, WindowConfig,
    default_config_dir,
};
pub use error::ConfigError;
