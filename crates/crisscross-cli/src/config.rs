//! Merges the optional TOML file, `--set` overrides and command-line flags into the settings
//! of one run.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use models::AppConfig;
