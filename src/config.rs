//! Configuration file parsing

pub mod mgr_toml;

pub use mgr_toml::{CONFIG_FILE, ColorOption, Config, OutputConfig, OutputFormat, StoreConfig};
