//! CLI argument parsing and command dispatch

pub mod args;
pub mod dispatch;

// Re-export types for convenient access
pub use args::{Cli, Command};
pub use dispatch::{Dispatcher, Settings, prepare};
