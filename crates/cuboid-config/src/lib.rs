//! Configuration system for the cuboid camera rig.
//!
//! Provides runtime-configurable settings that persist to disk as RON
//! files, with CLI overrides via clap and hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, FaceMask, OutputConfig, OutputMode, RigConfig};
pub use error::ConfigError;
