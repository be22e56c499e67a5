//! Configuration module
//!
//! Handles loading and validating the analysis configuration from a TOML file.

pub mod loader;
pub mod types;
pub mod value;

pub use loader::{load_config, load_config_from_str, validate};
pub use types::*;
