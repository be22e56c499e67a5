//! Dependency analysis configuration
//!
//! Loads and validates the configuration consumed by the dependency analyzer.
//!
//! ## Example Configuration
//!
//! ```toml
//! [package]
//! name = "requests"
//! version = "2.31.0"
//!
//! [repository]
//! url = "https://pypi.org/simple"
//! use_test_repository = false
//! test_repository_path = ""      # optional
//!
//! [analysis]
//! max_depth = 3
//! ```
//!
//! Validation is fail-fast: the first missing section, missing field or
//! invalid value is reported as a [`ConfigError`].

pub mod config;
pub mod error;
pub mod output;

// Re-export main types
pub use config::{NormalizedConfig, load_config, load_config_from_str};
pub use error::{AppError, ConfigError, Result};
