//! Configuration types for depscope
//!
//! The raw TOML table only lives for the duration of a load call; callers
//! receive the flattened [`NormalizedConfig`].

use serde::{Deserialize, Serialize};

/// Undecoded configuration as parsed from TOML
pub type RawConfig = toml::Table;

/// Default configuration file, resolved against the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Required sections, in the order they are checked
pub const REQUIRED_SECTIONS: &[&str] = &[PACKAGE_SECTION, REPOSITORY_SECTION, ANALYSIS_SECTION];

pub const PACKAGE_SECTION: &str = "package";
pub const REPOSITORY_SECTION: &str = "repository";
pub const ANALYSIS_SECTION: &str = "analysis";

/// Validated analysis configuration
///
/// Only produced by the loader once every check has passed, so holding one
/// means all fields are within their constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedConfig {
    /// Name of the package to analyze (non-empty)
    pub package_name: String,

    /// Version of the package to analyze (non-empty)
    pub package_version: String,

    /// Package repository URL (non-empty)
    pub repository_url: String,

    /// Whether to read packages from a local test repository
    pub use_test_repository: bool,

    /// Path to the test repository file, empty when not configured
    pub test_repository_path: String,

    /// Maximum dependency depth (strictly positive)
    pub max_depth: i64,
}
