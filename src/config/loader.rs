//! Configuration loader
//!
//! Reads a single TOML file and validates it in a fixed order:
//! 1. Required sections (`package`, `repository`, `analysis`)
//! 2. `package.name`, `package.version`
//! 3. `repository.url`, `repository.use_test_repository`
//! 4. `analysis.max_depth`
//!
//! The first violated rule is returned; later checks are not attempted.

use crate::config::types::{
    ANALYSIS_SECTION, DEFAULT_CONFIG_PATH, NormalizedConfig, PACKAGE_SECTION, REPOSITORY_SECTION,
    REQUIRED_SECTIONS, RawConfig,
};
use crate::config::value::{coerce_integer, is_truthy};
use crate::error::{ConfigError, Result};
use std::fs;
use std::io::ErrorKind;
use toml::Value;
use tracing::{debug, warn};

/// Load and validate configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> std::result::Result<NormalizedConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&raw)
}

/// Load configuration from a file.
///
/// `None` reads [`DEFAULT_CONFIG_PATH`] from the working directory. A leading
/// `~` in the path is expanded to the home directory.
pub fn load_config(config_path: Option<&str>) -> Result<NormalizedConfig> {
    let requested = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
    let path = shellexpand::tilde(requested);
    debug!(path = %path, "Loading configuration");

    let bytes = match fs::read(path.as_ref()) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::NotFound {
                path: requested.to_string(),
            }
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    let contents = String::from_utf8(bytes)
        .map_err(|e| ConfigError::Parse(format!("file is not valid UTF-8: {}", e)))?;

    let config = load_config_from_str(&contents)?;
    debug!(
        path = %path,
        package = %config.package_name,
        max_depth = config.max_depth,
        "Configuration loaded"
    );
    Ok(config)
}

/// Validate an already-decoded configuration table
pub fn validate(raw: &RawConfig) -> std::result::Result<NormalizedConfig, ConfigError> {
    for section in REQUIRED_SECTIONS {
        if !raw.contains_key(*section) {
            return Err(ConfigError::missing_section(*section));
        }
    }

    let package = section_table(raw, PACKAGE_SECTION)?;
    let package_name = required_string(package, PACKAGE_SECTION, "name")?;
    let package_version = required_string(package, PACKAGE_SECTION, "version")?;

    let repository = section_table(raw, REPOSITORY_SECTION)?;
    let repository_url = required_string(repository, REPOSITORY_SECTION, "url")?;
    // Only presence is enforced; `false` and `""` are valid settings
    let use_test_repository = repository
        .get("use_test_repository")
        .map(is_truthy)
        .ok_or_else(|| ConfigError::missing_field("repository.use_test_repository"))?;

    let analysis = section_table(raw, ANALYSIS_SECTION)?;
    let max_depth = max_depth(analysis)?;

    // Optional keys are checked after every required key
    let test_repository_path =
        optional_string(repository, REPOSITORY_SECTION, "test_repository_path")?
            .unwrap_or_default();

    Ok(NormalizedConfig {
        package_name,
        package_version,
        repository_url,
        use_test_repository,
        test_repository_path,
        max_depth,
    })
}

fn section_table<'a>(
    raw: &'a RawConfig,
    section: &str,
) -> std::result::Result<&'a RawConfig, ConfigError> {
    match raw.get(section) {
        Some(Value::Table(table)) => Ok(table),
        Some(other) => Err(ConfigError::invalid_value(
            section,
            format!("expected a table, got {}", other.type_str()),
        )),
        None => Err(ConfigError::missing_section(section)),
    }
}

/// A string key that must be present and non-empty
fn required_string(
    table: &RawConfig,
    section: &str,
    key: &str,
) -> std::result::Result<String, ConfigError> {
    match optional_string(table, section, key)? {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::missing_field(format!("{}.{}", section, key))),
    }
}

fn optional_string(
    table: &RawConfig,
    section: &str,
    key: &str,
) -> std::result::Result<Option<String>, ConfigError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::invalid_value(
            format!("{}.{}", section, key),
            format!("expected a string, got {}", other.type_str()),
        )),
    }
}

fn max_depth(analysis: &RawConfig) -> std::result::Result<i64, ConfigError> {
    let field = "analysis.max_depth";
    let value = analysis
        .get("max_depth")
        .ok_or_else(|| ConfigError::missing_field(field))?;

    let depth = coerce_integer(value).map_err(|reason| {
        warn!(field, value = %value, "Rejected non-integer value");
        ConfigError::invalid_value(field, reason)
    })?;

    if depth <= 0 {
        warn!(field, depth, "Rejected non-positive value");
        return Err(ConfigError::invalid_value(
            field,
            format!("must be positive, got {}", depth),
        ));
    }

    Ok(depth)
}
