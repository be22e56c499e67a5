//! Rendering of a loaded configuration for the command line

use crate::config::NormalizedConfig;
use std::fmt::Write;

/// Header printed above the field listing in text mode
pub const TEXT_HEADER: &str = "Application configuration:";

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `label: value` line per field (default)
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Render the configuration in the requested format.
///
/// The returned string has no trailing newline.
pub fn render(config: &NormalizedConfig, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(config)),
        OutputFormat::Json => serde_json::to_string_pretty(config),
    }
}

fn render_text(config: &NormalizedConfig) -> String {
    let fields: [(&str, &dyn std::fmt::Display); 6] = [
        ("Package name", &config.package_name),
        ("Package version", &config.package_version),
        ("Repository URL", &config.repository_url),
        ("Test repository mode", &config.use_test_repository),
        ("Test repository path", &config.test_repository_path),
        ("Max dependency depth", &config.max_depth),
    ];

    let mut out = String::from(TEXT_HEADER);
    for (label, value) in fields {
        // Writing to a String cannot fail
        let _ = write!(out, "\n  {}: {}", label, value);
    }
    out
}
