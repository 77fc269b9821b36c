use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Display configuration for the rendering adapters.
///
/// Serializable to TOML. Every field has a sane default.
///
/// # Example
/// ```
/// use mc_core::config::{DisplayConfig, OutputFormat};
/// let config = DisplayConfig::default();
/// assert_eq!(config.format, OutputFormat::Text);
/// assert_eq!(config.capacity_unit, "kW");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Output adapter: "Text" | "Html" | "Json".
    pub format: OutputFormat,
    /// Unit suffix appended to the capacity field.
    pub capacity_unit: String,
    /// Echo the normalized model number as the first line.
    pub show_model: bool,
    /// Wrap the product-type/category span in the `highlight` class (HTML).
    pub highlight_category: bool,
}

/// Output format enumeration.
///
/// # Example
/// ```
/// use mc_core::config::OutputFormat;
/// assert!(matches!(OutputFormat::default(), OutputFormat::Text));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum OutputFormat {
    /// Labeled plain-text lines.
    #[default]
    Text,
    /// The original result-container markup.
    Html,
    /// Pretty-printed JSON record.
    Json,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            capacity_unit: "kW".to_string(),
            show_model: true,
            highlight_category: true,
        }
    }
}

/// Intermediate TOML structure, all fields optional for partial override.
#[derive(Deserialize)]
struct ConfigFile {
    display: Option<DisplaySection>,
}

/// Display section of the TOML config.
#[derive(Deserialize)]
struct DisplaySection {
    format: Option<OutputFormat>,
    capacity_unit: Option<String>,
    show_model: Option<bool>,
    highlight_category: Option<bool>,
}

/// Load a TOML file and merge it over the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use mc_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<DisplayConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    let mut config = DisplayConfig::default();

    if let Some(d) = file.display {
        if let Some(v) = d.format {
            config.format = v;
        }
        if let Some(v) = d.capacity_unit {
            config.capacity_unit = v;
        }
        if let Some(v) = d.show_model {
            config.show_model = v;
        }
        if let Some(v) = d.highlight_category {
            config.highlight_category = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn partial_section_merges_over_defaults() {
        let file = write_config("[display]\nformat = \"Html\"\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.capacity_unit, "kW");
        assert!(config.show_model);
    }

    #[test]
    fn full_section_overrides_everything() {
        let file = write_config(
            "[display]\nformat = \"Json\"\ncapacity_unit = \"BTU\"\nshow_model = false\nhighlight_category = false\n",
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.capacity_unit, "BTU");
        assert!(!config.show_model);
        assert!(!config.highlight_category);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let file = write_config("[display\nformat =");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/modelcheck.toml")).is_err());
    }
}
