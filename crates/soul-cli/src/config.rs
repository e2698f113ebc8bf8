//! Optional `soulscript.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "soulscript.toml";

/// Settings read from the config file. Every field is optional; command-line
/// flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Location of the journal file.
    pub data_file: Option<PathBuf>,
    /// Rows in the terminal chart.
    pub chart_height: Option<usize>,
    pub svg_width: Option<u32>,
    pub svg_height: Option<u32>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `soulscript.toml` in the working
    /// directory is used if present, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Fails if an explicit config file is missing, or any config file cannot be
    /// read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let config: Config = toml::from_str(
            r#"
data_file = "journal/entries.csv"
chart_height = 15
svg_width = 800
svg_height = 400
"#,
        )
        .unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("journal/entries.csv")));
        assert_eq!(config.chart_height, Some(15));
        assert_eq!(config.svg_width, Some(800));
        assert_eq!(config.svg_height, Some(400));
    }

    #[test]
    fn empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("threshold = 4").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "chart_height = 7\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.chart_height, Some(7));
        assert_eq!(config.data_file, None);
    }
}
