use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::NamePattern;

/// Pattern lists deciding which models are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Names matching any of these are never rendered.
    pub exclude: Vec<NamePattern>,
    /// When non-empty, only names matching one of these are rendered.
    pub only: Vec<NamePattern>,
}

impl FilterConfig {
    pub fn new<E, O>(exclude: E, only: O) -> Self
    where
        E: IntoIterator,
        E::Item: Into<NamePattern>,
        O: IntoIterator,
        O::Item: Into<NamePattern>,
    {
        Self {
            exclude: exclude.into_iter().map(Into::into).collect(),
            only: only.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a config file. A missing file yields the empty config.
    ///
    /// Files ending in `.toml` are read as TOML, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    event = "config_missing",
                    path = %path.display(),
                    "using empty filter config"
                );
                return Ok(Self::default());
            }
            Err(err) => return Err(Error::Io(err)),
        };

        let format = ConfigFormat::from_path(path);
        let config = Self::parse(&content, format).map_err(|message| Error::ConfigSyntax {
            format: format.label(),
            path: path.to_path_buf(),
            message,
        })?;

        tracing::debug!(
            event = "config_loaded",
            path = %path.display(),
            exclude = config.exclude.len(),
            only = config.only.len()
        );
        Ok(config)
    }

    /// Parse config text. Errors carry the parser's message verbatim.
    pub fn parse(content: &str, format: ConfigFormat) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawFilterConfig = match format {
            ConfigFormat::Yaml => {
                serde_yaml_ng::from_str::<Option<RawFilterConfig>>(content)
                    .map_err(|err| err.to_string())?
                    .unwrap_or_default()
            }
            ConfigFormat::Toml => toml::from_str(content).map_err(|err| err.to_string())?,
        };

        Ok(Self::new(
            raw.exclude.unwrap_or_default(),
            raw.only.unwrap_or_default(),
        ))
    }
}

/// On-disk encodings accepted for the filter config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawFilterConfig {
    #[serde(default)]
    exclude: Option<Vec<String>>,
    #[serde(default)]
    only: Option<Vec<String>>,
}
