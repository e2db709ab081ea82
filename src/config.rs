//! YAML configuration file support.
//!
//! One file describes the templates and the tuning of every matching layer.
//! Relative template paths are resolved against the directory that holds the
//! configuration file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "invoices"
//!
//! templates:
//!   text_path: "templates/invoice.txt"
//!   image_path: "templates/invoice.png"
//!
//! similarity:
//!   autojunk: true
//!
//! image:
//!   resize_candidate: true
//!   interpolation: "linear"
//!   clamp_negative: true
//!   use_parallel: false
//!
//! entities:
//!   extra_given_names: ["Thandiwe"]
//!   extra_locations: ["Gqeberha"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use entities::RecognizerConfig;
use imagematch::ImageMatchConfig;
use serde::{Deserialize, Serialize};
use similarity::SimilarityConfig;
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DocMatchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub templates: TemplatePaths,

    #[serde(default)]
    pub similarity: SimilarityConfig,

    #[serde(default)]
    pub image: ImageMatchConfig,

    #[serde(default)]
    pub entities: RecognizerConfig,

    /// Directory of the file this was loaded from; anchors relative paths.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// Where the reference templates live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePaths {
    /// Plain UTF-8 text the text path compares against.
    #[serde(default)]
    pub text_path: Option<PathBuf>,
    /// Reference image for the image path; converted to grayscale on load.
    #[serde(default)]
    pub image_path: Option<PathBuf>,
}

impl DocMatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DocMatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_text_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates.text_path = Some(path.into());
        self
    }

    pub fn with_image_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates.image_path = Some(path.into());
        self
    }

    /// Text template path, resolved against the config file's directory.
    pub fn text_template_path(&self) -> Option<PathBuf> {
        self.templates.text_path.as_deref().map(|p| self.resolve(p))
    }

    /// Reference image path, resolved against the config file's directory.
    pub fn image_template_path(&self) -> Option<PathBuf> {
        self.templates.image_path.as_deref().map(|p| self.resolve(p))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.templates.validate()?;

        for name in self
            .entities
            .extra_given_names
            .iter()
            .chain(&self.entities.extra_locations)
        {
            if name.trim().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "entities word lists must not contain blank entries".into(),
                ));
            }
        }

        Ok(())
    }
}

impl TemplatePaths {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.text_path.is_none() && self.image_path.is_none() {
            return Err(ConfigLoadError::MissingField(
                "templates.text_path or templates.image_path".into(),
            ));
        }
        for path in self.text_path.iter().chain(&self.image_path) {
            if path.as_os_str().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "template paths must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for DocMatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            templates: TemplatePaths::default(),
            similarity: SimilarityConfig::default(),
            image: ImageMatchConfig::default(),
            entities: RecognizerConfig::default(),
            base_dir: None,
        }
    }
}
