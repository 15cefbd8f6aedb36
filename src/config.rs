use crate::catalog::QuestionCatalog;
use crate::error::AssessError;
use crate::scorer::{ScoringOptions, UnmatchedOption};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "techfit";
const CONFIG_FILE: &str = "config.toml";

/// Runtime configuration, read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessConfig {
    /// Catalog TOML to use instead of the built-in battery
    pub catalog: Option<PathBuf>,
    /// Handling of text answers that match no option
    pub unmatched_option: UnmatchedOption,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for AssessConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            unmatched_option: UnmatchedOption::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl AssessConfig {
    /// `<config dir>/techfit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AssessError> {
        toml::from_str(content).map_err(|e| AssessError::Config(e.to_string()))
    }

    /// Load an explicit config file; it must exist.
    pub fn load(path: &Path) -> Result<Self, AssessError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AssessError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content)
            .map_err(|e| AssessError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load `explicit` if given, else the default location, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AssessError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            unmatched_option: self.unmatched_option,
        }
    }

    /// Configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<QuestionCatalog, AssessError> {
        match &self.catalog {
            Some(path) => QuestionCatalog::load(path),
            None => QuestionCatalog::builtin(),
        }
    }
}
