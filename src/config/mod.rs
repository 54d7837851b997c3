use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "asistencia.conf";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_backing_path")]
    pub backing_path: PathBuf,
    #[serde(default = "default_valid_statuses")]
    pub valid_statuses: Vec<String>,
    #[serde(default = "default_allow_delete")]
    pub allow_delete: bool,
    #[serde(default = "default_back_keywords")]
    pub back_keywords: Vec<String>,
}

fn default_backing_path() -> PathBuf {
    PathBuf::from("asistencia.csv")
}
fn default_valid_statuses() -> Vec<String> {
    vec!["Presente".to_string(), "Ausente".to_string()]
}
fn default_allow_delete() -> bool {
    true
}
fn default_back_keywords() -> Vec<String> {
    vec!["volver".to_string(), "back".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backing_path: default_backing_path(),
            valid_statuses: default_valid_statuses(),
            allow_delete: default_allow_delete(),
            back_keywords: default_back_keywords(),
        }
    }
}

impl Config {
    /// Config pointing at a specific backing file, everything else default.
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            backing_path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Load `asistencia.conf` from the working directory, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Canonical form of `raw` if it names one of the configured statuses
    /// (case-insensitive).
    pub fn canonical_status(&self, raw: &str) -> Option<&str> {
        let wanted = raw.trim().to_lowercase();
        self.valid_statuses
            .iter()
            .find(|s| s.to_lowercase() == wanted)
            .map(String::as_str)
    }

    /// Allowed statuses for prompts and messages, e.g. `Presente/Ausente`.
    pub fn status_hint(&self) -> String {
        self.valid_statuses.join("/")
    }

    pub fn is_back(&self, input: &str) -> bool {
        let input = input.trim().to_lowercase();
        self.back_keywords.iter().any(|k| k.to_lowercase() == input)
    }
}
