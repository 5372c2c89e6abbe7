use crate::error::Result;
use crate::paths;
use crate::types::OverrideFlags;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CLIENT_NAME: &str = "Client Name";

const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// PlaybookConfig
// ---------------------------------------------------------------------------

/// Project settings, read from `playbook.yaml` at the project root. Every
/// field has a default, so a missing file is the same as an empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybookConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Pre-loaded play pack, relative to the project root.
    #[serde(default = "default_playpack")]
    pub default_playpack: PathBuf,
    #[serde(default = "default_client_name")]
    pub client_name: String,
    #[serde(default)]
    pub overrides: OverrideFlags,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_version() -> u32 {
    1
}

fn default_playpack() -> PathBuf {
    PathBuf::from(paths::DEFAULT_PLAYPACK_FILE)
}

fn default_client_name() -> String {
    DEFAULT_CLIENT_NAME.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for PlaybookConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            default_playpack: default_playpack(),
            client_name: default_client_name(),
            overrides: OverrideFlags::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl PlaybookConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: PlaybookConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn default_playpack_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.default_playpack)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.output_dir)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let playpack = self.default_playpack_path(root);
        if !playpack.is_file() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "default play pack '{}' does not exist; every run will need --playpack",
                    playpack.display()
                ),
            });
        }

        let ext = self
            .default_playpack
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        if !ext.is_some_and(|e| WORKBOOK_EXTENSIONS.contains(&e.as_str())) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "default play pack '{}' does not look like a spreadsheet",
                    self.default_playpack.display()
                ),
            });
        }

        if self.client_name.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("client_name is blank; reports will use '{DEFAULT_CLIENT_NAME}'"),
            });
        }

        let out = self.output_path(root);
        if out.exists() && !out.is_dir() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("output_dir '{}' is not a directory", out.display()),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
