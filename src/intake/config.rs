use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

const CONFIG_DIR_NAME: &str = "excel-intake";
const CONFIG_FILE_NAME: &str = "intake.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    pub general: GeneralConfig,
    pub host: HostConfig,
    pub handoff: HandoffConfig,
}

impl IntakeConfig {
    /// Default location: `<config dir>/excel-intake/intake.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => {
                info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: IntakeConfig = toml::from_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            title: "Get Excel Help Now".to_string(),
            subtitle: "Tell us what you need and an Excel expert will reach out".to_string(),
        }
    }
}

/// How the form is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Centered dialog opened from the landing screen; closing it discards the form
    #[default]
    Modal,
    /// Form fills the content panel and stays mounted
    Inline,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub mode: HostMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HandoffConfig {
    /// Account-creation page; the submitted email is appended as `email=`
    pub signup_url: String,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            signup_url: "/signup".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntakeError;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = IntakeConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.general.title, "Get Excel Help Now");
        assert_eq!(config.host.mode, HostMode::Modal);
        assert_eq!(config.handoff.signup_url, "/signup");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[host]\nmode = \"inline\"\n\n[handoff]\nsignup_url = \"https://example.com/signup\""
        )
        .unwrap();

        let config = IntakeConfig::load_from(file.path()).unwrap();
        assert_eq!(config.host.mode, HostMode::Inline);
        assert_eq!(config.handoff.signup_url, "https://example.com/signup");
        assert_eq!(config.general.title, "Get Excel Help Now");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[host]\nmode = \"sidebar\"").unwrap();

        let err = IntakeConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, IntakeError::TomlParse(_)));
    }
}
