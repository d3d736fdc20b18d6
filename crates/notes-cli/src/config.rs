use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    pub notes: NotesSection,
    pub security: SecuritySection,
    pub ui: UiSection,
    pub log: LogSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesSection {
    /// Directory that relative collection names resolve under
    pub dir: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    pub gate: GateMode,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub page_size: usize,
    pub ascii: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GateMode {
    #[default]
    Password,
    Disabled,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            ascii: false,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config from `explicit` (flag or `NOTESTOOL_CONFIG`) or the
/// default location.
///
/// A missing default config means defaults; a missing explicit config is an
/// error, since the user asked for that file.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<NotesConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(crate::errors::CliError::not_found(
                    format!("Config file not found: {}", path.display()),
                    "Hint: Check --config or NOTESTOOL_CONFIG.",
                )
                .into());
            }
            path.to_path_buf()
        }
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                return Ok(NotesConfig::default());
            }
            path
        }
    };
    read_config(&path)
}

pub fn read_config(path: &Path) -> anyhow::Result<NotesConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let config: NotesConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
    if config.ui.page_size == 0 {
        return Err(crate::errors::CliError::invalid_input(format!(
            "Invalid config {}: ui.page_size must be at least 1",
            path.display()
        ))
        .into());
    }
    Ok(config)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("notestool"));
        }
    }
    Ok(home_dir()?.join(".config").join("notestool"))
}

pub fn xdg_state_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_STATE_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("notestool"));
        }
    }
    Ok(home_dir()?.join(".local").join("state").join("notestool"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CliError;
    use tempfile::tempdir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: NotesConfig = toml::from_str("").unwrap();
        assert_eq!(config.security.gate, GateMode::Password);
        assert_eq!(config.security.password, None);
        assert_eq!(config.ui.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.notes.dir.is_none());
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_full_file() {
        let config: NotesConfig = toml::from_str(
            "[notes]\ndir = \"/tmp/n\"\n\n[security]\ngate = \"disabled\"\npassword = \"pw\"\n\n[ui]\npage_size = 5\nascii = true\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.notes.dir.as_deref(), Some("/tmp/n"));
        assert_eq!(config.security.gate, GateMode::Disabled);
        assert_eq!(config.security.password.as_deref(), Some("pw"));
        assert_eq!(config.ui.page_size, 5);
        assert!(config.ui.ascii);
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_defaults_serialize_and_parse_back() {
        let text = toml::to_string_pretty(&NotesConfig::default()).unwrap();
        let parsed: NotesConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ui.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(parsed.security.gate, GateMode::Password);
    }

    #[test]
    fn test_unknown_gate_is_rejected() {
        let result: Result<NotesConfig, _> = toml::from_str("[security]\ngate = \"maybe\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_missing_config_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("CliError");
        assert!(matches!(cli_err, CliError::NotFound { .. }));
    }

    #[test]
    fn test_zero_page_size_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\npage_size = 0\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_read_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[security]\ngate = \"disabled\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.security.gate, GateMode::Disabled);
    }
}
