//! File logging bootstrap.
//!
//! Logging is off unless a level is set through `NOTESTOOL_LOG` or the
//! `[log] level` config key. When on, records go to a rotating file under the
//! state directory; nothing is ever written to the terminal, which belongs to
//! the menu.

use std::path::Path;

use anyhow::Context;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

use crate::config::LogSection;
use crate::constants::LOG_ENV;

const LOG_FILE_BASENAME: &str = "notestool";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Pick the level to log at. The environment wins over config; blank values
/// count as unset.
pub fn resolve_level(env_level: Option<String>, config: &LogSection) -> Option<String> {
    let non_blank = |level: String| {
        let level = level.trim().to_string();
        (!level.is_empty()).then_some(level)
    };
    env_level
        .and_then(non_blank)
        .or_else(|| config.level.clone().and_then(non_blank))
}

/// Start the file logger if a level is configured.
///
/// The returned handle must be kept alive for the rest of the process.
pub fn init_logging(config: &LogSection, log_dir: &Path) -> anyhow::Result<Option<LoggerHandle>> {
    let Some(level) = resolve_level(std::env::var(LOG_ENV).ok(), config) else {
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let handle = Logger::try_with_str(&level)
        .with_context(|| format!("Invalid log level `{}`", level))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("Failed to start logger")?;

    info!(
        "notestool {} started, level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(Some(handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(level: Option<&str>) -> LogSection {
        LogSection {
            level: level.map(str::to_string),
        }
    }

    #[test]
    fn test_logging_off_by_default() {
        assert_eq!(resolve_level(None, &section(None)), None);
    }

    #[test]
    fn test_env_level_wins() {
        let level = resolve_level(Some("debug".to_string()), &section(Some("warn")));
        assert_eq!(level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_level_used_without_env() {
        assert_eq!(
            resolve_level(None, &section(Some("info"))).as_deref(),
            Some("info")
        );
    }

    #[test]
    fn test_blank_level_is_unset() {
        assert_eq!(resolve_level(Some("  ".to_string()), &section(None)), None);
        let level = resolve_level(Some("".to_string()), &section(Some("warn")));
        assert_eq!(level.as_deref(), Some("warn"));
    }
}
