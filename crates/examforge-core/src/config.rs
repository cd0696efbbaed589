//! examforge configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Upper bounds for the authoring prompts and exam files.
///
/// Every bound is inclusive and the lower bound is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Longest allowed exam, in minutes.
    #[serde(default = "default_max_duration")]
    pub max_duration_minutes: u32,
    /// Most questions an exam may hold.
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,
    /// Highest mark a single question may carry.
    #[serde(default = "default_max_mark")]
    pub max_mark: u32,
}

fn default_max_duration() -> u32 {
    300
}
fn default_max_questions() -> u32 {
    50
}
fn default_max_mark() -> u32 {
    10
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_duration_minutes: default_max_duration(),
            max_questions: default_max_questions(),
            max_mark: default_max_mark(),
        }
    }
}

impl InputLimits {
    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.max_duration_minutes >= 1,
            "limits.max_duration_minutes must be at least 1"
        );
        anyhow::ensure!(
            self.max_questions >= 1,
            "limits.max_questions must be at least 1"
        );
        anyhow::ensure!(self.max_mark >= 1, "limits.max_mark must be at least 1");
        anyhow::ensure!(
            self.max_mark.checked_mul(self.max_questions).is_some(),
            "limits.max_mark * limits.max_questions must fit in a u32 score"
        );
        Ok(())
    }
}

/// Top-level examforge configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamforgeConfig {
    /// Prompt and file bounds.
    #[serde(default)]
    pub limits: InputLimits,
    /// Directory score reports are written to when no explicit path is given.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `examforge.toml` in the current directory
/// 2. `~/.config/examforge/config.toml`
///
/// Environment variable override: `EXAMFORGE_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<ExamforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examforge.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => ExamforgeConfig::default(),
    };

    if let Ok(dir) = std::env::var("EXAMFORGE_OUTPUT_DIR") {
        if !dir.is_empty() {
            config.output_dir = Some(PathBuf::from(dir));
        }
    }

    Ok(config)
}

/// Parse and validate a TOML config string.
pub fn parse_config_str(content: &str) -> Result<ExamforgeConfig> {
    let config: ExamforgeConfig = toml::from_str(content)?;
    config.limits.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examforge"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ExamforgeConfig::default();
        assert_eq!(config.limits.max_duration_minutes, 300);
        assert_eq!(config.limits.max_questions, 50);
        assert_eq!(config.limits.max_mark, 10);
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn parse_partial_limits() {
        let config = parse_config_str(
            r#"
output_dir = "results"

[limits]
max_mark = 20
"#,
        )
        .unwrap();
        assert_eq!(config.limits.max_mark, 20);
        assert_eq!(config.limits.max_questions, 50);
        assert_eq!(config.output_dir, Some(PathBuf::from("results")));
    }

    #[test]
    fn rejects_zero_limits() {
        let err = parse_config_str("[limits]\nmax_questions = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_questions"));
    }

    #[test]
    fn rejects_limits_whose_total_score_overflows() {
        let err = parse_config_str("[limits]\nmax_mark = 4294967295\n").unwrap_err();
        assert!(err.to_string().contains("fit in a u32"));

        let config = parse_config_str("[limits]\nmax_mark = 1000\nmax_questions = 1000\n").unwrap();
        assert_eq!(config.limits.max_mark, 1000);
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_from(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("examforge.toml");
        std::fs::write(&path, "[limits]\nmax_duration_minutes = 90\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.limits.max_duration_minutes, 90);
    }
}
