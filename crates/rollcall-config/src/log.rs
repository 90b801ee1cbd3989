use std::env;
use std::path::PathBuf;

/// Logging settings.
///
/// # Environment Variables
///
/// - `LOG_LEVEL`: Level for rollcall crates when `RUST_LOG` is unset (default: `info`)
/// - `ROLLCALL_LOG_DIR`: When set, also write a daily-rolling log file there
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup("LOG_LEVEL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "info".to_string()),
            file_dir: lookup("ROLLCALL_LOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::from_lookup(|_| None);
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_file_dir_and_level() {
        let config = LogConfig::from_lookup(|key| match key {
            "LOG_LEVEL" => Some("debug".into()),
            "ROLLCALL_LOG_DIR" => Some("storage/logs".into()),
            _ => None,
        });
        assert_eq!(config.level, "debug");
        assert_eq!(config.file_dir, Some(PathBuf::from("storage/logs")));
    }
}
