//! Process configuration, read from environment variables.

use std::path::PathBuf;

/// Environment variable naming the product file to load at startup.
pub const DATA_FILE_ENV: &str = "STOCKROOM_DATA_FILE";

/// Product file used when [`DATA_FILE_ENV`] is unset or blank.
pub const DEFAULT_DATA_FILE: &str = "Productos.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup (the environment, in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(DATA_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => Self {
                data_file: PathBuf::from(path),
            },
            None => {
                tracing::debug!(
                    default = DEFAULT_DATA_FILE,
                    "STOCKROOM_DATA_FILE not set; using default product file"
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset_or_blank() {
        assert_eq!(Settings::from_lookup(|_| None), Settings::default());
        assert_eq!(
            Settings::from_lookup(|_| Some("   ".to_string())).data_file,
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }

    #[test]
    fn reads_data_file_from_lookup() {
        let settings = Settings::from_lookup(|key| {
            (key == DATA_FILE_ENV).then(|| "/srv/stock/products.csv".to_string())
        });
        assert_eq!(settings.data_file, PathBuf::from("/srv/stock/products.csv"));
    }
}
