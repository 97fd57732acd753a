//! INI file configuration adapter.
//!
//! Section and key names are case-insensitive. Values keep their original
//! case and are trimmed.

use crate::domain::config_validation::parse_bool;
use crate::domain::error::InsiderError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InsiderError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config.load(path).map_err(|reason| InsiderError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        log::debug!("loaded config {}", path.display());
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, InsiderError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| InsiderError::ConfigParse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        match self.config.getint(section, key) {
            Ok(Some(v)) => v,
            Ok(None) => default,
            Err(e) => {
                log::warn!("[{}] {}: {}; using {}", section, key, e, default);
                default
            }
        }
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(default)
    }
}
