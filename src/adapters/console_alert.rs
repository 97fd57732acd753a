//! Local alert sinks: standard output or an append-only log file.

use crate::domain::error::InsiderError;
use crate::ports::alert_port::AlertPort;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub struct ConsoleAlert;

impl AlertPort for ConsoleAlert {
    fn send(&self, message: &str) -> Result<(), InsiderError> {
        println!("{}", message);
        Ok(())
    }
}

/// Appends each alert to a file, separated by a blank line.
pub struct FileAlert {
    path: PathBuf,
}

impl FileAlert {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AlertPort for FileAlert {
    fn send(&self, message: &str) -> Result<(), InsiderError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| InsiderError::Alert {
                reason: format!("cannot open {}: {}", self.path.display(), e),
            })?;
        writeln!(file, "{}\n", message).map_err(|e| InsiderError::Alert {
            reason: format!("cannot write {}: {}", self.path.display(), e),
        })?;
        log::info!("alert written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_alert_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alerts.log");
        let sink = FileAlert::new(path.clone());

        sink.send("first").unwrap();
        sink.send("second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\n\nsecond\n\n");
    }

    #[test]
    fn file_alert_bad_path_fails() {
        let sink = FileAlert::new(PathBuf::from("/nonexistent/dir/alerts.log"));
        assert!(matches!(sink.send("x"), Err(InsiderError::Alert { .. })));
    }
}
