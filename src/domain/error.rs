//! Domain error types.

/// Top-level error type for insidersignal.
#[derive(Debug, thiserror::Error)]
pub enum InsiderError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("invalid record at row {index}, field {field}: {reason}")]
    InvalidRecord {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("cannot normalize {field} value {value:?}: {reason}")]
    Normalize {
        field: String,
        value: String,
        reason: String,
    },

    #[error("share total overflows in {ticker} window ending {trade_date}")]
    ClusterOverflow {
        ticker: String,
        trade_date: chrono::NaiveDate,
    },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data source error: {reason}")]
    Source { reason: String },

    #[error("unknown feed: {0}")]
    UnknownFeed(String),

    #[error("alert delivery failed: {reason}")]
    Alert { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InsiderError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        InsiderError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Process exit status for this error category.
    pub fn exit_status(&self) -> u8 {
        match self {
            InsiderError::Io(_) | InsiderError::Alert { .. } => 1,
            InsiderError::ConfigParse { .. }
            | InsiderError::ConfigMissing { .. }
            | InsiderError::ConfigInvalid { .. }
            | InsiderError::UnknownFeed(_) => 2,
            InsiderError::Source { .. } => 3,
            InsiderError::InvalidParameter { .. }
            | InsiderError::InvalidRecord { .. }
            | InsiderError::Normalize { .. }
            | InsiderError::ClusterOverflow { .. } => 4,
        }
    }
}

impl From<&InsiderError> for std::process::ExitCode {
    fn from(err: &InsiderError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
