//! Domain error types.

/// Top-level error type for arkflow.
#[derive(Debug, thiserror::Error)]
pub enum ArkflowError {
    #[error("invalid trade at index {index}: {reason}")]
    InvalidTrade { index: usize, reason: String },

    #[error("unknown fund: {0}")]
    UnknownFund(String),

    #[error("trade source error: {reason}")]
    DataSource { reason: String },

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

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ArkflowError> for std::process::ExitCode {
    fn from(err: &ArkflowError) -> Self {
        let code: u8 = match err {
            ArkflowError::Io(_) => 1,
            ArkflowError::ConfigParse { .. }
            | ArkflowError::ConfigMissing { .. }
            | ArkflowError::ConfigInvalid { .. } => 2,
            ArkflowError::DataSource { .. } => 3,
            ArkflowError::InvalidTrade { .. } | ArkflowError::UnknownFund(_) => 4,
            ArkflowError::Report { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
