//! Domain error types.

/// Top-level error type for oreboard.
#[derive(Debug, thiserror::Error)]
pub enum OreboardError {
    #[error("provider error for {ticker}: {reason}")]
    Provider { ticker: String, reason: String },

    #[error("http client error: {reason}")]
    HttpClient { reason: String },

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

    #[error("invalid period '{value}', expected one of 1mo, 3mo, 6mo, 1y, 2y, 5y")]
    InvalidPeriod { value: String },

    #[error("no data for {ticker}")]
    NoData { ticker: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&OreboardError> for std::process::ExitCode {
    fn from(err: &OreboardError) -> Self {
        let code: u8 = match err {
            OreboardError::Io(_) => 1,
            OreboardError::ConfigParse { .. }
            | OreboardError::ConfigMissing { .. }
            | OreboardError::ConfigInvalid { .. } => 2,
            OreboardError::Provider { .. } | OreboardError::HttpClient { .. } => 3,
            OreboardError::InvalidPeriod { .. } => 4,
            OreboardError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
