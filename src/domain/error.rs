//! Domain error types.

/// Top-level error type for txlens.
#[derive(Debug, thiserror::Error)]
pub enum TxlensError {
    #[error("client name must not be blank")]
    BlankClientName,

    #[error("failed to read {path}: {reason}")]
    DataRead { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    DataParse { path: String, reason: String },

    #[error("unknown data format: {value} (expected json or csv)")]
    UnknownFormat { value: String },

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

    #[error("failed to write report: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TxlensError> for std::process::ExitCode {
    fn from(err: &TxlensError) -> Self {
        let code: u8 = match err {
            TxlensError::Io(_) => 1,
            TxlensError::ConfigParse { .. }
            | TxlensError::ConfigMissing { .. }
            | TxlensError::ConfigInvalid { .. } => 2,
            TxlensError::DataRead { .. }
            | TxlensError::DataParse { .. }
            | TxlensError::UnknownFormat { .. } => 3,
            TxlensError::BlankClientName => 4,
            TxlensError::Report { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_context() {
        let err = TxlensError::ConfigMissing {
            section: "data".into(),
            key: "path".into(),
        };
        assert_eq!(err.to_string(), "missing config key [data] path");

        let err = TxlensError::DataParse {
            path: "records.json".into(),
            reason: "expected an array".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse records.json: expected an array"
        );

        let err = TxlensError::UnknownFormat {
            value: "xml".into(),
        };
        assert!(err.to_string().contains("xml"));
    }
}
