use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    /// 價格組合運算缺少必要的運算元，屬於呼叫端的程式錯誤
    #[error("Price combination requires '{field}' but it is absent")]
    MissingPrice { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl MappingError {
    /// 前置條件錯誤不應重試
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, MappingError::MissingPrice { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MappingError::IoError(e) => format!("Could not read input: {}", e),
            MappingError::SerializationError(e) => format!("Payload is not valid JSON: {}", e),
            MappingError::ConfigError { message } => format!("Configuration problem: {}", message),
            MappingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            MappingError::MissingPrice { field } => {
                format!("Cannot combine prices, '{}' is missing", field)
            }
            MappingError::ProcessingError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_price_is_precondition_violation() {
        let err = MappingError::MissingPrice {
            field: "surcharge".to_string(),
        };
        assert!(err.is_precondition_violation());
        assert_eq!(
            err.to_string(),
            "Price combination requires 'surcharge' but it is absent"
        );

        let err = MappingError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn test_serde_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MappingError = parse_err.into();
        assert!(matches!(err, MappingError::SerializationError(_)));
        assert!(err.user_friendly_message().starts_with("Payload is not valid JSON"));
    }
}
