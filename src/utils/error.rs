use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Regex compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Input processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Pattern,
    Io,
    Configuration,
    Processing,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ToolError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolError::PatternError(_) => ErrorCategory::Pattern,
            ToolError::IoError(_) => ErrorCategory::Io,
            ToolError::SerializationError(_) => ErrorCategory::Serialization,
            ToolError::ConfigError { .. }
            | ToolError::InvalidConfigValueError { .. }
            | ToolError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ToolError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A pattern that fails to compile is a bug in the binary itself
            ToolError::PatternError(_) => ErrorSeverity::Critical,
            ToolError::IoError(_) => ErrorSeverity::High,
            ToolError::SerializationError(_) => ErrorSeverity::High,
            ToolError::ConfigError { .. }
            | ToolError::InvalidConfigValueError { .. }
            | ToolError::MissingConfigError { .. } => ErrorSeverity::Medium,
            ToolError::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ToolError::PatternError(_) => {
                "This is a bug in a built-in pattern; please report it".to_string()
            }
            ToolError::IoError(_) => {
                "Check that the input file exists and is readable".to_string()
            }
            ToolError::SerializationError(_) => {
                "Retry with --format text to see the raw result".to_string()
            }
            ToolError::ConfigError { .. } | ToolError::InvalidConfigValueError { .. } => {
                "Fix the flagged argument and run again".to_string()
            }
            ToolError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            ToolError::ProcessingError { .. } => {
                "Check that the input is plain UTF-8 text".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolError::IoError(e) => format!("Could not read the input: {}", e),
            ToolError::InvalidConfigValueError { field, reason, .. } => {
                format!("Argument '{}' is invalid: {}", field, reason)
            }
            ToolError::MissingConfigError { field } => {
                format!("Argument '{}' is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_category_and_severity() {
        let err = ToolError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "test.txt not found",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_config_error_is_medium() {
        let err = ToolError::MissingConfigError {
            field: "file".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("file"));
    }
}
