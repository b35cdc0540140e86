use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data source returned {status}: {message}")]
    DataSourceError { status: u16, message: String },

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Phone '{phone}' has no color variants")]
    PhoneWithoutColors { phone: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    DataSource,
    Catalog,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::ConfigValidationError { .. }
            | CompareError::InvalidConfigValueError { .. }
            | CompareError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CompareError::ApiError(_)
            | CompareError::DataSourceError { .. }
            | CompareError::SerializationError(_) => ErrorCategory::DataSource,
            CompareError::EmptyCatalog | CompareError::PhoneWithoutColors { .. } => {
                ErrorCategory::Catalog
            }
            CompareError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // transient network trouble, worth another try
            CompareError::ApiError(_) => ErrorSeverity::Medium,
            CompareError::DataSourceError { status, .. } if *status >= 500 => {
                ErrorSeverity::Medium
            }
            CompareError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Short message suitable for printing to stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CompareError::ApiError(_) => "Could not reach the phone catalog".to_string(),
            CompareError::DataSourceError { status, .. } => {
                format!("The phone catalog rejected the request (HTTP {})", status)
            }
            CompareError::SerializationError(_) => {
                "The phone catalog returned data in an unexpected shape".to_string()
            }
            CompareError::EmptyCatalog => "There are no phones to compare".to_string(),
            CompareError::PhoneWithoutColors { phone } => {
                format!("Phone '{}' has no colors configured", phone)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the configuration file and command line flags".to_string()
            }
            ErrorCategory::DataSource => match self {
                CompareError::DataSourceError { status: 401, .. }
                | CompareError::DataSourceError { status: 403, .. } => {
                    "Check the Supabase API key (SUPABASE_ANON_KEY)".to_string()
                }
                _ => "Check the Supabase URL and network connectivity, then retry".to_string(),
            },
            ErrorCategory::Catalog => {
                "Make sure the phones table has rows and every phone has at least one color"
                    .to_string()
            }
            ErrorCategory::System => "Check file paths and permissions".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_are_high_severity() {
        assert_eq!(CompareError::EmptyCatalog.category(), ErrorCategory::Catalog);
        assert_eq!(CompareError::EmptyCatalog.severity(), ErrorSeverity::High);

        let err = CompareError::PhoneWithoutColors {
            phone: "iphone14".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Catalog);
        assert!(err.user_friendly_message().contains("iphone14"));
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let err = CompareError::DataSourceError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = CompareError::DataSourceError {
            status: 401,
            message: "invalid key".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("SUPABASE_ANON_KEY"));
    }

    #[test]
    fn test_config_errors_share_a_category() {
        let errors = [
            CompareError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: "bad".to_string(),
            },
            CompareError::MissingConfigError {
                field: "source.path".to_string(),
            },
        ];

        for err in errors {
            assert_eq!(err.category(), ErrorCategory::Configuration);
            assert_eq!(err.severity(), ErrorSeverity::High);
        }
    }
}
