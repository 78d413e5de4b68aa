use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Profile error: {0}")]
    ProfileError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Input error: {message}")]
    InputError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, FitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FitError::ValidationError { .. } | FitError::InputError { .. } => ErrorCategory::Input,
            FitError::ConfigError { .. } | FitError::ProfileError(_) => {
                ErrorCategory::Configuration
            }
            FitError::IoError(_) | FitError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitError::ValidationError { .. } | FitError::InputError { .. } => ErrorSeverity::Medium,
            FitError::ConfigError { .. } | FitError::ProfileError(_) => ErrorSeverity::High,
            FitError::IoError(_) | FitError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FitError::ValidationError { message } | FitError::InputError { message } => {
                message.clone()
            }
            FitError::ConfigError { message } => format!("Configuration problem: {}", message),
            FitError::ProfileError(e) => format!("Could not read the profile file: {}", e),
            FitError::IoError(e) => format!("IO failure: {}", e),
            FitError::SerializationError(e) => format!("Could not format the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check your measurements and try again",
            ErrorCategory::Configuration => "Review the command line flags and profile file",
            ErrorCategory::System => "Re-run with --verbose and check the logs",
        }
    }
}
