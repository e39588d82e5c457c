use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RemoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RemoteError::RequestError(_) => ErrorCategory::Network,
            RemoteError::IoError(_) => ErrorCategory::System,
            RemoteError::ConfigValidationError { .. }
            | RemoteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RemoteError::RequestError(_) => ErrorSeverity::Medium,
            RemoteError::ConfigValidationError { .. }
            | RemoteError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RemoteError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RemoteError::RequestError(e) if e.is_timeout() => {
                "The music server did not answer in time; check that it is running or raise --timeout-secs"
            }
            RemoteError::RequestError(e) if e.is_connect() => {
                "Could not reach the music server; check --host and that the server is listening"
            }
            RemoteError::RequestError(_) => "Check the host address and the chord or note name",
            RemoteError::IoError(_) => "Check that the config file exists and is readable",
            RemoteError::ConfigValidationError { .. } => "Fix the configuration file syntax",
            RemoteError::InvalidConfigValueError { .. } => {
                "Use an http:// or https:// host address and a timeout between 1 and 300 seconds"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RemoteError::RequestError(_) => format!("Could not send play request: {}", self),
            RemoteError::IoError(e) => format!("File access failed: {}", e),
            RemoteError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            RemoteError::InvalidConfigValueError { field, value, reason } => {
                format!("{} = '{}' is invalid: {}", field, value, reason)
            }
        }
    }
}

impl ErrorSeverity {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RemoteError>;
