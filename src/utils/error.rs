use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing credential: environment variable {variable} is not set")]
    MissingCredentialError { variable: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
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
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SurveyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SurveyError::ApiError(_) | SurveyError::HttpStatus { .. } => ErrorCategory::Network,
            SurveyError::MissingCredentialError { .. }
            | SurveyError::ConfigValidationError { .. }
            | SurveyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SurveyError::CsvError(_) | SurveyError::SerializationError(_) => ErrorCategory::Data,
            SurveyError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 退出碼依嚴重程度決定
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SurveyError::ApiError(e) => format!("Could not reach the job board: {}", e),
            SurveyError::HttpStatus { url, status } => {
                format!("Job board answered with HTTP {} ({})", status, url)
            }
            SurveyError::MissingCredentialError { variable } => {
                format!("SuperJob API key is missing ({} is not set)", variable)
            }
            SurveyError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SurveyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SurveyError::ApiError(_) => "Check network connectivity and the configured endpoints",
            SurveyError::HttpStatus { status, .. } if *status == 403 || *status == 401 => {
                "Check that the API key is valid"
            }
            SurveyError::HttpStatus { .. } => "The job board rejected the request; try again later",
            SurveyError::MissingCredentialError { .. } => {
                "Export the key or put it into a .env file in the working directory"
            }
            SurveyError::ConfigValidationError { .. }
            | SurveyError::InvalidConfigValueError { .. } => "Fix the configuration file and rerun",
            SurveyError::CsvError(_) | SurveyError::SerializationError(_) => {
                "Try a different --format"
            }
            SurveyError::IoError(_) => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
