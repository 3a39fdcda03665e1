use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid operand for '{field}': '{value}' ({reason})")]
    InvalidOperandError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Operand '{field}' out of range: {value} (must be between {min} and {max})")]
    OperandOutOfRangeError {
        field: String,
        value: i64,
        min: i32,
        max: i32,
    },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the binary.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CompareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::InvalidOperandError { .. }
            | CompareError::OperandOutOfRangeError { .. } => ErrorCategory::Input,
            CompareError::ConfigParseError(_) | CompareError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            CompareError::IoError(_) | CompareError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CompareError::InvalidOperandError { field, value, .. } => {
                format!("'{}' is not an integer (operand: {})", value, field)
            }
            CompareError::OperandOutOfRangeError { field, value, .. } => {
                format!("{} does not fit in a 32-bit signed integer (operand: {})", value, field)
            }
            CompareError::ConfigParseError(_) => "The configuration file is not valid TOML".to_string(),
            CompareError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration value '{}' is not allowed for {}", value, field)
            }
            CompareError::IoError(e) => format!("Could not read input: {}", e),
            CompareError::SerializationError(_) => "Could not render the result".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CompareError::InvalidOperandError { .. } => "Pass operands as decimal integers, e.g. `int-compare -3 3`",
            CompareError::OperandOutOfRangeError { .. } => {
                "Use values between -2147483648 and 2147483647"
            }
            CompareError::ConfigParseError(_) => "Check the TOML syntax of the configuration file",
            CompareError::InvalidConfigValueError { .. } => {
                "Check the allowed values listed in the error message"
            }
            CompareError::IoError(_) => "Make sure the configuration file exists and is readable",
            CompareError::SerializationError(_) => "Retry with `--format text`",
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
