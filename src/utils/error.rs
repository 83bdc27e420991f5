use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Invalid {shape} {field}: {value} (must be finite and greater than zero)")]
    InvalidDimension {
        shape: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("No {capability} capability registered under '{name}'")]
    CapabilityNotRegistered {
        capability: &'static str,
        name: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip operation failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Archive entry '{entry}' escapes the extraction directory")]
    UnsafeArchiveEntry { entry: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Construction,
    Composition,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SolidError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolidError::InvalidDimension { .. } => ErrorCategory::Construction,
            SolidError::CapabilityNotRegistered { .. } => ErrorCategory::Composition,
            SolidError::Io(_)
            | SolidError::Archive(_)
            | SolidError::UnsafeArchiveEntry { .. }
            | SolidError::Serialization(_) => ErrorCategory::Io,
            SolidError::ConfigError { .. } | SolidError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SolidError::InvalidDimension { .. }
            | SolidError::InvalidConfigValue { .. }
            | SolidError::ConfigError { .. } => ErrorSeverity::High,
            SolidError::CapabilityNotRegistered { .. } => ErrorSeverity::Medium,
            SolidError::Io(_) | SolidError::Archive(_) | SolidError::Serialization(_) => {
                ErrorSeverity::High
            }
            SolidError::UnsafeArchiveEntry { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Construction => "Pass finite, positive dimensions to the shape",
            ErrorCategory::Composition => {
                "Run `solid capabilities` to see which devices provide which contracts"
            }
            ErrorCategory::Io => match self {
                SolidError::UnsafeArchiveEntry { .. } => {
                    "Do not extract this archive; it was not produced by this tool"
                }
                _ => "Check that the file exists and that you have permission to access it",
            },
            ErrorCategory::Configuration => "Fix the scenario file and run again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::InvalidDimension { shape, field, value } => {
                format!("A {} cannot have {} = {}", shape, field, value)
            }
            SolidError::CapabilityNotRegistered { capability, name } => {
                format!("Device '{}' cannot {}", name, capability)
            }
            SolidError::Io(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
