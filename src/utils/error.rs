use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Malformed version '{input}': {reason}")]
    MalformedVersion { input: String, reason: String },

    #[error("Registry unavailable for image '{image}': {message}")]
    RegistryUnavailable { image: String, message: String },

    #[error("Manifest '{path}' could not be read: {message}")]
    ManifestUnreadable { path: String, message: String },

    #[error("Manifest '{path}' could not be written: {message}")]
    ManifestUnwritable { path: String, message: String },

    #[error("Version control command `{command}` failed: {stderr}")]
    VersionControlFailure { command: String, stderr: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Version,
    Registry,
    Manifest,
    VersionControl,
    Configuration,
    System,
}

/// How far an error propagates: `Low` is recovered locally, everything else
/// aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReleaseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReleaseError::MalformedVersion { .. } => ErrorCategory::Version,
            ReleaseError::RegistryUnavailable { .. } => ErrorCategory::Registry,
            ReleaseError::ManifestUnreadable { .. } | ReleaseError::ManifestUnwritable { .. } => {
                ErrorCategory::Manifest
            }
            ReleaseError::VersionControlFailure { .. } => ErrorCategory::VersionControl,
            ReleaseError::ConfigError { .. }
            | ReleaseError::InvalidConfigValueError { .. }
            | ReleaseError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ReleaseError::IoError(_) | ReleaseError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Version | ErrorCategory::Registry => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Manifest => ErrorSeverity::High,
            ErrorCategory::VersionControl | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for an error that reached `main`. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Version | ErrorCategory::Registry | ErrorCategory::Manifest => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::VersionControl | ErrorCategory::System => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ReleaseError::MalformedVersion { .. } => {
                "Version will be treated as a patch-level change".to_string()
            }
            ReleaseError::RegistryUnavailable { .. } => {
                "Check network access to the registry and re-run the release job".to_string()
            }
            ReleaseError::ManifestUnreadable { path, .. } => format!(
                "Make sure '{}' exists and contains a valid release manifest",
                path
            ),
            ReleaseError::ManifestUnwritable { path, .. } => {
                format!("Check write permissions for '{}'", path)
            }
            ReleaseError::VersionControlFailure { .. } => {
                "Inspect the repository state; commits made before the failure are kept"
                    .to_string()
            }
            ReleaseError::InvalidConfigValueError { field, .. }
            | ReleaseError::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' on the command line or in the config file", field)
            }
            ReleaseError::ConfigError { .. } => "Review the releaser configuration".to_string(),
            ReleaseError::IoError(_) | ReleaseError::SerializationError(_) => {
                "Re-run with --verbose for more detail".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Manifest => format!("Release manifest problem: {}", self),
            ErrorCategory::VersionControl => format!("Git operation failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
