use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("File not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Io,
    Encoding,
}

impl NormalizeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Only a missing target is tolerated; everything else aborts the batch.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Missing { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Missing { .. } | Self::Io { .. } => ErrorCategory::Io,
            Self::Decode { .. } => ErrorCategory::Encoding,
            Self::InvalidPattern { .. }
            | Self::TomlError(_)
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 1,
            ErrorCategory::Io | ErrorCategory::Encoding => 2,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "Check the target list and the --dir root",
            Self::Io { .. } => "Check file permissions and free disk space, then re-run",
            Self::Decode { .. } => "Convert the file to UTF-8 or remove it from the target list",
            Self::InvalidPattern { .. } => "Fix the regular expression in the rule definition",
            Self::TomlError(_) => "Make sure the config file is valid TOML",
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Review the configuration values"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Encoding => format!("Unreadable file: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
