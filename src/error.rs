use std::fmt;
use serde::{Deserialize, Serialize};

/// Error types for the user-agent report pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportError {
    /// Required parameter missing or inconsistent
    ConfigurationError {
        parameter: String,
        error_message: String,
    },
    /// Input log could not be opened or read
    InputIo {
        path: String,
        error_message: String,
    },
    /// Report file could not be created or written
    OutputIo {
        path: String,
        error_message: String,
    },
    /// Classification engine failed to build
    ClassifierInit {
        engine: String,
        error_message: String,
    },
    /// Count column does not fit in a u64
    CountOverflow {
        raw_count: String,
    },
}

impl ReportError {
    pub fn input_io(path: impl fmt::Display, error: impl fmt::Display) -> Self {
        ReportError::InputIo {
            path: path.to_string(),
            error_message: error.to_string(),
        }
    }

    pub fn output_io(path: impl fmt::Display, error: impl fmt::Display) -> Self {
        ReportError::OutputIo {
            path: path.to_string(),
            error_message: error.to_string(),
        }
    }

    /// Short variant name, used as a statistics key
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::ConfigurationError { .. } => "ConfigurationError",
            ReportError::InputIo { .. } => "InputIo",
            ReportError::OutputIo { .. } => "OutputIo",
            ReportError::ClassifierInit { .. } => "ClassifierInit",
            ReportError::CountOverflow { .. } => "CountOverflow",
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::ConfigurationError { parameter, error_message } => {
                write!(f, "Configuration error for '{}': {}", parameter, error_message)
            }
            ReportError::InputIo { path, error_message } => {
                write!(f, "Cannot read log file '{}': {}", path, error_message)
            }
            ReportError::OutputIo { path, error_message } => {
                write!(f, "Cannot write report '{}': {}", path, error_message)
            }
            ReportError::ClassifierInit { engine, error_message } => {
                write!(f, "Failed to initialize {} classifier: {}", engine, error_message)
            }
            ReportError::CountOverflow { raw_count } => {
                write!(f, "Count '{}' does not fit in 64 bits", raw_count)
            }
        }
    }
}

impl std::error::Error for ReportError {}
