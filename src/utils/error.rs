//! Error handling for the mathscribe surfaces.
//!
//! The engine's transforms are total over strings and never fail; this
//! error type exists for the layers around them (CLI file plumbing,
//! option parsing) plus the severity-colored diagnostics those layers
//! print.

use std::fmt;

/// Engine surface error type
#[derive(Debug, Clone)]
pub enum EngineError {
    /// Invalid input outside the space of plain strings (e.g. a bad mode name)
    InvalidInput { message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            EngineError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            EngineError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for surface operations
pub type EngineResult<T> = Result<T, EngineError>;

// Convenience constructors
impl EngineError {
    pub fn invalid(message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        EngineError::InternalError {
            message: message.into(),
        }
    }
}

/// Severity level for CLI diagnostics (determines coloring and behavior).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    /// Critical problems - e.g., unreadable input file
    Error,
    /// Degradations worth surfacing - e.g., dropped formula candidates
    Warning,
    /// Informational - e.g., repairs applied
    Info,
}

/// Diagnostic line for CLI output.
#[derive(Debug, Clone)]
pub struct CliDiagnostic {
    /// Severity level (for coloring)
    pub severity: DiagnosticSeverity,
    /// Diagnostic kind as string (e.g., "unterminated group")
    pub kind: String,
    /// Human-readable message
    pub message: String,
    /// Location context (e.g., the offending snippet)
    pub location: Option<String>,
}

impl CliDiagnostic {
    /// Create a new diagnostic.
    pub fn new(
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind: kind.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add location context.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Get ANSI color code for this diagnostic's severity.
    pub fn color_code(&self) -> &'static str {
        match self.severity {
            DiagnosticSeverity::Error => "\x1b[31m",   // red
            DiagnosticSeverity::Warning => "\x1b[33m", // yellow
            DiagnosticSeverity::Info => "\x1b[36m",    // cyan
        }
    }
}

impl fmt::Display for CliDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref loc) = self.location {
            write!(f, "[{}] {}: {}", self.kind, loc, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}
