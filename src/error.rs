use crate::types::Fault;
use thiserror::Error;

/// Structured error context for configuration and payload errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field or configuration key that caused the error (e.g., "default_error_status")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected range, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "config", "payload")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that escape a wrapped call.
///
/// HTTP failures never show up here; they are captured in the error slot of
/// [`crate::SafeAwaitResult`]. Only programming-bug class faults and misuse of
/// the crate's own API do.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Native fault: {0}")]
    Native(Fault),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// The propagated fault, if this is a native fault.
    pub fn native_fault(&self) -> Option<&Fault> {
        match self {
            Error::Native(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Error::Native(_))
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display_with_context() {
        let err = Error::configuration_with_context(
            "status out of range",
            ErrorContext::new()
                .with_field_path("default_error_status")
                .with_source("config"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: status out of range (field: default_error_status, source: config)"
        );
        assert_eq!(err.context().unwrap().source.as_deref(), Some("config"));
    }

    #[test]
    fn test_native_accessors() {
        let err = Error::Native(Fault::type_error("oops"));
        assert!(err.is_native());
        assert_eq!(err.native_fault().unwrap().message, "oops");
        assert_eq!(err.to_string(), "Native fault: TypeError: oops");
    }
}
