//! Exception values that may travel through a response or rejection.

use std::fmt;

/// Classification of a fault by its runtime kind.
///
/// The first six variants form the closed "native" set: faults that signal a
/// defect in calling code or parsing logic rather than a remote failure.
/// `Generic` covers everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Evaluation of dynamically supplied code failed
    Eval,
    /// A numeric value fell outside its allowed range
    Range,
    /// A name or binding could not be resolved
    Reference,
    /// Input could not be parsed
    Syntax,
    /// A value had the wrong type or shape
    Type,
    /// A URI could not be encoded or decoded
    Uri,
    /// Any other runtime exception
    Generic,
}

impl FaultKind {
    /// All kinds in the native set.
    pub const NATIVE: [FaultKind; 6] = [
        FaultKind::Eval,
        FaultKind::Range,
        FaultKind::Reference,
        FaultKind::Syntax,
        FaultKind::Type,
        FaultKind::Uri,
    ];

    /// Returns `true` for programming-bug class kinds.
    #[inline]
    pub fn is_native(&self) -> bool {
        !matches!(self, Self::Generic)
    }

    /// Conventional error name for this kind (e.g. `"TypeError"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Eval => "EvalError",
            Self::Range => "RangeError",
            Self::Reference => "ReferenceError",
            Self::Syntax => "SyntaxError",
            Self::Type => "TypeError",
            Self::Uri => "URIError",
            Self::Generic => "Error",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A runtime exception carried as a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Fault {
    pub kind: FaultKind,
    pub message: String,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Type, message)
    }

    pub fn range_error(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Range, message)
    }

    pub fn syntax_error(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Syntax, message)
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Generic, message)
    }

    #[inline]
    pub fn is_native(&self) -> bool {
        self.kind.is_native()
    }
}

impl From<serde_json::Error> for Fault {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        let kind = match err.classify() {
            Category::Syntax | Category::Eof => FaultKind::Syntax,
            Category::Data => FaultKind::Type,
            Category::Io => FaultKind::Generic,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<url::ParseError> for Fault {
    fn from(err: url::ParseError) -> Self {
        Self::new(FaultKind::Uri, err.to_string())
    }
}

impl From<std::num::TryFromIntError> for Fault {
    fn from(err: std::num::TryFromIntError) -> Self {
        Self::new(FaultKind::Range, err.to_string())
    }
}

impl From<std::num::ParseIntError> for Fault {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::new(FaultKind::Range, err.to_string())
    }
}
