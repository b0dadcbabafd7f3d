// Dyad error handling
// Central error type for the surfaces around the Either core: value extraction,
// law checking and configuration. The Either operations themselves are total.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use thiserror;

/// Error domains representing the components that can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorDomain {
    Core,
    Laws,
    Config,
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDomain::Core => write!(f, "core"),
            ErrorDomain::Laws => write!(f, "laws"),
            ErrorDomain::Config => write!(f, "config"),
        }
    }
}

/// Error code structure for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Error codes, grouped by domain
pub mod codes {
    use crate::ErrorCode;

    // Core error codes start with 1000
    pub const EXPECTED_LEFT: ErrorCode = ErrorCode(1001);
    pub const EXPECTED_RIGHT: ErrorCode = ErrorCode(1002);

    // Law error codes start with 2000
    pub const LAW_VIOLATION: ErrorCode = ErrorCode(2001);

    // Config error codes start with 3000
    pub const INVALID_CONFIG: ErrorCode = ErrorCode(3001);
}

/// Standard error message format for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: ErrorCode,
    pub domain: ErrorDomain,
    pub message: String,
}

/// Errors raised around the Either core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DyadError {
    /// A Left was required but the value was a Right
    #[error("Expected a Left value, found a Right")]
    ExpectedLeft,

    /// A Right was required but the value was a Left
    #[error("Expected a Right value, found a Left")]
    ExpectedRight,

    /// An algebraic law did not hold for the checked inputs
    #[error("Law violated: {law}: {details}")]
    LawViolation { law: String, details: String },

    /// Configuration could not be read or parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DyadError {
    /// Create a law violation for the named law
    pub fn law_violation(law: impl Into<String>, details: impl Into<String>) -> Self {
        DyadError::LawViolation {
            law: law.into(),
            details: details.into(),
        }
    }

    /// The numeric code of this error
    pub fn code(&self) -> ErrorCode {
        use codes::*;
        match self {
            DyadError::ExpectedLeft => EXPECTED_LEFT,
            DyadError::ExpectedRight => EXPECTED_RIGHT,
            DyadError::LawViolation { .. } => LAW_VIOLATION,
            DyadError::Config(_) => INVALID_CONFIG,
        }
    }

    /// The domain this error belongs to
    pub fn domain(&self) -> ErrorDomain {
        match self {
            DyadError::ExpectedLeft | DyadError::ExpectedRight => ErrorDomain::Core,
            DyadError::LawViolation { .. } => ErrorDomain::Laws,
            DyadError::Config(_) => ErrorDomain::Config,
        }
    }

    /// Convert to the serializable message format
    pub fn to_message(&self) -> ErrorMessage {
        ErrorMessage {
            code: self.code(),
            domain: self.domain(),
            message: self.to_string(),
        }
    }
}

/// Standard Result type for dyad
pub type Result<T> = std::result::Result<T, DyadError>;
