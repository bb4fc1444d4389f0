//! Guard failure taxonomy
//!
//! Every failed check produces a [`GuardError`]. The variant tells callers
//! *which kind* of precondition was violated so they can discriminate on it,
//! and each variant carries the offending parameter's name plus a message
//! naming the expected condition.
//!
//! # Examples
//!
//! ```
//! use fluent_guard::{ErrorKind, GuardError};
//!
//! let err = GuardError::range("count", "must be greater than 10");
//!
//! assert_eq!(err.kind(), ErrorKind::Range);
//! assert_eq!(err.parameter(), "count");
//! assert_eq!(err.to_string(), "argument `count` must be greater than 10");
//! ```

use std::fmt;

/// A violated precondition on a named argument.
///
/// Deferred failures are built only when a check's predicate fails, and are
/// surfaced by a terminal call such as
/// [`Linkage::otherwise_throw_exception`](crate::Linkage::otherwise_throw_exception).
/// `Null` is also returned immediately by type checks invoked on a null value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// The argument was null (`None`) where a value is required.
    #[error("argument `{parameter}` {message}")]
    Null {
        /// Name of the offending parameter.
        parameter: String,
        /// The expected condition.
        message: String,
    },
    /// The argument did not (or did) equal a reference value.
    #[error("argument `{parameter}` {message}")]
    Equality {
        /// Name of the offending parameter.
        parameter: String,
        /// The expected condition.
        message: String,
    },
    /// The argument's runtime type did not match.
    #[error("argument `{parameter}` {message}")]
    Type {
        /// Name of the offending parameter.
        parameter: String,
        /// The expected condition.
        message: String,
    },
    /// The argument was out of bounds or on the wrong side of a reference value.
    #[error("argument `{parameter}` {message}")]
    Range {
        /// Name of the offending parameter.
        parameter: String,
        /// The expected condition.
        message: String,
    },
    /// Any other violated condition.
    #[error("argument `{parameter}` {message}")]
    Argument {
        /// Name of the offending parameter.
        parameter: String,
        /// The expected condition.
        message: String,
    },
}

impl GuardError {
    /// Create a [`GuardError::Null`].
    pub fn null(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Null {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a [`GuardError::Equality`].
    pub fn equality(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Equality {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a [`GuardError::Type`].
    pub fn type_mismatch(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Type {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a [`GuardError::Range`].
    pub fn range(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Range {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a [`GuardError::Argument`].
    pub fn argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Argument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// The failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Null { .. } => ErrorKind::Null,
            Self::Equality { .. } => ErrorKind::Equality,
            Self::Type { .. } => ErrorKind::Type,
            Self::Range { .. } => ErrorKind::Range,
            Self::Argument { .. } => ErrorKind::Argument,
        }
    }

    /// Name of the parameter that failed.
    pub fn parameter(&self) -> &str {
        match self {
            Self::Null { parameter, .. }
            | Self::Equality { parameter, .. }
            | Self::Type { parameter, .. }
            | Self::Range { parameter, .. }
            | Self::Argument { parameter, .. } => parameter,
        }
    }

    /// The expected condition, without the parameter prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Null { message, .. }
            | Self::Equality { message, .. }
            | Self::Type { message, .. }
            | Self::Range { message, .. }
            | Self::Argument { message, .. } => message,
        }
    }

    /// Returns true if this is a null failure.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null { .. })
    }
}

/// Field-less discriminant of [`GuardError`], for matching and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// See [`GuardError::Null`].
    Null,
    /// See [`GuardError::Equality`].
    Equality,
    /// See [`GuardError::Type`].
    Type,
    /// See [`GuardError::Range`].
    Range,
    /// See [`GuardError::Argument`].
    Argument,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::Null,
        ErrorKind::Equality,
        ErrorKind::Type,
        ErrorKind::Range,
        ErrorKind::Argument,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Null => "null",
            ErrorKind::Equality => "equality",
            ErrorKind::Type => "type",
            ErrorKind::Range => "range",
            ErrorKind::Argument => "argument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
