//! Failure taxonomy shared by the dispatcher and command hooks.
//!
//! The taxonomy distinguishes caller mistakes (bad command-line input) from
//! command failures, so an embedding application can print usage errors and
//! exit non-zero while treating everything else as a defect. Dispatch
//! decisions pattern-match on the variant rather than on error types.

use thiserror::Error;

/// Failure raised by a command or by the dispatcher on its behalf.
///
/// # Examples
///
/// ```
/// use command_kit_core::CommandError;
///
/// let err = CommandError::usage("missing command argument");
/// assert!(err.is_usage());
/// assert_eq!(err.to_string(), "missing command argument");
///
/// let err = CommandError::failed("backend unavailable");
/// assert!(!err.is_usage());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command cannot complete. Not attributable to caller input.
    #[error("{0}")]
    Failed(String),
    /// The caller supplied invalid command-line input.
    #[error("{0}")]
    Usage(String),
    /// More positional arguments were given than the command consumed.
    /// The message is generated from the offending token.
    #[error("unexpected extra argument \"{0}\"")]
    UnexpectedArg(String),
}

impl CommandError {
    /// Creates a generic command failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Creates a usage failure attributable to caller input.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Creates an unexpected-argument failure citing the leftover token.
    pub fn unexpected_arg(token: impl Into<String>) -> Self {
        Self::UnexpectedArg(token.into())
    }

    /// Whether this failure is attributable to caller input.
    ///
    /// Covers both [`Usage`](CommandError::Usage) and
    /// [`UnexpectedArg`](CommandError::UnexpectedArg).
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::UnexpectedArg(_))
    }
}
