//! Error types for the explorer core.
//!
//! Each domain gets its own error so callers can match on what actually
//! went wrong:
//!
//! - [`ValidationError`] - user input rejected (e.g. empty names), shown inline
//! - [`StateError`] - mutation attempted on a node that can't accept it
//! - [`RangeError`] - negative index passed to range selection
//!
//! [`Error`] wraps all three for handlers that can hit more than one.

use thiserror::Error;

/// User-facing validation failures from create/rename.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name was empty after trimming whitespace
    #[error("cannot create an item with an empty name")]
    EmptyName,
    /// A live sibling already uses this name
    #[error("an item named '{0}' already exists")]
    NameUnavailable(String),
}

/// Tree mutations attempted against a node in the wrong state.
///
/// These indicate a caller bug (the UI should have hidden the view) rather
/// than a recoverable user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Directory (or one of its ancestors) has been deleted
    #[error("cannot add to deleted directory '{name}'")]
    Deleted { name: String },
    /// Target of `add` is a file
    #[error("'{name}' is not a directory")]
    NotADirectory { name: String },
    /// Directory would become its own ancestor
    #[error("cannot move '{name}' into itself")]
    WouldCycle { name: String },
    /// The root directory never gets a parent
    #[error("cannot move the root directory '{name}'")]
    RootNotMovable { name: String },
}

/// Invalid bounds passed to range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("start index must be >= 0, got: {0}")]
    NegativeStart(isize),
    #[error("end index must be >= 0, got: {0}")]
    NegativeEnd(isize),
}

/// Any error raised by the explorer core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "cannot create an item with an empty name"
        );
        assert_eq!(
            RangeError::NegativeStart(-1).to_string(),
            "start index must be >= 0, got: -1"
        );
        assert_eq!(
            StateError::Deleted {
                name: "docs".to_string()
            }
            .to_string(),
            "cannot add to deleted directory 'docs'"
        );
    }

    #[test]
    fn test_umbrella_is_transparent() {
        let err: Error = ValidationError::NameUnavailable("notes.txt".into()).into();
        assert_eq!(err.to_string(), "an item named 'notes.txt' already exists");
        assert!(matches!(err, Error::Validation(_)));
    }
}
