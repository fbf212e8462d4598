use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of an [`EditError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A deletion or movement would cross a buffer boundary
    InvalidCursor,
    /// The requested history stack is empty
    NoHistory,
}

/// Recoverable failure of a buffer operation
///
/// A failed operation never leaves the buffer partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EditError {
    #[error("Cannot delete character. Invalid cursor position.")]
    #[diagnostic(code(stack_edit::invalid_cursor))]
    NothingToDelete,

    #[error("Cannot move cursor to next position. Already at the end of the text.")]
    #[diagnostic(code(stack_edit::invalid_cursor))]
    AtEnd,

    #[error("Cannot move cursor to previous position. Already at the beginning of the text.")]
    #[diagnostic(code(stack_edit::invalid_cursor))]
    AtStart,

    #[error("Cannot undo. No more undo operations available.")]
    #[diagnostic(code(stack_edit::no_history))]
    NothingToUndo,

    #[error("Cannot redo. No more redo operations available.")]
    #[diagnostic(code(stack_edit::no_history))]
    NothingToRedo,
}

impl EditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::NothingToDelete | EditError::AtEnd | EditError::AtStart => {
                ErrorKind::InvalidCursor
            }
            EditError::NothingToUndo | EditError::NothingToRedo => ErrorKind::NoHistory,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(EditError::NothingToDelete.kind(), ErrorKind::InvalidCursor);
        assert_eq!(EditError::AtEnd.kind(), ErrorKind::InvalidCursor);
        assert_eq!(EditError::AtStart.kind(), ErrorKind::InvalidCursor);
        assert_eq!(EditError::NothingToUndo.kind(), ErrorKind::NoHistory);
        assert_eq!(EditError::NothingToRedo.kind(), ErrorKind::NoHistory);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EditError::NothingToUndo.to_string(),
            "Cannot undo. No more undo operations available."
        );
        assert_eq!(
            EditError::AtEnd.to_string(),
            "Cannot move cursor to next position. Already at the end of the text."
        );
    }
}
