pub mod command;

pub use command::{Command, Outcome};

use crate::document::{CursorMovement, TextBuffer};
use crate::error::Result;

/// Owns the buffer and dispatches [`Command`]s to it
#[derive(Debug, Default)]
pub struct Editor {
    buffer: TextBuffer,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            buffer: TextBuffer::with_history_capacity(capacity),
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Run a command against the buffer
    ///
    /// On error the buffer is left exactly as it was.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        log::trace!("execute {:?}", command);
        let buffer = &mut self.buffer;
        match command {
            Command::Insert(c) => buffer.insert_char(c),
            Command::Delete => buffer.delete_char()?,
            Command::Next => buffer.move_cursor(CursorMovement::Next)?,
            Command::Previous => buffer.move_cursor(CursorMovement::Previous)?,
            Command::Start => buffer.start(),
            Command::End => buffer.end(),
            Command::CurrentPosition => return Ok(Outcome::Position(buffer.current_position())),
            Command::Undo => buffer.undo()?,
            Command::Redo => buffer.redo()?,
        }
        Ok(Outcome::State(buffer.view()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BufferView;
    use crate::error::{EditError, ErrorKind};

    fn state(content: &str, cursor: usize) -> Outcome {
        Outcome::State(BufferView {
            content: content.to_string(),
            cursor,
        })
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut editor = Editor::new();

        editor.execute(Command::Insert('h')).unwrap();
        assert_eq!(editor.execute(Command::Insert('i')), Ok(state("hi", 2)));
        assert_eq!(editor.execute(Command::Previous), Ok(state("hi", 1)));
        assert_eq!(editor.execute(Command::Delete), Ok(state("i", 0)));
        assert_eq!(editor.execute(Command::Undo), Ok(state("hi", 2)));
        assert_eq!(
            editor.execute(Command::CurrentPosition),
            Ok(Outcome::Position(2))
        );
    }

    #[test]
    fn test_errors_leave_state_untouched() {
        let mut editor = Editor::new();

        assert_eq!(
            editor.execute(Command::Delete).unwrap_err().kind(),
            ErrorKind::InvalidCursor
        );
        assert_eq!(editor.execute(Command::Undo), Err(EditError::NothingToUndo));
        assert_eq!(editor.execute(Command::Redo), Err(EditError::NothingToRedo));
        assert_eq!(editor.buffer().view(), BufferView {
            content: String::new(),
            cursor: 0,
        });
    }

    #[test]
    fn test_start_end_commands() {
        let mut editor = Editor::new();
        for c in "abc".chars() {
            editor.execute(Command::Insert(c)).unwrap();
        }

        assert_eq!(editor.execute(Command::Start), Ok(state("abc", 0)));
        assert_eq!(editor.execute(Command::Next), Ok(state("abc", 1)));
        assert_eq!(editor.execute(Command::End), Ok(state("abc", 3)));
    }

    #[test]
    fn test_history_capacity_is_configurable() {
        let mut editor = Editor::with_history_capacity(2);
        for c in "abcd".chars() {
            editor.execute(Command::Insert(c)).unwrap();
        }

        assert!(editor.execute(Command::Undo).is_ok());
        assert!(editor.execute(Command::Undo).is_ok());
        assert_eq!(editor.execute(Command::Undo), Err(EditError::NothingToUndo));
    }
}
