use crate::document::BufferView;

/// Operations the editor accepts from its front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(char),
    Delete,
    Next,
    Previous,
    Start,
    End,
    CurrentPosition,
    Undo,
    Redo,
}

/// Result of a successfully executed [`Command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Buffer state to display after an edit or movement
    State(BufferView),
    /// Answer to [`Command::CurrentPosition`]
    Position(usize),
}
