use std::fmt;

use super::history::{DEFAULT_HISTORY_CAPACITY, SnapshotHistory};
use super::{Cursor, CursorMovement};
use crate::error::{EditError, Result};

/// Read-only copy of the buffer state handed to whoever displays it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferView {
    pub content: String,
    pub cursor: usize,
}

impl fmt::Display for BufferView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current text: {}", self.content)?;
        write!(f, "Cursor position: {}", self.cursor)
    }
}

/// Single-line text buffer with a cursor and snapshot-based undo/redo
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Current text
    content: String,
    /// Insertion/deletion point, always within `0..=char_count`
    cursor: Cursor,
    /// Cached char count of `content`
    char_count: usize,
    /// Post-edit content snapshots
    history: SnapshotHistory,
}

impl TextBuffer {
    /// Create an empty buffer with the default history depth
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty buffer keeping at most `capacity` undo snapshots
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            content: String::new(),
            cursor: Cursor::new(),
            char_count: 0,
            history: SnapshotHistory::with_capacity(capacity),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current cursor offset in chars
    pub fn current_position(&self) -> usize {
        self.cursor.position
    }

    /// Length of the content in chars
    pub fn len(&self) -> usize {
        self.char_count
    }

    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn view(&self) -> BufferView {
        BufferView {
            content: self.content.clone(),
            cursor: self.cursor.position,
        }
    }

    /// Convert a char position to a byte offset into `content`
    fn char_to_byte_idx(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor and advance past it
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_idx(self.cursor.position);
        self.content.insert(byte_idx, c);
        self.char_count += 1;
        self.cursor.position += 1;
        self.history.record(self.content.clone());
        log::debug!("insert {:?} -> cursor {}", c, self.cursor.position);
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char(&mut self) -> Result<()> {
        if self.cursor.position == 0 {
            return Err(EditError::NothingToDelete);
        }
        self.cursor.position -= 1;
        let byte_idx = self.char_to_byte_idx(self.cursor.position);
        self.content.remove(byte_idx);
        self.char_count -= 1;
        self.history.record(self.content.clone());
        log::debug!("delete -> cursor {}", self.cursor.position);
        Ok(())
    }

    /// Move the cursor without touching history
    pub fn move_cursor(&mut self, movement: CursorMovement) -> Result<()> {
        let cursor = movement
            .apply(self.cursor, self.char_count)
            .ok_or(match movement {
                CursorMovement::Previous => EditError::AtStart,
                _ => EditError::AtEnd,
            })?;
        self.cursor = cursor;
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        self.move_cursor(CursorMovement::Next)
    }

    pub fn previous(&mut self) -> Result<()> {
        self.move_cursor(CursorMovement::Previous)
    }

    pub fn start(&mut self) {
        self.cursor = Cursor::new();
    }

    pub fn end(&mut self) {
        self.cursor = Cursor::at(self.char_count);
    }

    /// Restore the previous snapshot; the cursor snaps to the end of the text
    pub fn undo(&mut self) -> Result<()> {
        let content = self.history.undo().ok_or(EditError::NothingToUndo)?;
        self.replace_content(content);
        log::debug!("undo -> {} snapshot(s) left", self.history.undo_len());
        Ok(())
    }

    /// Re-apply the last undone snapshot; the cursor snaps to the end of the text
    pub fn redo(&mut self) -> Result<()> {
        let content = self.history.redo().ok_or(EditError::NothingToRedo)?;
        self.replace_content(content);
        log::debug!("redo -> {} snapshot(s) left", self.history.redo_len());
        Ok(())
    }

    fn replace_content(&mut self, content: String) {
        self.char_count = content.chars().count();
        self.content = content;
        self.cursor = Cursor::at(self.char_count);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
