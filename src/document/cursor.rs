/// Cursor position in the buffer, counted in chars (0-indexed)
///
/// A cursor sits between characters: `0` is before the first one and
/// `len` is after the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub position: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { position: 0 }
    }

    pub fn at(position: usize) -> Self {
        Self { position }
    }
}

/// Cursor movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMovement {
    /// One character towards the end
    Next,
    /// One character towards the start
    Previous,
    /// Before the first character
    Start,
    /// After the last character
    End,
}

impl CursorMovement {
    /// Resolve the movement against a buffer of `len` chars
    ///
    /// Returns `None` when the movement would cross a buffer boundary.
    pub fn apply(self, cursor: Cursor, len: usize) -> Option<Cursor> {
        match self {
            CursorMovement::Next if cursor.position < len => Some(Cursor::at(cursor.position + 1)),
            CursorMovement::Next => None,
            CursorMovement::Previous => cursor.position.checked_sub(1).map(Cursor::at),
            CursorMovement::Start => Some(Cursor::new()),
            CursorMovement::End => Some(Cursor::at(len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_within_bounds() {
        assert_eq!(
            CursorMovement::Next.apply(Cursor::at(1), 3),
            Some(Cursor::at(2))
        );
    }

    #[test]
    fn test_next_at_end() {
        assert_eq!(CursorMovement::Next.apply(Cursor::at(3), 3), None);
        assert_eq!(CursorMovement::Next.apply(Cursor::new(), 0), None);
    }

    #[test]
    fn test_previous_at_start() {
        assert_eq!(CursorMovement::Previous.apply(Cursor::new(), 3), None);
        assert_eq!(
            CursorMovement::Previous.apply(Cursor::at(3), 3),
            Some(Cursor::at(2))
        );
    }

    #[test]
    fn test_start_and_end_never_fail() {
        assert_eq!(
            CursorMovement::Start.apply(Cursor::at(2), 4),
            Some(Cursor::new())
        );
        assert_eq!(
            CursorMovement::End.apply(Cursor::at(2), 4),
            Some(Cursor::at(4))
        );
        assert_eq!(
            CursorMovement::End.apply(Cursor::new(), 0),
            Some(Cursor::new())
        );
    }
}
