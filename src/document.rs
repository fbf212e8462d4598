pub mod buffer;
pub mod cursor;
pub mod history;

pub use buffer::{BufferView, TextBuffer};
pub use cursor::{Cursor, CursorMovement};
pub use history::{BoundedStack, DEFAULT_HISTORY_CAPACITY, SnapshotHistory};
