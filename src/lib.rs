pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod shell;

pub use config::Config;
pub use document::TextBuffer;
pub use editor::{Command, Editor, Outcome};
pub use error::{EditError, ErrorKind};
pub use shell::Shell;
