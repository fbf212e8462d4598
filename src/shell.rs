use std::collections::VecDeque;
use std::io::{BufRead, Write};

use miette::Result;

use crate::config::EditorConfig;
use crate::editor::{Command, Editor, Outcome};

const MENU: &[&str] = &[
    "1. Insert a character",
    "2. Delete a character",
    "3. Next",
    "4. Previous",
    "5. Start",
    "6. End",
    "7. Current position",
    "8. Undo",
    "9. Redo",
    "0. Exit",
];

/// What a single menu key asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    /// Read one more character and insert it
    Insert,
    Run(Command),
    Exit,
}

impl MenuChoice {
    fn from_key(key: char) -> Option<Self> {
        let choice = match key {
            '1' => MenuChoice::Insert,
            '2' => MenuChoice::Run(Command::Delete),
            '3' => MenuChoice::Run(Command::Next),
            '4' => MenuChoice::Run(Command::Previous),
            '5' => MenuChoice::Run(Command::Start),
            '6' => MenuChoice::Run(Command::End),
            '7' => MenuChoice::Run(Command::CurrentPosition),
            '8' => MenuChoice::Run(Command::Undo),
            '9' => MenuChoice::Run(Command::Redo),
            '0' => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Yields the non-whitespace characters of a line-oriented reader
struct CharTokens<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> CharTokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next non-whitespace character, or `None` at end of input
    fn next_char(&mut self) -> Result<Option<char>> {
        loop {
            if let Some(c) = self.pending.pop_front() {
                return Ok(Some(c));
            }

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| miette::miette!("Failed to read input: {}", e))?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }
}

/// Interactive numbered-menu front end over an [`Editor`]
pub struct Shell {
    editor: Editor,
    show_menu: bool,
}

impl Shell {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            editor: Editor::with_history_capacity(config.history_capacity),
            show_menu: config.show_menu,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Run the menu loop until `0` is chosen or input runs out
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let mut tokens = CharTokens::new(input);

        loop {
            if self.show_menu {
                for item in MENU {
                    writeln!(output, "{}", item).map_err(write_error)?;
                }
            }
            write!(output, "Enter your choice: ").map_err(write_error)?;
            output.flush().map_err(write_error)?;

            let Some(key) = tokens.next_char()? else {
                log::debug!("input closed, leaving menu loop");
                writeln!(output).map_err(write_error)?;
                return Ok(());
            };

            let command = match MenuChoice::from_key(key) {
                Some(MenuChoice::Exit) => return Ok(()),
                Some(MenuChoice::Run(command)) => command,
                Some(MenuChoice::Insert) => {
                    write!(output, "Enter a character: ").map_err(write_error)?;
                    output.flush().map_err(write_error)?;
                    match tokens.next_char()? {
                        Some(c) => Command::Insert(c),
                        None => {
                            writeln!(output).map_err(write_error)?;
                            return Ok(());
                        }
                    }
                }
                None => {
                    log::debug!("unknown menu key {:?}", key);
                    writeln!(output, "Invalid choice. Please try again.").map_err(write_error)?;
                    continue;
                }
            };

            let written = match self.editor.execute(command) {
                Ok(Outcome::State(view)) => writeln!(output, "{}", view),
                Ok(Outcome::Position(position)) => {
                    writeln!(output, "Current position: {}", position)
                }
                Err(e) => {
                    log::debug!("{:?} failed: {:?}", command, e.kind());
                    writeln!(output, "Error: {}", e)
                }
            };
            written.map_err(write_error)?;
        }
    }
}

fn write_error(e: std::io::Error) -> miette::Report {
    miette::miette!("Failed to write output: {}", e)
}
