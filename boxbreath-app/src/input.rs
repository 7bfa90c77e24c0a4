//! Keyboard commands
//!
//! Commands arrive as lines on stdin; the first non-blank character picks
//! the command.

use std::io::BufRead;

use embassy_futures::block_on;
use tracing::{debug, warn};

use crate::channels::INPUT_CHANNEL;

/// User command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a session from the landing screen
    Start,
    /// Begin the current session again
    Restart,
    /// Abandon the session and go back to the landing screen
    Reset,
    /// Leave the exercise
    Exit,
    /// Quit the application
    Quit,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Option<Self> {
        let key = line.trim().chars().next()?;
        match key.to_ascii_lowercase() {
            's' => Some(Self::Start),
            'r' => Some(Self::Restart),
            'b' => Some(Self::Reset),
            'x' => Some(Self::Exit),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Forward stdin lines to the controller until stdin closes
///
/// Runs on its own thread; stdin has no async reader on this executor.
pub fn read_input<R: BufRead>(reader: R) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stdin read failed: {}", e);
                break;
            }
        };

        match Command::parse(&line) {
            Some(command) => {
                debug!(?command, "input");
                block_on(INPUT_CHANNEL.send(command));
            }
            None if line.trim().is_empty() => {}
            None => debug!(line = line.trim(), "unknown key"),
        }
    }

    // End of input means nobody can press quit any more
    block_on(INPUT_CHANNEL.send(Command::Quit));
}
