//! Menu error types.

use std::io;

/// Failure that ends the menu loop.
///
/// Everything the user can fix by typing again is reported in the menu and
/// never surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

/// Failure while reading one answer from the terminal.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The line could not be decoded; the rest of the input is still usable.
    #[error("line is not valid UTF-8")]
    NotUtf8,
    /// Reading from or writing to the terminal failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
