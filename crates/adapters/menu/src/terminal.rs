//! Line-oriented terminal over a reader/writer pair.

use std::io::{self, BufRead, Write};

use crate::error::InputError;

/// Prompts for lines on `output` and reads answers from `input`.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one answer.
    ///
    /// Returns `None` once the input is exhausted. The line terminator is
    /// stripped; other whitespace is kept.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotUtf8`] when the line cannot be decoded; the
    /// whole line is consumed so the next prompt reads fresh input.
    /// Propagates I/O failures of either side as [`InputError::Io`].
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>, InputError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        while matches!(buf.last(), Some(b'\r' | b'\n')) {
            buf.pop();
        }
        String::from_utf8(buf)
            .map(Some)
            .map_err(|_| InputError::NotUtf8)
    }

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures of the output.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_line_terminators_only() {
        let mut output = Vec::new();
        let mut terminal = Terminal::new(" Corolla \r\nnext\n".as_bytes(), &mut output);

        assert_eq!(
            terminal.prompt("Model: ").unwrap().as_deref(),
            Some(" Corolla ")
        );
        assert_eq!(terminal.prompt("Next: ").unwrap().as_deref(), Some("next"));
        assert_eq!(String::from_utf8(output).unwrap(), "Model: Next: ");
    }

    #[test]
    fn should_return_none_at_end_of_input() {
        let mut output = Vec::new();
        let mut terminal = Terminal::new("".as_bytes(), &mut output);
        assert_eq!(terminal.prompt("Choice: ").unwrap(), None);
    }

    #[test]
    fn should_keep_last_line_without_terminator() {
        let mut output = Vec::new();
        let mut terminal = Terminal::new("5".as_bytes(), &mut output);
        assert_eq!(terminal.prompt("Choice: ").unwrap().as_deref(), Some("5"));
    }

    #[test]
    fn should_reject_undecodable_line_and_keep_reading() {
        let mut output = Vec::new();
        let mut terminal = Terminal::new(&b"\xff\xfe\nAlice\n"[..], &mut output);

        assert!(matches!(
            terminal.prompt("Model: "),
            Err(InputError::NotUtf8)
        ));
        assert_eq!(
            terminal.prompt("Owner: ").unwrap().as_deref(),
            Some("Alice")
        );
    }

    #[test]
    fn should_write_messages_on_their_own_line() {
        let mut output = Vec::new();
        let mut terminal = Terminal::new("".as_bytes(), &mut output);
        terminal.say("Exiting...").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Exiting...\n");
    }
}
