//! Terminal-backed [`InputSource`] and [`OutputSink`].
//!
//! Prompts and narration share one writer, so both sides borrow a
//! [`SharedWriter`]. Write failures are kept and surfaced once the session
//! ends, since the engine's sinks cannot fail.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use holdem_engine::io::{InputSource, OutputSink};
use tracing::warn;

use crate::io_utils::read_stdin_line;
use crate::validation::{IntegerError, parse_bounded_integer, parse_choice};

pub struct SharedWriter<'w> {
    inner: RefCell<&'w mut dyn Write>,
    error: RefCell<Option<io::Error>>,
}

impl<'w> SharedWriter<'w> {
    pub fn new(inner: &'w mut dyn Write) -> Self {
        Self {
            inner: RefCell::new(inner),
            error: RefCell::new(None),
        }
    }

    pub fn line(&self, text: &str) {
        let result = writeln!(self.inner.borrow_mut(), "{}", text);
        self.keep(result);
    }

    /// Writes without a newline and flushes, for answers typed on the same line.
    pub fn prompt(&self, text: &str) {
        let mut inner = self.inner.borrow_mut();
        let result = write!(inner, "{}", text).and_then(|_| inner.flush());
        drop(inner);
        self.keep(result);
    }

    fn keep(&self, result: io::Result<()>) {
        if let Err(e) = result {
            let mut slot = self.error.borrow_mut();
            if slot.is_none() {
                *slot = Some(e);
            }
        }
    }

    /// First write error seen, if any.
    pub fn finish(&self) -> io::Result<()> {
        match self.error.borrow_mut().take() {
            Some(e) => Err(e),
            None => self.inner.borrow_mut().flush(),
        }
    }
}

pub struct ConsoleOutput<'s, 'w> {
    writer: &'s SharedWriter<'w>,
}

impl<'s, 'w> ConsoleOutput<'s, 'w> {
    pub fn new(writer: &'s SharedWriter<'w>) -> Self {
        Self { writer }
    }
}

impl OutputSink for ConsoleOutput<'_, '_> {
    fn display(&mut self, text: &str) {
        self.writer.line(text);
    }
}

/// Reads answers line by line, re-prompting until one is valid.
///
/// Once the input is exhausted every choice resolves to its second option
/// (fold, stop playing) and every amount to 0, so a session always ends.
pub struct ConsoleInput<'s, 'w> {
    reader: &'s mut dyn BufRead,
    writer: &'s SharedWriter<'w>,
    exhausted: bool,
}

impl<'s, 'w> ConsoleInput<'s, 'w> {
    pub fn new(reader: &'s mut dyn BufRead, writer: &'s SharedWriter<'w>) -> Self {
        Self {
            reader,
            writer,
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Free-text answer, e.g. the player's name. `None` once input ends.
    pub fn read_text(&mut self) -> Option<String> {
        self.next_line()
    }

    fn next_line(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let line = read_stdin_line(self.reader);
        if line.is_none() {
            warn!("input closed, using default answers");
            self.exhausted = true;
        }
        line
    }
}

impl InputSource for ConsoleInput<'_, '_> {
    fn prompt_choice(&mut self, option_a: &str, option_b: &str) -> String {
        loop {
            let Some(line) = self.next_line() else {
                return option_b.to_string();
            };
            if let Some(picked) = parse_choice(&line, option_a, option_b) {
                return picked.to_string();
            }
            self.writer.prompt(&format!(
                "You didn't pick {} or {}! Please try again: ",
                option_a, option_b
            ));
        }
    }

    fn prompt_integer(&mut self, max_inclusive: u32) -> u32 {
        loop {
            let Some(line) = self.next_line() else {
                return 0;
            };
            match parse_bounded_integer(&line, max_inclusive) {
                Ok(v) => return v,
                Err(IntegerError::NotANumber) => {
                    self.writer.prompt("Please type a whole number: ");
                }
                Err(IntegerError::TooLarge) => {
                    self.writer.prompt(&format!(
                        "Please type a number less than or equal to {}: ",
                        max_inclusive
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn choice_retries_until_valid() {
        let mut out = Vec::new();
        let writer = SharedWriter::new(&mut out);
        let mut reader = Cursor::new("maybe\nx\nc\n");
        let mut input = ConsoleInput::new(&mut reader, &writer);
        assert_eq!(input.prompt_choice("C", "F"), "C");
        writer.finish().unwrap();
        drop(input);
        drop(writer);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("You didn't pick C or F!").count(), 2);
    }

    #[test]
    fn integer_retries_on_garbage_and_overflow() {
        let mut out = Vec::new();
        let writer = SharedWriter::new(&mut out);
        let mut reader = Cursor::new("lots\n50\n7\n");
        let mut input = ConsoleInput::new(&mut reader, &writer);
        assert_eq!(input.prompt_integer(10), 7);
        drop(input);
        drop(writer);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Please type a whole number"));
        assert!(text.contains("less than or equal to 10"));
    }

    #[test]
    fn exhausted_input_falls_back_to_the_second_option() {
        let mut out = Vec::new();
        let writer = SharedWriter::new(&mut out);
        let mut reader = Cursor::new("");
        let mut input = ConsoleInput::new(&mut reader, &writer);
        assert_eq!(input.prompt_choice("Y", "N"), "N");
        assert_eq!(input.prompt_integer(40), 0);
        assert_eq!(input.read_text(), None);
        assert!(input.is_exhausted());
    }

    #[test]
    fn output_lines_end_with_newlines() {
        let mut out = Vec::new();
        {
            let writer = SharedWriter::new(&mut out);
            let mut sink = ConsoleOutput::new(&writer);
            sink.display("Dealing cards...");
            writer.prompt("Name: ");
            writer.finish().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Dealing cards...\nName: ");
    }
}
