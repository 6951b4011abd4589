//! Collaborator seams between the round engine and the outside world.
//!
//! The engine never touches stdin/stdout. A human seat's decisions arrive via
//! [`InputSource`], and narration leaves via [`OutputSink`].

/// Blocking source of human decisions. Implementations retry until they
/// obtain a valid answer; the engine never sees malformed input.
pub trait InputSource {
    /// Returns whichever of `option_a` / `option_b` the user picked
    /// (compared case-insensitively, returned as given here).
    fn prompt_choice(&mut self, option_a: &str, option_b: &str) -> String;
    /// Returns a whole number in `0..=max_inclusive`.
    fn prompt_integer(&mut self, max_inclusive: u32) -> u32;
}

/// Fire-and-forget narration.
pub trait OutputSink {
    fn display(&mut self, text: &str);
}

/// Sink that drops everything, for AI-only tables and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutput;

impl OutputSink for NullOutput {
    fn display(&mut self, _text: &str) {}
}

/// Sink that keeps every line, handy for asserting on narration.
#[derive(Debug, Default, Clone)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

impl RecordingOutput {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl OutputSink for RecordingOutput {
    fn display(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// Input for tables without a human seat. Always declines to raise and
/// always picks the first option.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHumanInput;

impl InputSource for NoHumanInput {
    fn prompt_choice(&mut self, option_a: &str, _option_b: &str) -> String {
        option_a.to_string()
    }

    fn prompt_integer(&mut self, _max_inclusive: u32) -> u32 {
        0
    }
}
