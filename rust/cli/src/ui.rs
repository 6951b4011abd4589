//! Helpers for messages written to the error stream.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_prefixed() {
        let mut err = Vec::new();
        write_error(&mut err, "decks must be >=1").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: decks must be >=1\n");
    }
}
