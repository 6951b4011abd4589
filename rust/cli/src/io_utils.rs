//! Line input and output-file helpers shared by the commands.

use std::io::BufRead;
use std::path::Path;

/// Reads one line, trimmed. `None` on EOF or a read error.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use holdem_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  y \n");
/// assert_eq!(read_stdin_line(&mut input), Some("y".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Creates the parent directory of `path` when it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}
