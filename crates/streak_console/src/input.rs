//! Line-based numeric input from stdin.

use std::io::{self, BufRead, Write};

/// Prompts for and reads one line from stdin.
///
/// Returns the parsed coordinate, or `None` when the line is not a
/// non-negative integer - the caller re-prompts rather than failing.
///
/// # Errors
///
/// Returns an I/O error when stdin is closed or unreadable, so the
/// game loop terminates instead of re-prompting forever.
pub fn read_index(prompt: &str) -> io::Result<Option<usize>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed while waiting for a coordinate",
        ));
    }

    Ok(line.trim().parse::<usize>().ok())
}
