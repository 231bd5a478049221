// src/report.rs
// =============================================================================
// Writes the activity lines to the terminal.
//
// Activity lines go to stdout, one per line, not through the logger at info
// level. That keeps them pipeable and free of "INFO:" prefixes. Errors never
// pass through here; they are logged to stderr by main.
// =============================================================================

use std::io::{self, Write};

// Prints each line followed by a newline, in the order given
//
// Generic over Write so tests can print into a Vec<u8>
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
