//! File output for the sequence dump.

use std::io::{self, Write};

use fibseq_core::SequenceView;

/// Write the cached sequence to a file, one element per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, view: &SequenceView<'_>) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for value in view.iter() {
        writeln!(file, "{value}")?;
    }
    Ok(())
}
