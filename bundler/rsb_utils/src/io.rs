//! IO helpers for reading source files and writing bundles
//!
//! Output paths follow the usual convention where `-` denotes standard output.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Reads a text file and splits it into lines
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Every line has its trailing
/// whitespace removed. A line ending at the very end of the file does not
/// produce an extra empty line.
///
/// # Errors
///
/// If the file cannot be opened or is not valid UTF-8, the underlying
/// [`io::Error`] is returned.
pub fn read_lines(path: &Path) -> Result<Vec<String>, io::Error> {
    let content = fs::read_to_string(path)?.replace("\r\n", "\n").replace('\r', "\n");

    Ok(content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect())
}

/// Opens the output file and returns a writer
///
/// If the path is "-", it writes to standard output.
/// If the path is a regular file, it opens (or creates) the file for writing,
/// truncating it if it already exists.
///
/// # Errors
///
/// If the file cannot be opened or created, an error is returned.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>, io::Error> {
    Ok(if path.as_os_str() == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?,
        )
    })
}
