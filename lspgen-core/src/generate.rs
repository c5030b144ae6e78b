//! The classify-and-emit loop.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{Classification, Error, PackageSpec, Result, Tally, classify};

/// Mapping file read when no other input is given.
pub const DEFAULT_INPUT: &str = "gen.txt";

/// Directory the Lua specs are written to when no other is given.
pub const DEFAULT_OUTPUT_DIR: &str = "lua/nixrun/lsp";

/// Open the mapping file for line-by-line reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| Error::input(path, e))?;
    Ok(BufReader::new(file))
}

/// Classify every line of `input` in order and count it.
///
/// Lines end at `\n` with one trailing `\r` dropped, including on a last
/// line without a newline. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD so the line is still classified; only I/O failures are errors.
///
/// Each qualifying line is handed to `on_single` before the next line is
/// read. The first error, from reading or from `on_single`, stops the scan.
/// `source` only labels read errors.
pub fn scan<R, F>(input: R, source: &Path, mut on_single: F) -> Result<Tally>
where
    R: BufRead,
    F: FnMut(PackageSpec<'_>) -> Result<()>,
{
    let mut tally = Tally::new();

    for (index, line) in input.split(b'\n').enumerate() {
        let mut line = line.map_err(|e| Error::input(source, e))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let line = String::from_utf8_lossy(&line);
        let classification = classify(&line);
        debug!(line = index + 1, bucket = classification.bucket(), "classified");

        tally.record(&classification);
        if let Classification::Single {
            identifier,
            package,
        } = classification
        {
            on_single(PackageSpec::new(identifier, package))?;
        }
    }

    Ok(tally)
}
