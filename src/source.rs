// src/source.rs
// INPUT SOURCES
// Reads sequence text from disk for the load cycle. The core never touches files;
// this is the only module that does.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TriplexError};

/// Line iterator over sequence text.
///
/// - Lines are split on raw bytes and decoded lossily, so stray non-UTF-8 bytes
///   become U+FFFD (later dropped by `clean`) instead of failing the read.
/// - Skips blank lines.
/// - With `skip_headers`, also drops FASTA header (`>`) and comment (`;`) lines,
///   so letters inside a header are never counted as bases.
pub struct SequenceLines<R> {
    lines: io::Split<R>,
    skip_headers: bool,
}

impl<R: BufRead> SequenceLines<R> {
    pub fn new(reader: R, skip_headers: bool) -> Self {
        Self { lines: reader.split(b'\n'), skip_headers }
    }
}

impl<R: BufRead> Iterator for SequenceLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw_line = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(e)),
            };

            let decoded = String::from_utf8_lossy(&raw_line);
            let line = decoded.trim();
            if line.is_empty() { continue; }
            if self.skip_headers && (line.starts_with('>') || line.starts_with(';')) {
                continue;
            }
            return Some(Ok(line.to_string()));
        }
    }
}

/// Collects every kept line into one newline-separated string.
pub fn read_text<R: BufRead>(reader: R, skip_headers: bool) -> io::Result<String> {
    let mut text = String::new();
    for line in SequenceLines::new(reader, skip_headers) {
        text.push_str(&line?);
        text.push('\n');
    }
    Ok(text)
}

fn is_zstd(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("zst"))
}

/// Reads a plain or `.zst` compressed text file.
pub fn read_source(path: &Path, fasta: bool) -> Result<String> {
    let io_err = |source: io::Error| TriplexError::Io { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(io_err)?;
    let reader: Box<dyn BufRead> = if is_zstd(path) {
        Box::new(BufReader::new(zstd::stream::read::Decoder::new(file).map_err(io_err)?))
    } else {
        Box::new(BufReader::new(file))
    };

    read_text(reader, fasta).map_err(io_err)
}
