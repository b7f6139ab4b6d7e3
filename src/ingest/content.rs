//! Content handles and read cursors
//!
//! A unit's bytes are buffered once and shared; every consumer gets its own
//! [`ContentReader`] starting at byte 0, so one reader running to the end can
//! never starve the next consumer.
//!
//! Content is treated as one byte per character. Literal query text is
//! encoded with non-ASCII characters replaced by `?`; file bytes are kept as
//! they are and each byte decodes to one `char`.

use std::io::{BufRead, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Replacement byte for characters outside the single-byte range
const REPLACEMENT_BYTE: u8 = b'?';

/// Where a unit's content came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Read from a file on disk
    File(PathBuf),
    /// The unit's own text, taken as a query
    Literal,
}

/// Owned, in-memory content of one unit
///
/// Released through [`ContentHandle::close`], which consumes the handle, so
/// a handle cannot be released twice.
#[derive(Debug)]
pub struct ContentHandle {
    unit_id: String,
    source: ContentSource,
    bytes: Arc<[u8]>,
}

impl ContentHandle {
    /// Handle over the bytes of a file
    pub fn from_file(unit_id: impl Into<String>, path: &Path, bytes: Vec<u8>) -> Self {
        Self {
            unit_id: unit_id.into(),
            source: ContentSource::File(path.to_path_buf()),
            bytes: Arc::from(bytes),
        }
    }

    /// Handle over literal query text
    pub fn from_literal(unit_id: impl Into<String>) -> Self {
        let unit_id = unit_id.into();
        let bytes = encode_single_byte(&unit_id);
        Self {
            unit_id,
            source: ContentSource::Literal,
            bytes: Arc::from(bytes),
        }
    }

    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// A fresh cursor positioned at the start of the content
    pub fn reader(&self) -> ContentReader {
        ContentReader::new(Arc::clone(&self.bytes))
    }

    /// Shared view of the raw bytes, for consumers that outlive the handle
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    /// Number of lines in the content (see [`split_lines`] for the convention)
    pub fn line_count(&self) -> usize {
        split_lines(&self.bytes).len()
    }

    /// Release the handle
    pub fn close(self) {
        log::trace!(
            "Released content handle for '{}' ({} bytes)",
            self.unit_id,
            self.bytes.len()
        );
    }
}

/// Forward-only cursor over a unit's content
///
/// Implements `Read` and `BufRead`. Once exhausted it stays exhausted until
/// [`ContentReader::rewind`] is called.
#[derive(Debug, Clone)]
pub struct ContentReader {
    cursor: Cursor<Arc<[u8]>>,
}

impl ContentReader {
    pub fn new(bytes: Arc<[u8]>) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.position() as usize >= self.cursor.get_ref().len()
    }

    pub fn rewind(&mut self) {
        self.cursor.set_position(0);
    }

    fn take_remaining(&mut self) -> &[u8] {
        let len = self.cursor.get_ref().len();
        let start = (self.cursor.position() as usize).min(len);
        self.cursor.set_position(len as u64);
        &self.cursor.get_ref()[start..]
    }

    /// Consume the rest of the content as lines, terminators removed
    pub fn read_lines(&mut self) -> Vec<String> {
        split_lines(self.take_remaining())
            .into_iter()
            .map(decode_single_byte)
            .collect()
    }

    /// Consume the rest of the content as text
    pub fn read_text(&mut self) -> String {
        decode_single_byte(self.take_remaining())
    }
}

impl Read for ContentReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for ContentReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt)
    }
}

/// Encode text at one byte per character
pub fn encode_single_byte(text: &str) -> Vec<u8> {
    let mut replaced = 0usize;
    let bytes: Vec<u8> = text
        .chars()
        .map(|c| {
            if c.is_ascii() {
                c as u8
            } else {
                replaced += 1;
                REPLACEMENT_BYTE
            }
        })
        .collect();

    if replaced > 0 {
        log::warn!(
            "Query text contains {} non-ASCII character(s); they are read as '?'",
            replaced
        );
    }
    bytes
}

/// Decode bytes at one character per byte
pub fn decode_single_byte(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Split content into lines
///
/// `\n`, `\r\n` and a lone `\r` each end a line. Text after the last
/// terminator is a line only if it is non-empty, so `""` has no lines,
/// `"a\n"` has one and `"a\nb"` has two.
pub fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&bytes[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&bytes[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }
    lines
}
