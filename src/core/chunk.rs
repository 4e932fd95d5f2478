//! Byte-bounded message chunking and line splitting
//!
//! Oversized records are cut into transport-safe chunks before they reach a
//! sink. Chunk boundaries are always UTF-8 character boundaries, so every
//! chunk is a valid string slice and concatenating all chunks reproduces the
//! original text byte for byte.

/// Maximum chunk size in bytes.
///
/// The console log transport caps one entry at roughly 4076 bytes of UTF-8,
/// so 4000 leaves headroom for sink-added framing.
pub const CHUNK_SIZE: usize = 4000;

/// Platform line separator used when splitting chunks into lines.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Platform line separator used when splitting chunks into lines.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Iterator over byte-bounded chunks of a string.
///
/// Produced by [`byte_chunks`]. Each chunk is at most `max_bytes` long; a
/// stride boundary that would land inside a multi-byte character is shifted
/// backward to the nearest character boundary. Input that already fits yields
/// exactly one chunk, including the empty string.
pub struct ByteChunks<'a> {
    rest: &'a str,
    max_bytes: usize,
    done: bool,
}

/// Split `text` into chunks of at most `max_bytes` bytes.
///
/// # Panics
///
/// Panics if `max_bytes` is smaller than 4, the widest UTF-8 character; a
/// smaller stride could not make progress past such a character.
///
/// # Examples
///
/// ```
/// use single_line_logger::core::chunk::byte_chunks;
///
/// let chunks: Vec<&str> = byte_chunks("abcdef", 4).collect();
/// assert_eq!(chunks, vec!["abcd", "ef"]);
/// ```
pub fn byte_chunks(text: &str, max_bytes: usize) -> ByteChunks<'_> {
    assert!(
        max_bytes >= 4,
        "max_bytes must be at least 4 to fit any UTF-8 character"
    );
    ByteChunks {
        rest: text,
        max_bytes,
        done: false,
    }
}

impl<'a> Iterator for ByteChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        if self.rest.len() <= self.max_bytes {
            self.done = true;
            return Some(std::mem::take(&mut self.rest));
        }

        // `rest` starts on a character boundary, so backing up at most three
        // bytes always lands on one and the stride never degenerates to zero.
        let mut end = self.max_bytes;
        while !self.rest.is_char_boundary(end) {
            end -= 1;
        }

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

/// Split a chunk on the platform line separator, dropping empty lines.
///
/// Applied only after chunking, so a returned line is never cut mid-character.
pub fn split_lines(chunk: &str) -> impl Iterator<Item = &str> {
    chunk.split(LINE_SEPARATOR).filter(|line| !line.is_empty())
}
