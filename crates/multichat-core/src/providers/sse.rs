//! Server-sent-event line framing
//!
//! Both adapters read `data:` records out of a chunked byte stream. Reads do
//! not respect record boundaries, so bytes are held until a full line is
//! available and only then decoded.

use memchr::memchr;

/// Accumulates raw body bytes and yields complete lines
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buffer: Vec<u8>,
}

impl SseLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a read and return every line it completed
    ///
    /// Lines come back without the trailing `\n` or `\r\n`. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);

        let mut lines = Vec::new();
        let mut start = 0;
        while let Some(offset) = memchr(b'\n', &self.buffer[start..]) {
            let end = start + offset;
            lines.push(decode_line(&self.buffer[start..end]));
            start = end + 1;
        }
        // Compact once per read
        if start > 0 {
            self.buffer.drain(..start);
        }
        lines
    }

    /// Bytes received after the last newline
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Flush the trailing unterminated line at end of stream
    pub fn finish(self) -> Option<String> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(decode_line(&self.buffer))
        }
    }
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Meaning of one SSE line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseLine<'a> {
    /// Payload of a `data:` record, trimmed
    Data(&'a str),
    /// The `[DONE]` sentinel
    Done,
    /// Blank lines, comments and non-data fields
    Ignored,
}

/// Classify a line produced by [`SseLineBuffer`]
pub fn parse_sse_line(line: &str) -> SseLine<'_> {
    match line.strip_prefix("data:") {
        Some(payload) => {
            let payload = payload.trim();
            if payload == "[DONE]" {
                SseLine::Done
            } else if payload.is_empty() {
                SseLine::Ignored
            } else {
                SseLine::Data(payload)
            }
        }
        None => SseLine::Ignored,
    }
}
