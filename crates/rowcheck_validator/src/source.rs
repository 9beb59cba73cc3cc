//! Byte-level bookkeeping over the raw source.
//!
//! The CSV reader reports a record's position before it skips the line
//! terminators left over from the previous record, and it accepts a quoted
//! field that never closes. `SourceTracker` sits between the source and the
//! reader and records what the engine needs to correct both: where each
//! `\n` byte sits, and whether a quoted field is still open at end of input.

use std::collections::VecDeque;
use std::io::{self, Read};

const QUOTE: u8 = b'"';

/// Quote state of the scanner, mirroring standard CSV quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    /// At the first byte of a field
    FieldStart,
    /// Inside an unquoted field
    Unquoted,
    /// Inside a quoted field
    Quoted,
    /// Saw a quote inside a quoted field: either an escape or the closing quote
    QuotedQuote,
}

/// `Read` adapter tracking newline offsets and open quotes.
#[derive(Debug)]
pub(crate) struct SourceTracker<R> {
    inner: R,
    delimiter: u8,
    offset: u64,
    line: u64,
    newlines: VecDeque<u64>,
    state: QuoteState,
    quote_line: u64,
}

impl<R: Read> SourceTracker<R> {
    pub(crate) fn new(inner: R, delimiter: u8) -> Self {
        Self {
            inner,
            delimiter,
            offset: 0,
            line: 1,
            newlines: VecDeque::new(),
            state: QuoteState::FieldStart,
            quote_line: 1,
        }
    }

    /// Whether the byte at `offset` is a `\n`.
    ///
    /// Offsets must be queried in non-decreasing order: earlier offsets are
    /// forgotten.
    pub(crate) fn newline_at(&mut self, offset: u64) -> bool {
        while self.newlines.front().is_some_and(|&n| n < offset) {
            self.newlines.pop_front();
        }
        self.newlines.front() == Some(&offset)
    }

    /// Line of the opening quote when the bytes read so far end inside a
    /// quoted field.
    pub(crate) fn open_quote_line(&self) -> Option<u64> {
        match self.state {
            QuoteState::Quoted => Some(self.quote_line),
            _ => None,
        }
    }

    fn scan(&mut self, byte: u8) {
        if byte == b'\n' {
            self.newlines.push_back(self.offset);
        }

        let state = self.state;
        self.state = match state {
            QuoteState::Quoted if byte == QUOTE => QuoteState::QuotedQuote,
            QuoteState::Quoted => QuoteState::Quoted,
            QuoteState::QuotedQuote if byte == QUOTE => QuoteState::Quoted,
            QuoteState::FieldStart if byte == QUOTE => {
                self.quote_line = self.line;
                QuoteState::Quoted
            }
            _ if self.is_boundary(byte) => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        };

        if byte == b'\n' {
            self.line += 1;
        }
        self.offset += 1;
    }

    fn is_boundary(&self, byte: u8) -> bool {
        byte == self.delimiter || byte == b'\n' || byte == b'\r'
    }
}

impl<R: Read> Read for SourceTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for &byte in &buf[..n] {
            self.scan(byte);
        }
        Ok(n)
    }
}
