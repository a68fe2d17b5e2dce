//! Streaming LZEVIL decompression.
//!
//! The decoder reads the 4-byte length header lazily on the first read, then
//! repeats one step until that many plaintext bytes have been produced:
//! decode a block size, and either copy one raw literal byte or copy
//! `block_size` bytes from the sliding window at the decoded distance.
//! Decoded bytes are buffered internally so callers may read in arbitrarily
//! small slices.
//!
//! The trailing zero padding of the final byte is never consumed: iteration
//! is bounded by the header's byte count, not by the bit stream's end.

use crate::tables::{block_size_coder, distance_coder};
use crate::{WINDOW_MASK, WINDOW_SIZE};
use lzevil_core::bitstream::BitReader;
use lzevil_core::error::{Fault, LzevilError, Result};
use std::io::{self, Read};

/// A streaming LZEVIL decoder around a byte source.
///
/// The first failure (malformed code, truncation, I/O error) latches and is
/// reported on every subsequent read. A clean source EOF at an item boundary
/// before the declared size is reached terminates the stream early, matching
/// the reference implementation.
#[derive(Debug)]
pub struct LzevilDecoder<R: Read> {
    reader: BitReader<R>,
    /// First failure; reported on every subsequent call.
    fault: Option<Fault>,
    /// Whether the header has been consumed.
    started: bool,
    /// Uncompressed length declared by the header.
    original_size: i32,
    /// Plaintext bytes materialized so far.
    read_size: i32,
    /// Decoded bytes not yet handed to the caller.
    pending: Vec<u8>,
    /// Sliding window of the most recent plaintext bytes.
    window: Vec<u8>,
    /// Next write index, in `0..WINDOW_SIZE`.
    window_pos: usize,
}

impl<R: Read> LzevilDecoder<R> {
    /// Create a decoder over a compressed byte source.
    pub fn new(source: R) -> Self {
        Self {
            reader: BitReader::new(source),
            fault: None,
            started: false,
            original_size: 0,
            read_size: 0,
            pending: Vec::new(),
            window: vec![0; WINDOW_SIZE],
            window_pos: 0,
        }
    }

    /// The uncompressed length declared by the header, once it has been read.
    pub fn original_size(&self) -> Option<u64> {
        self.started.then_some(self.original_size as u64)
    }

    /// Whether the declared size has been fully materialized and drained.
    pub fn is_finished(&self) -> bool {
        self.started && self.read_size >= self.original_size && self.pending.is_empty()
    }

    /// Consume this decoder and return the underlying source.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    /// Read and validate the 4-byte little-endian length header.
    fn init(&mut self) -> Result<()> {
        let mut header = [0u8; 4];
        for slot in &mut header {
            *slot = self.reader.read_byte();
        }
        if let Some(fault) = self.reader.fault() {
            // A short header is unexpected no matter where it stopped.
            return Err(match fault {
                Fault::Eof | Fault::UnexpectedEof => LzevilError::UnexpectedEof,
                other => other.into_error(),
            });
        }
        let size = i32::from_le_bytes(header);
        if size < 0 {
            return Err(LzevilError::InvalidData);
        }
        self.original_size = size;
        self.started = true;
        Ok(())
    }

    /// Surface a latched fault: clean EOF is the normal terminator, anything
    /// else is an error.
    fn surface(fault: Fault) -> Result<usize> {
        match fault {
            Fault::Eof => Ok(0),
            other => Err(other.into_error()),
        }
    }

    pub(crate) fn read_some(&mut self, buf: &mut [u8]) -> Result<usize> {
        if let Some(fault) = self.fault {
            return Self::surface(fault);
        }
        if !self.started {
            if let Err(e) = self.init() {
                self.fault = Some(Fault::of(&e));
                return Err(e);
            }
        }

        while self.read_size < self.original_size && self.pending.len() < buf.len() {
            let block_size = block_size_coder().decode(&mut self.reader);
            if block_size > 1 {
                let dist = distance_coder().decode(&mut self.reader) as usize;
                for _ in 0..block_size {
                    let pos = self
                        .window_pos
                        .wrapping_sub((dist & WINDOW_MASK) + 1)
                        & WINDOW_MASK;
                    let byte = self.window[pos];
                    self.pending.push(byte);
                    self.window[self.window_pos] = byte;
                    self.window_pos = (self.window_pos + 1) & WINDOW_MASK;
                }
            } else {
                let byte = self.reader.read_byte();
                self.pending.push(byte);
                self.window[self.window_pos] = byte;
                self.window_pos = (self.window_pos + 1) & WINDOW_MASK;
            }
            if let Some(fault) = self.reader.fault() {
                self.fault = Some(fault);
                return Self::surface(fault);
            }
            self.read_size += block_size as i32;
        }

        let n = buf.len().min(self.pending.len());
        buf[..n].copy_from_slice(&self.pending[..n]);
        self.pending.drain(..n);
        Ok(n)
    }
}

impl<R: Read> Read for LzevilDecoder<R> {
    /// Produce plaintext bytes; `Ok(0)` once the declared size has been
    /// emitted (or on a clean source EOF at an item boundary).
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_some(buf).map_err(io::Error::from)
    }
}
