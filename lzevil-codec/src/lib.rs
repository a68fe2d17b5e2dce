//! # LZEVIL codec
//!
//! Bit-exact implementation of the LZEVIL stream format: a small-window
//! LZ77-style compressor over two fixed canonical Huffman alphabets, as used
//! to serialize game-server record lists on a legacy lobby protocol.
//!
//! ## Stream layout
//!
//! ```text
//! offset  size  field
//! 0       4     original_size  (signed 32-bit little-endian, >= 0)
//! 4       ...   bit stream of items until original_size bytes materialize
//! ```
//!
//! Each item is either a literal (block-size code for length 1, then one raw
//! byte interleaved at the next byte boundary) or a match (block-size code
//! for length 2..=162, then a distance code interpreted modulo the 1 KiB
//! window).
//!
//! ## Layers
//!
//! - `lzevil-core`: LSB-first bit I/O with the raw-byte interleaving rules
//! - [`huffman`]: canonical Huffman coding over range symbols
//! - [`tables`]: the two fixed alphabets (block size, distance)
//! - [`writer`] / [`reader`]: the streaming encoder and decoder
//!
//! ## Example
//!
//! ```
//! let packed = lzevil_codec::compress(b"abcdabcdabcdabcd").unwrap();
//! assert_eq!(
//!     packed,
//!     [0x10, 0x00, 0x00, 0x00, 0x30, 0x61, 0x62, 0x63, 0x64, 0x83, 0x01]
//! );
//! assert_eq!(lzevil_codec::decompress(&packed).unwrap(), b"abcdabcdabcdabcd");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod huffman;
pub mod reader;
pub mod tables;
pub mod writer;

// Re-exports for convenience
pub use lzevil_core::error::{LzevilError, Result};
pub use reader::LzevilDecoder;
pub use writer::LzevilEncoder;

/// Window size exponent.
pub const WINDOW_BITS: usize = 10;

/// Sliding window size shared by encoder and decoder (1 KiB).
pub const WINDOW_SIZE: usize = 1 << WINDOW_BITS;

/// Mask for reducing positions and distances modulo the window.
pub const WINDOW_MASK: usize = WINDOW_SIZE - 1;

/// Largest uncompressed length the 4-byte signed header can declare.
pub const MAX_DATA_SIZE: usize = i32::MAX as usize;

/// Compress `data` into a complete stream, header included.
///
/// # Panics
///
/// Panics if `data` is longer than [`MAX_DATA_SIZE`].
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut encoder = LzevilEncoder::new(&mut output, data.len());
    let written = encoder.write_some(data)?;
    debug_assert_eq!(written, data.len());
    debug_assert!(encoder.is_finished());
    drop(encoder);
    Ok(output)
}

/// Decompress a complete stream produced by [`compress`].
///
/// A source that ends cleanly at an item boundary before the declared size
/// terminates the output early, as the reference implementation does; a
/// malformed or mid-item-truncated stream fails with
/// [`LzevilError::InvalidData`] or [`LzevilError::UnexpectedEof`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = LzevilDecoder::new(data);
    let mut output = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = decoder.read_some(&mut chunk)?;
        if n == 0 {
            return Ok(output);
        }
        output.extend_from_slice(&chunk[..n]);
    }
}
