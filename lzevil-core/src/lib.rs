//! # LZEVIL Core
//!
//! Bit-level building blocks for the LZEVIL codec:
//!
//! - [`bitstream`]: LSB-first [`BitReader`]/[`BitWriter`] with the stream
//!   format's raw-byte interleaving rules
//! - [`error`]: error types and the latched [`Fault`] kind
//!
//! The codec itself (Huffman coders, sliding-window matcher, streaming
//! encoder/decoder) lives in the `lzevil-codec` crate on top of this one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{Fault, LzevilError, Result};
