//! Canonical Huffman coding over range symbols.
//!
//! Unlike a plain prefix code where each codeword maps to a single value,
//! every [`Symbol`] here denotes a contiguous numeric range: the codeword
//! selects the range, and `extra_bits_len` raw bits read verbatim after it
//! select the value within `[base, base + 2^extra_bits_len - 1]`. A coder is
//! an ordered set of such symbols covering one gap-free range.
//!
//! Coders are immutable after construction and validated eagerly; the two
//! tables the stream format uses live in [`crate::tables`].

use lzevil_core::bitstream::{BitReader, BitWriter};
use lzevil_core::error::Fault;
use std::io::{Read, Write};

/// Number of low bits of a packed decode-table entry holding the base value.
const PACKED_BASE_BITS: u32 = 12;

/// A codeword denoting a contiguous range of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Smallest value this symbol encodes.
    pub base: u32,
    /// The codeword itself, emitted least-significant bit first.
    pub bits: u16,
    /// Codeword length in bits (1..=24).
    pub bits_len: u8,
    /// Number of raw bits appended after the codeword (0..=15, so it fits
    /// the packed decode-table entry).
    pub extra_bits_len: u8,
}

impl Symbol {
    /// Largest value this symbol encodes.
    fn max(&self) -> u32 {
        self.base + ((1 << self.extra_bits_len) - 1)
    }

    /// Whether `value` falls in this symbol's range.
    fn contains(&self, value: u32) -> bool {
        self.base <= value && value <= self.max()
    }
}

/// An immutable canonical Huffman coder over range symbols.
///
/// Decoding walks the accumulated code bit by bit against a flat table
/// indexed by `(1 << bits_len) + bits - 2`; entries pack `(base,
/// extra_bits_len)` with a zero sentinel meaning "no symbol yet — read
/// another bit".
#[derive(Debug)]
pub struct HuffmanCoder {
    /// Symbols sorted by `base`.
    symbols: Vec<Symbol>,
    /// Longest codeword length.
    max_bits_len: u8,
    /// Smallest encodable value.
    min_value: u32,
    /// Largest encodable value.
    max_value: u32,
    /// Packed decode entries, zero meaning absent.
    decode_table: Vec<u16>,
}

impl HuffmanCoder {
    /// Build a coder from its symbol descriptors.
    ///
    /// # Panics
    ///
    /// Table definitions are compile-time data, so every violation is a
    /// programmer error and panics: fewer than two symbols, a gap or overlap
    /// between adjacent ranges, an out-of-range field, or two codewords where
    /// one is a prefix of the other.
    pub fn new(mut symbols: Vec<Symbol>) -> Self {
        assert!(symbols.len() >= 2, "a coder needs at least 2 symbols");

        symbols.sort_by_key(|sym| sym.base);

        let mut max_bits_len = symbols[0].bits_len;
        for (i, sym) in symbols.iter().enumerate() {
            assert!(
                sym.base < u32::from(u16::MAX)
                    && sym.extra_bits_len < 1 << 4
                    && (1..=24).contains(&sym.bits_len),
                "symbol field out of range: {sym:?}"
            );
            if i > 0 {
                assert_eq!(
                    sym.base,
                    symbols[i - 1].max() + 1,
                    "symbol ranges must be contiguous"
                );
            }
            for (j, other) in symbols.iter().enumerate() {
                assert!(
                    i == j
                        || other.bits_len < sym.bits_len
                        || other.bits & ((1 << sym.bits_len) - 1) != sym.bits,
                    "codeword collision between {sym:?} and {other:?}"
                );
            }
            max_bits_len = max_bits_len.max(sym.bits_len);
        }

        let min_value = symbols[0].base;
        let max_value = symbols[symbols.len() - 1].max();

        let mut decode_table = vec![0u16; (1usize << (max_bits_len + 1)) - 2];
        for sym in &symbols {
            let index = (1usize << sym.bits_len) + usize::from(sym.bits) - 2;
            assert!(
                sym.base + 1 < 1 << PACKED_BASE_BITS && decode_table[index] == 0,
                "symbol does not pack: {sym:?}"
            );
            let packed = (u32::from(sym.extra_bits_len) << PACKED_BASE_BITS) | sym.base;
            decode_table[index] = (packed + 1) as u16;
        }

        Self {
            symbols,
            max_bits_len,
            min_value,
            max_value,
            decode_table,
        }
    }

    /// Smallest encodable value.
    pub fn min_value(&self) -> u32 {
        self.min_value
    }

    /// Largest encodable value.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Encode `value` as its codeword plus extra bits.
    ///
    /// # Panics
    ///
    /// Panics if `value` lies outside the coder's range; well-formed encoder
    /// input never does.
    pub fn encode<W: Write>(&self, value: u32, writer: &mut BitWriter<W>) {
        assert!(
            self.min_value <= value && value <= self.max_value,
            "value {value} outside coder range {}..={}",
            self.min_value,
            self.max_value
        );

        let sym = self
            .symbols
            .iter()
            .find(|sym| sym.contains(value))
            .expect("coder range is contiguous");

        writer.write_bits(u32::from(sym.bits), sym.bits_len);
        if sym.extra_bits_len > 0 {
            writer.write_bits(value - sym.base, sym.extra_bits_len);
        }
    }

    /// Decode the next value from the bit stream.
    ///
    /// If no symbol matches within the maximum code length, the stream is
    /// malformed; the reader latches [`Fault::InvalidData`] and zero is
    /// returned. Callers check the reader's fault at item boundaries.
    pub fn decode<R: Read>(&self, reader: &mut BitReader<R>) -> u32 {
        let mut bits: u32 = 0;
        for bits_len in 1..=self.max_bits_len {
            bits |= reader.read_bit() << (bits_len - 1);
            let index = (1usize << bits_len) + bits as usize - 2;
            let packed = self.decode_table[index];
            if packed == 0 {
                continue;
            }
            let packed = u32::from(packed) - 1;
            let base = packed & ((1 << PACKED_BASE_BITS) - 1);
            let extra_bits_len = (packed >> PACKED_BASE_BITS) as u8;
            if extra_bits_len > 0 {
                return base + reader.read_bits(extra_bits_len);
            }
            return base;
        }
        reader.set_fault(Fault::InvalidData);
        0
    }
}
