//! The two fixed Huffman tables of the LZEVIL stream format.
//!
//! Both tables are part of the wire format and must be reproduced
//! bit-for-bit. They are built once at first use and stay immutable for the
//! lifetime of the process.
//!
//! The block-size table doubles as the literal marker: length 1 (the single
//! bit `0`) announces a raw literal byte, lengths 2..=162 announce a match.
//! The distance table covers more than the window; encoded values are
//! interpreted modulo the window size by the decoder.

use crate::huffman::{HuffmanCoder, Symbol};
use std::sync::OnceLock;

/// The block-size (match length) coder. Covers 1..=162.
pub fn block_size_coder() -> &'static HuffmanCoder {
    static CODER: OnceLock<HuffmanCoder> = OnceLock::new();

    CODER.get_or_init(|| {
        HuffmanCoder::new(vec![
            sym(1, 0, 1, 0),    // literal marker
            sym(2, 1, 3, 0),
            sym(4, 5, 3, 0),
            sym(7, 11, 4, 2),   // 7..=10
            sym(3, 3, 5, 0),
            sym(11, 19, 5, 3),  // 11..=18
            sym(5, 7, 5, 0),
            sym(35, 23, 5, 6),  // 35..=98
            sym(6, 15, 5, 0),
            sym(19, 31, 6, 4),  // 19..=34
            sym(99, 63, 6, 7),  // 99..=162
        ])
    })
}

/// The distance coder. Covers 0..=5473; only 0..=1023 is ever emitted.
pub fn distance_coder() -> &'static HuffmanCoder {
    static CODER: OnceLock<HuffmanCoder> = OnceLock::new();

    CODER.get_or_init(|| {
        HuffmanCoder::new(vec![
            sym(354, 3, 2, 10),  // 354..=1377
            sym(1378, 1, 2, 12), // 1378..=5473
            sym(98, 6, 3, 8),    // 98..=353
            sym(34, 2, 3, 6),    // 34..=97
            sym(6, 4, 4, 2),     // 6..=9
            sym(2, 8, 4, 2),     // 2..=5
            sym(10, 0, 4, 3),    // 10..=17
            sym(0, 28, 5, 1),    // 0..=1
            sym(18, 12, 5, 4),   // 18..=33
        ])
    })
}

fn sym(base: u32, bits: u16, bits_len: u8, extra_bits_len: u8) -> Symbol {
    Symbol {
        base,
        bits,
        bits_len,
        extra_bits_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzevil_core::bitstream::{BitReader, BitWriter};

    #[test]
    fn test_block_size_coder_range() {
        let coder = block_size_coder();
        assert_eq!(coder.min_value(), 1);
        assert_eq!(coder.max_value(), 162);
    }

    #[test]
    fn test_distance_coder_range() {
        let coder = distance_coder();
        assert_eq!(coder.min_value(), 0);
        assert_eq!(coder.max_value(), 5473);
    }

    #[test]
    fn test_literal_marker_is_a_single_zero_bit() {
        let mut buf = Vec::new();
        let mut writer = BitWriter::new(&mut buf);
        block_size_coder().encode(1, &mut writer);
        writer.flush().unwrap();
        assert_eq!(buf, vec![0x00]);
    }

    #[test]
    fn test_block_size_coder_roundtrips_all_lengths() {
        let coder = block_size_coder();
        for value in 1..=162 {
            let mut buf = Vec::new();
            let mut writer = BitWriter::new(&mut buf);
            coder.encode(value, &mut writer);
            writer.flush().unwrap();

            let mut reader = BitReader::new(&buf[..]);
            assert_eq!(coder.decode(&mut reader), value);
            assert!(reader.fault().is_none());
        }
    }

    #[test]
    fn test_distance_coder_roundtrips_window_distances() {
        let coder = distance_coder();
        for value in 0..crate::WINDOW_SIZE as u32 {
            let mut buf = Vec::new();
            let mut writer = BitWriter::new(&mut buf);
            coder.encode(value, &mut writer);
            writer.flush().unwrap();

            let mut reader = BitReader::new(&buf[..]);
            assert_eq!(coder.decode(&mut reader), value);
            assert!(reader.fault().is_none());
        }
    }
}
