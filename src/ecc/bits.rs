//! Conversions between packed bytes and one-bit-per-element words.
//!
//! Coders in this crate take and return `&[u8]` slices holding one bit per
//! element. These helpers move to and from packed MSB-first byte buffers.

use bitvec::prelude::*;

/// Unpack bytes into bits, most significant bit first
pub fn unpack_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .view_bits::<Msb0>()
        .iter()
        .map(|bit| u8::from(*bit))
        .collect()
}

/// Pack bits into bytes, most significant bit first.
///
/// The final byte is zero-padded. Nonzero elements are treated as 1 bits.
pub fn pack_bits(bits: &[u8]) -> Vec<u8> {
    let mut packed: BitVec<u8, Msb0> = BitVec::with_capacity(bits.len());
    packed.extend(bits.iter().map(|&b| b != 0));
    packed.set_uninitialized(false);
    packed.into_vec()
}

/// Number of positions at which two words differ
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    a.iter()
        .zip(b)
        .filter(|&(&x, &y)| (x != 0) != (y != 0))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_conversions() {
        let bytes = vec![0xA5, 0x3C]; // 10100101 00111100
        let bits = unpack_bits(&bytes);

        assert_eq!(
            bits,
            vec![1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1, 1, 0, 0]
        );
        assert_eq!(pack_bits(&bits), bytes);
    }

    #[test]
    fn test_pack_pads_last_byte() {
        assert_eq!(pack_bits(&[1, 0, 1]), vec![0xA0]);
        assert_eq!(pack_bits(&[1, 1, 1, 1, 1, 1, 1, 1, 1]), vec![0xFF, 0x80]);
        assert!(pack_bits(&[]).is_empty());
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(&[1, 0, 1, 1], &[1, 1, 0, 1]), 2);
        assert_eq!(hamming_distance(&[0, 0], &[0, 0]), 0);
    }
}
