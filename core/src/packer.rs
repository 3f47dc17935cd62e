/// Pack a '0'/'1' bit string into bytes, most-significant bit first.
///
/// The string is right-padded with zeros to a byte boundary first; the
/// padding lands in the frame's trailing null run, so it never invents
/// payload data.
pub fn pack_bits(bits: &str) -> Vec<u8> {
    debug_assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));

    let mut padded = bits.to_string();
    while padded.len() % 8 != 0 {
        padded.push('0');
    }

    padded
        .as_bytes()
        .chunks_exact(8)
        .map(|group| {
            group
                .iter()
                .fold(0u8, |byte, &bit| (byte << 1) | (bit - b'0'))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte() {
        assert_eq!(pack_bits("01000001"), vec![0x41]);
        assert_eq!(pack_bits("11111111"), vec![0xFF]);
        assert_eq!(pack_bits("00000000"), vec![0x00]);
    }

    #[test]
    fn test_msb_first() {
        assert_eq!(pack_bits("10000000"), vec![0x80]);
        assert_eq!(pack_bits("00000001"), vec![0x01]);
    }

    #[test]
    fn test_multiple_bytes_in_order() {
        assert_eq!(pack_bits("1101010110111010"), vec![0xD5, 0xBA]);
    }

    #[test]
    fn test_padding_applied() {
        // 50 bits pad to 56 and pack to 7 bytes
        let bits = format!("1101010110111010{}", "0".repeat(34));
        let packed = pack_bits(&bits);
        assert_eq!(packed.len(), 7);
        assert_eq!(packed, vec![0xD5, 0xBA, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_padding_is_trailing_zeros() {
        // "11" pads to "11000000"
        assert_eq!(pack_bits("11"), vec![0xC0]);
    }

    #[test]
    fn test_empty_bits() {
        assert_eq!(pack_bits(""), Vec::<u8>::new());
    }
}
