use crate::error::{DecodeError, Result};
use crate::wave::WaveHeader;

/// Left/right sample sequences de-interleaved from the raw data chunk.
///
/// Mono input duplicates the single channel into both sequences. 8-bit
/// samples are widened to i16 as-is, without unsigned-to-signed correction;
/// the demodulation bands were tuned against that representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSamples {
    pub left: Vec<i16>,
    pub right: Vec<i16>,
}

/// De-interleave the raw sample bytes according to the header's channel
/// count and bit depth. No resampling or filtering happens here.
pub fn extract_channels(header: &WaveHeader, data: &[u8]) -> Result<ChannelSamples> {
    match (header.channels, header.bits_per_sample) {
        (1, 8) => {
            let left: Vec<i16> = data.iter().map(|&b| b as i16).collect();
            Ok(ChannelSamples {
                right: left.clone(),
                left,
            })
        }
        (2, 8) => {
            let mut left = Vec::with_capacity(data.len() / 2);
            let mut right = Vec::with_capacity(data.len() / 2);
            for pair in data.chunks_exact(2) {
                left.push(pair[0] as i16);
                right.push(pair[1] as i16);
            }
            Ok(ChannelSamples { left, right })
        }
        (1, 16) => {
            // One sample per 4 input bytes, read from byte offset 2i: only
            // the first half of the buffer is consumed. The demodulation
            // bands assume exactly this layout.
            let count = data.len() / 4;
            let mut left = Vec::with_capacity(count);
            for i in 0..count {
                left.push(i16::from_le_bytes([data[2 * i], data[2 * i + 1]]));
            }
            Ok(ChannelSamples {
                right: left.clone(),
                left,
            })
        }
        (2, 16) => {
            let mut left = Vec::with_capacity(data.len() / 4);
            let mut right = Vec::with_capacity(data.len() / 4);
            for frame in data.chunks_exact(4) {
                left.push(i16::from_le_bytes([frame[0], frame[1]]));
                right.push(i16::from_le_bytes([frame[2], frame[3]]));
            }
            Ok(ChannelSamples { left, right })
        }
        (channels, bits_per_sample) => Err(DecodeError::UnsupportedFormat {
            channels,
            bits_per_sample,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(channels: u16, bits_per_sample: u16) -> WaveHeader {
        WaveHeader {
            file_size: 0,
            fmt_chunk_size: 16,
            format_type: 1,
            channels,
            sample_rate: 44100,
            avg_bytes_per_sec: 0,
            block_align: channels * bits_per_sample / 8,
            bits_per_sample,
            extension: None,
            fact: None,
            data_size: 0,
        }
    }

    #[test]
    fn test_mono_8bit_duplicates_channels() {
        let data = [0u8, 100, 200, 255];
        let samples = extract_channels(&header(1, 8), &data).unwrap();
        assert_eq!(samples.left, vec![0, 100, 200, 255]);
        assert_eq!(samples.left, samples.right);
    }

    #[test]
    fn test_8bit_widening_has_no_sign_correction() {
        // Byte 200 stays 200, not -56
        let samples = extract_channels(&header(1, 8), &[200]).unwrap();
        assert_eq!(samples.left, vec![200i16]);
    }

    #[test]
    fn test_stereo_8bit_interleave() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let samples = extract_channels(&header(2, 8), &data).unwrap();
        assert_eq!(samples.left, vec![1, 3, 5]);
        assert_eq!(samples.right, vec![2, 4, 6]);
    }

    #[test]
    fn test_stereo_8bit_lengths() {
        let data: Vec<u8> = (0..10).collect();
        let samples = extract_channels(&header(2, 8), &data).unwrap();
        assert_eq!(samples.left.len(), 5);
        assert_eq!(samples.right.len(), 5);
        for i in 0..5 {
            assert_eq!(samples.left[i], data[2 * i] as i16);
            assert_eq!(samples.right[i], data[2 * i + 1] as i16);
        }
    }

    #[test]
    fn test_mono_16bit_reads_first_half() {
        // 8 bytes in, 2 samples out, taken from byte offsets 0 and 2
        let data = [0x34, 0x12, 0xFF, 0xFF, 0x78, 0x56, 0x00, 0x00];
        let samples = extract_channels(&header(1, 16), &data).unwrap();
        assert_eq!(samples.left, vec![0x1234, -1]);
        assert_eq!(samples.left, samples.right);
    }

    #[test]
    fn test_stereo_16bit_interleave() {
        let data = [0x01, 0x00, 0x02, 0x00, 0xFE, 0xFF, 0x04, 0x00];
        let samples = extract_channels(&header(2, 16), &data).unwrap();
        assert_eq!(samples.left, vec![1, -2]);
        assert_eq!(samples.right, vec![2, 4]);
    }

    #[test]
    fn test_unsupported_layout_rejected() {
        let mut bad = header(1, 16);
        bad.bits_per_sample = 24;
        assert!(matches!(
            extract_channels(&bad, &[0; 12]),
            Err(DecodeError::UnsupportedFormat { .. })
        ));
    }
}
