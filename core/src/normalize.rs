use crate::channels::ChannelSamples;

/// Both channels scaled into [-1.0, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSamples {
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

/// Scale integer samples to floating point.
///
/// PCM quantization is asymmetric: b-bit samples span -2^(b-1) to
/// 2^(b-1)-1. Positive values divide by 2^(b-1)-1 and the rest by 2^(b-1),
/// so both extremes land exactly on +/-1.0 and zero stays 0.0.
pub fn normalize(samples: &ChannelSamples, bits_per_sample: u16) -> NormalizedSamples {
    let positive_base = f64::from((1i32 << (bits_per_sample - 1)) - 1);
    let negative_base = f64::from(1i32 << (bits_per_sample - 1));

    let scale = |s: i16| {
        if s > 0 {
            f64::from(s) / positive_base
        } else {
            f64::from(s) / negative_base
        }
    };

    NormalizedSamples {
        left: samples.left.iter().copied().map(scale).collect(),
        right: samples.right.iter().copied().map(scale).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(values: &[i16]) -> ChannelSamples {
        ChannelSamples {
            left: values.to_vec(),
            right: values.to_vec(),
        }
    }

    #[test]
    fn test_16bit_extremes_map_exactly() {
        let normalized = normalize(&mono(&[32767, -32768, 0]), 16);
        assert_eq!(normalized.left, vec![1.0, -1.0, 0.0]);
        assert_eq!(normalized.right, vec![1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_8bit_extremes_map_exactly() {
        let normalized = normalize(&mono(&[127, -128, 0]), 8);
        assert_eq!(normalized.left, vec![1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_asymmetric_divisors() {
        let normalized = normalize(&mono(&[100, -100]), 16);
        assert_eq!(normalized.left[0], 100.0 / 32767.0);
        assert_eq!(normalized.left[1], -100.0 / 32768.0);
    }

    #[test]
    fn test_channels_normalized_independently() {
        let samples = ChannelSamples {
            left: vec![32767],
            right: vec![-32768],
        };
        let normalized = normalize(&samples, 16);
        assert_eq!(normalized.left, vec![1.0]);
        assert_eq!(normalized.right, vec![-1.0]);
    }
}
