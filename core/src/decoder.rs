use crate::bitstream::collapse_symbols;
use crate::channels::extract_channels;
use crate::error::Result;
use crate::framing::{extract_frames, Frame};
use crate::normalize::{normalize, NormalizedSamples};
use crate::packer::pack_bits;
use crate::wave::{WaveContainer, WaveHeader};
use crate::zero_crossing::{AnalyzerConfig, PeriodHistogram, ZeroCrossingAnalyzer};
use crate::{SYNC_PREAMBLE, TERMINATOR_ZERO_RUN};

/// Full decoder configuration: demodulation bands plus frame delimiters.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    pub analyzer: AnalyzerConfig,
    pub preamble: String,
    pub terminator_zeros: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig::default(),
            preamble: SYNC_PREAMBLE.to_string(),
            terminator_zeros: TERMINATOR_ZERO_RUN,
        }
    }
}

/// Everything one decode run produces: recovered payloads plus the
/// diagnostics an external reporter may want to surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutput {
    pub header: WaveHeader,
    /// Floating-point view of both channels; computed for downstream use,
    /// not consumed by the framing protocol
    pub normalized: NormalizedSamples,
    pub histogram: PeriodHistogram,
    pub unpaired_spaces: usize,
    pub frames: Vec<Frame>,
    /// Packed bytes per frame, index-aligned with `frames`
    pub payloads: Vec<Vec<u8>>,
}

/// One-shot batch decoder over a complete in-memory recording.
///
/// Stages run strictly in order, each consuming the previous stage's full
/// output: container parse, channel extraction, normalization,
/// zero-crossing analysis, symbol cleanup, frame extraction, bit packing.
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            config: DecoderConfig::default(),
        }
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decode a whole capture. Structural container defects abort with an
    /// error; a well-formed capture always yields a report, possibly with
    /// zero frames.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodeOutput> {
        let container = WaveContainer::parse(bytes)?;
        let channels = extract_channels(&container.header, &container.samples)?;
        let normalized = normalize(&channels, container.header.bits_per_sample);

        let analyzer = ZeroCrossingAnalyzer::with_config(self.config.analyzer.clone());
        let (symbols, histogram) = analyzer.analyze(&channels.left);
        log::debug!("demodulated {} raw symbols", symbols.len());

        let clean = collapse_symbols(&symbols);
        if clean.unpaired_spaces > 0 {
            log::warn!(
                "dropped {} unpaired space marker(s)",
                clean.unpaired_spaces
            );
        }

        let frames = extract_frames(&clean.bits, &self.config.preamble, self.config.terminator_zeros);
        if frames.is_empty() {
            log::info!("no frames found in {} bitstream bits", clean.bits.len());
        }

        let payloads = frames.iter().map(|frame| pack_bits(&frame.bits)).collect();

        Ok(DecodeOutput {
            header: container.header,
            normalized,
            histogram,
            unpaired_spaces: clean.unpaired_spaces,
            frames,
            payloads,
        })
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
