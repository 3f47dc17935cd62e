//! Payload recovery library for frequency-shift-keyed PCM recordings
//!
//! Parses a RIFF/WAVE capture, demodulates the left channel by classifying
//! zero-crossing periods, and extracts sync-delimited binary frames.

pub mod bitstream;
pub mod channels;
pub mod decoder;
pub mod error;
pub mod framing;
pub mod normalize;
pub mod packer;
pub mod wave;
pub mod zero_crossing;

pub use channels::ChannelSamples;
pub use decoder::{DecodeOutput, Decoder, DecoderConfig};
pub use error::{DecodeError, Result};
pub use framing::Frame;
pub use normalize::NormalizedSamples;
pub use wave::{WaveContainer, WaveHeader};
pub use zero_crossing::{AnalyzerConfig, PeriodHistogram, Symbol, ZeroCrossingAnalyzer};

// Start-of-signal detection
pub const START_WINDOW_SAMPLES: usize = 6;
pub const START_ENERGY_THRESHOLD: i32 = 2000;

// Period bands, in samples between rising zero-crossings.
// A space marker lies strictly inside (SPACE_PERIOD_MIN, BIT_PERIOD_MIN);
// a one bit lies in [BIT_PERIOD_MIN, BIT_PERIOD_MAX). Anything else is dropped.
pub const SPACE_PERIOD_MIN: usize = 16;
pub const BIT_PERIOD_MIN: usize = 29;
pub const BIT_PERIOD_MAX: usize = 42;

// Frame delimiters on the cleaned bitstream
pub const SYNC_PREAMBLE: &str = "1101010110111010";
pub const TERMINATOR_ZERO_RUN: usize = 34;
