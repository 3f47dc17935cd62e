use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("format error: bad {chunk} tag, expected {expected:?}, found {found:?}")]
    Format {
        chunk: &'static str,
        expected: String,
        found: String,
    },

    #[error("truncated file: {what} needs {needed} byte(s), only {available} left")]
    TruncatedFile {
        what: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("unsupported PCM format: {channels} channel(s) at {bits_per_sample} bits per sample")]
    UnsupportedFormat { channels: u16, bits_per_sample: u16 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
