use crate::error::{DecodeError, Result};

/// Parsed RIFF/WAVE header, built once at load time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveHeader {
    /// Declared size of the file minus the 8-byte RIFF prelude
    pub file_size: u32,
    /// Size of the format chunk body; 16, or 18 when the 2-byte extension is present
    pub fmt_chunk_size: u32,
    /// 1 for PCM
    pub format_type: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub avg_bytes_per_sec: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// Extra format bytes, present iff `fmt_chunk_size == 18`
    pub extension: Option<[u8; 2]>,
    /// Optional "fact" chunk sitting between the format and data chunks
    pub fact: Option<FactChunk>,
    /// Declared size of the data chunk body
    pub data_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactChunk {
    pub size: u32,
    pub data: [u8; 4],
}

/// A parsed capture: the header record plus the raw sample bytes of the
/// data chunk, exactly `data_size` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveContainer {
    pub header: WaveHeader,
    pub samples: Vec<u8>,
}

/// Byte cursor over the raw file with truncation-checked reads.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8]> {
        let available = self.bytes.len() - self.pos;
        if n > available {
            return Err(DecodeError::TruncatedFile {
                what,
                needed: n,
                available,
            });
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn tag4(&mut self, what: &'static str) -> Result<[u8; 4]> {
        let slice = self.take(4, what)?;
        Ok([slice[0], slice[1], slice[2], slice[3]])
    }

    fn expect_tag(&mut self, expected: &[u8; 4], chunk: &'static str) -> Result<()> {
        let found = self.tag4(chunk)?;
        if &found != expected {
            return Err(DecodeError::Format {
                chunk,
                expected: String::from_utf8_lossy(expected).into_owned(),
                found: String::from_utf8_lossy(&found).into_owned(),
            });
        }
        Ok(())
    }

    fn u16_le(&mut self, what: &'static str) -> Result<u16> {
        let slice = self.take(2, what)?;
        Ok(u16::from_le_bytes([slice[0], slice[1]]))
    }

    fn u32_le(&mut self, what: &'static str) -> Result<u32> {
        let slice = self.take(4, what)?;
        Ok(u32::from_le_bytes([slice[0], slice[1], slice[2], slice[3]]))
    }
}

impl WaveContainer {
    /// Parse a whole capture from memory.
    ///
    /// Fails with `Format` on any tag mismatch, `TruncatedFile` when a field
    /// or the declared data size runs past the end of the buffer, and
    /// `UnsupportedFormat` for anything other than PCM with 1-2 channels at
    /// 8 or 16 bits per sample.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(bytes);

        reader.expect_tag(b"RIFF", "RIFF")?;
        let file_size = reader.u32_le("file size")?;
        reader.expect_tag(b"WAVE", "WAVE")?;

        reader.expect_tag(b"fmt ", "fmt ")?;
        let fmt_chunk_size = reader.u32_le("fmt chunk size")?;
        let format_type = reader.u16_le("format type")?;
        let channels = reader.u16_le("channel count")?;
        let sample_rate = reader.u32_le("sample rate")?;
        let avg_bytes_per_sec = reader.u32_le("avg bytes/sec")?;
        let block_align = reader.u16_le("block align")?;
        let bits_per_sample = reader.u16_le("bits per sample")?;

        let extension = if fmt_chunk_size == 18 {
            let ext = reader.take(2, "fmt extension")?;
            Some([ext[0], ext[1]])
        } else {
            None
        };

        // The next chunk is either an optional "fact" chunk or the data
        // chunk directly.
        let next_id = reader.tag4("chunk id")?;
        let fact = if &next_id == b"fact" {
            let size = reader.u32_le("fact chunk size")?;
            let data = reader.take(4, "fact chunk data")?;
            let fact = FactChunk {
                size,
                data: [data[0], data[1], data[2], data[3]],
            };
            reader.expect_tag(b"data", "data")?;
            Some(fact)
        } else if &next_id == b"data" {
            None
        } else {
            return Err(DecodeError::Format {
                chunk: "data",
                expected: "data".to_string(),
                found: String::from_utf8_lossy(&next_id).into_owned(),
            });
        };

        let data_size = reader.u32_le("data chunk size")?;

        if format_type != 1 || !(1..=2).contains(&channels) || !matches!(bits_per_sample, 8 | 16) {
            return Err(DecodeError::UnsupportedFormat {
                channels,
                bits_per_sample,
            });
        }

        let samples = reader.take(data_size as usize, "data chunk")?.to_vec();

        Ok(Self {
            header: WaveHeader {
                file_size,
                fmt_chunk_size,
                format_type,
                channels,
                sample_rate,
                avg_bytes_per_sec,
                block_align,
                bits_per_sample,
                extension,
                fact,
                data_size,
            },
            samples,
        })
    }
}
