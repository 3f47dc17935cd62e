use crate::{SYNC_PREAMBLE, TERMINATOR_ZERO_RUN};

/// One sync-delimited frame of the bitstream: preamble + payload +
/// terminator, numbered by occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub index: usize,
    pub bits: String,
}

/// Scan the bitstream for non-overlapping frames, leftmost first.
///
/// A frame is the preamble literal, the shortest run of arbitrary bits
/// (possibly empty), and the first run of `terminator_zeros` consecutive
/// zeros after the preamble. Scanning resumes after each match end. The
/// scan is a single linear pass, no backtracking.
pub fn extract_frames(bits: &str, preamble: &str, terminator_zeros: usize) -> Vec<Frame> {
    let haystack = bits.as_bytes();
    let mut frames = Vec::new();
    let mut pos = 0;

    while let Some(offset) = bits[pos..].find(preamble) {
        let start = pos + offset;
        let payload_start = start + preamble.len();

        // Earliest terminator at or after the preamble end; its start is
        // where the zero run first reaches full length.
        let mut run = 0;
        let mut end = None;
        for (j, &bit) in haystack.iter().enumerate().skip(payload_start) {
            if bit == b'0' {
                run += 1;
                if run == terminator_zeros {
                    end = Some(j + 1);
                    break;
                }
            } else {
                run = 0;
            }
        }

        match end {
            Some(end) => {
                frames.push(Frame {
                    index: frames.len(),
                    bits: bits[start..end].to_string(),
                });
                pos = end;
            }
            // No terminator remains anywhere past this point, so no later
            // preamble can complete a frame either.
            None => break,
        }
    }

    frames
}

/// Frame scan with the protocol delimiters.
pub fn extract_frames_default(bits: &str) -> Vec<Frame> {
    extract_frames(bits, SYNC_PREAMBLE, TERMINATOR_ZERO_RUN)
}
