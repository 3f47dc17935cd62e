use crate::zero_crossing::Symbol;

/// Result of collapsing the raw symbol stream into bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanBitstream {
    /// '0'/'1' characters, leading zeros stripped
    pub bits: String,
    /// Space markers left without a partner; dropped, reported upstream
    pub unpaired_spaces: usize,
}

/// Collapse the raw symbol stream into a clean bitstream.
///
/// A zero bit is encoded as two consecutive space markers, so each
/// leftmost adjacent pair becomes a single '0'. A marker without an
/// adjacent partner is dropped and counted. Leading zeros are idle
/// pre-sync padding and are stripped last.
pub fn collapse_symbols(symbols: &[Symbol]) -> CleanBitstream {
    let mut bits = String::with_capacity(symbols.len());
    let mut unpaired_spaces = 0;
    let mut i = 0;

    while i < symbols.len() {
        match symbols[i] {
            Symbol::One => {
                bits.push('1');
                i += 1;
            }
            Symbol::Space => {
                if symbols.get(i + 1) == Some(&Symbol::Space) {
                    bits.push('0');
                    i += 2;
                } else {
                    unpaired_spaces += 1;
                    i += 1;
                }
            }
        }
    }

    let stripped = bits.trim_start_matches('0');
    let bits = if stripped.len() == bits.len() {
        bits
    } else {
        stripped.to_string()
    };

    CleanBitstream {
        bits,
        unpaired_spaces,
    }
}
