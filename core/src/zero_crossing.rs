use std::collections::BTreeMap;

use crate::{
    BIT_PERIOD_MAX, BIT_PERIOD_MIN, SPACE_PERIOD_MIN, START_ENERGY_THRESHOLD,
    START_WINDOW_SAMPLES,
};

/// Raw demodulation symbol, one per in-band zero-crossing period.
///
/// Space markers arrive in adjacent pairs (a zero bit spans two sync
/// periods) and are collapsed later by the bitstream cleanup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Short period, half of an encoded zero bit
    Space,
    /// Long period, a one bit
    One,
}

/// Diagnostic period-length histogram, ordered by ascending length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodHistogram {
    counts: BTreeMap<usize, u32>,
}

impl PeriodHistogram {
    fn record(&mut self, period: usize) {
        *self.counts.entry(period).or_insert(0) += 1;
    }

    /// (length, count) pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().map(|(&period, &count)| (period, count))
    }

    pub fn count(&self, period: usize) -> u32 {
        self.counts.get(&period).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Tunable demodulation parameters. The defaults are the protocol values
/// the encoding bands were measured at.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Samples summed by the start-of-signal energy detector
    pub energy_window: usize,
    /// Sum of absolute sample values that marks the usable signal start
    pub energy_threshold: i32,
    /// Exclusive lower bound of the space-marker period band
    pub space_period_min: usize,
    /// Inclusive lower bound of the one-bit period band (and exclusive
    /// upper bound of the space band)
    pub bit_period_min: usize,
    /// Exclusive upper bound of the one-bit period band
    pub bit_period_max: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            energy_window: START_WINDOW_SAMPLES,
            energy_threshold: START_ENERGY_THRESHOLD,
            space_period_min: SPACE_PERIOD_MIN,
            bit_period_min: BIT_PERIOD_MIN,
            bit_period_max: BIT_PERIOD_MAX,
        }
    }
}

/// Walks one channel of integer samples, measuring the sample count
/// between consecutive rising zero-crossings and classifying each period
/// into a symbol.
pub struct ZeroCrossingAnalyzer {
    config: AnalyzerConfig,
}

impl ZeroCrossingAnalyzer {
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// First index where the energy window exceeds the threshold, skipping
    /// leading silence. `None` when the whole recording stays below it.
    pub fn find_start(&self, samples: &[i16]) -> Option<usize> {
        samples.windows(self.config.energy_window).position(|window| {
            let level: i32 = window.iter().map(|&s| i32::from(s).abs()).sum();
            level > self.config.energy_threshold
        })
    }

    /// Demodulate a channel into the raw symbol stream plus the period
    /// histogram. A recording with no detectable signal start yields both
    /// empty.
    pub fn analyze(&self, samples: &[i16]) -> (Vec<Symbol>, PeriodHistogram) {
        match self.find_start(samples) {
            Some(start) => self.scan(samples, start),
            None => {
                log::debug!("no window exceeded the start energy threshold");
                (Vec::new(), PeriodHistogram::default())
            }
        }
    }

    fn scan(&self, samples: &[i16], start: usize) -> (Vec<Symbol>, PeriodHistogram) {
        let mut symbols = Vec::new();
        let mut histogram = PeriodHistogram::default();
        let mut period = 1usize;

        for pair in samples[start..].windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            let rising = previous < current;
            let crossing = (previous > 0 && current < 0) || (previous < 0 && current > 0);

            // A period boundary is a sign crossing on a rising slope.
            if crossing && rising {
                histogram.record(period.max(1));
                if let Some(symbol) = self.classify(period) {
                    symbols.push(symbol);
                }
                period = 1;
            }
            // The counter also advances over the boundary itself, so a
            // recorded period is one more than the crossing distance. The
            // band edges assume exactly this counter.
            period += 1;
        }

        (symbols, histogram)
    }

    fn classify(&self, period: usize) -> Option<Symbol> {
        if period > self.config.space_period_min && period < self.config.bit_period_min {
            Some(Symbol::Space)
        } else if period >= self.config.bit_period_min && period < self.config.bit_period_max {
            Some(Symbol::One)
        } else {
            None
        }
    }
}

impl Default for ZeroCrossingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
