//! Simulated sensor sampling routines

use ring_buffer::{Entry, SensorKind};

/// Deterministic stand-in for a sampling routine on one sensor.
///
/// Readings sweep `base..base + spread` so that consecutive samples differ
/// and every value stays in a plausible range for the sensor.
#[derive(Debug, Clone)]
pub struct SensorSampler {
    kind: SensorKind,
    base: u32,
    spread: u32,
    step: u32,
    /// Samples taken so far
    sequence: u32,
}

impl SensorSampler {
    /// Create a sampler for a given sensor kind
    pub fn new(kind: SensorKind) -> Self {
        let (base, spread, step) = match kind {
            // °C
            SensorKind::Temperature => (20, 80, 7),
            // kPa
            SensorKind::Pressure => (90, 30, 3),
            // frame counter, never wraps within a session
            SensorKind::Camera => (0, u32::MAX, 1),
            SensorKind::Other(_) => (0, 1000, 13),
        };
        Self {
            kind,
            base,
            spread,
            step,
            sequence: 0,
        }
    }

    /// Sampler for the n-th producer: the built-in kinds first, then custom ones
    pub fn for_producer(index: usize) -> Self {
        let kind = match index {
            0 => SensorKind::Temperature,
            1 => SensorKind::Pressure,
            2 => SensorKind::Camera,
            n => SensorKind::Other(u16::try_from(n).unwrap_or(u16::MAX)),
        };
        Self::new(kind)
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Take the next reading
    pub fn sample(&mut self) -> Entry {
        let offset = self.sequence.wrapping_mul(self.step) % self.spread;
        self.sequence = self.sequence.wrapping_add(1);
        Entry::new(self.kind, self.base + offset)
    }
}

impl Iterator for SensorSampler {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        Some(self.sample())
    }
}
