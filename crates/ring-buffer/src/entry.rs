//! Sensor entries stored in the ring buffer

use std::fmt;

/// Category of the sensor that produced an entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SensorKind {
    #[default]
    Temperature,
    Pressure,
    /// Payload is a frame count rather than a reading
    Camera,
    /// Caller-defined category
    Other(u16),
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorKind::Temperature => f.write_str("temperature"),
            SensorKind::Pressure => f.write_str("pressure"),
            SensorKind::Camera => f.write_str("camera"),
            SensorKind::Other(id) => write!(f, "sensor-{id}"),
        }
    }
}

/// A tagged sensor value, copied into and out of the buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Entry {
    kind: SensorKind,
    value: u32,
}

impl Entry {
    /// Create an entry for any sensor category
    pub const fn new(kind: SensorKind, value: u32) -> Self {
        Self { kind, value }
    }

    pub const fn temperature(value: u32) -> Self {
        Self::new(SensorKind::Temperature, value)
    }

    pub const fn pressure(value: u32) -> Self {
        Self::new(SensorKind::Pressure, value)
    }

    /// Camera entries carry the frame count
    pub const fn camera(frame_count: u32) -> Self {
        Self::new(SensorKind::Camera, frame_count)
    }

    pub const fn kind(&self) -> SensorKind {
        self.kind
    }

    pub const fn value(&self) -> u32 {
        self.value
    }
}
