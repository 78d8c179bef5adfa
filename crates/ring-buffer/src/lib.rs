//! Bounded Ring Buffer
//!
//! Provides a fixed-capacity, thread-safe FIFO that decouples sensor
//! sampling routines from the routine that logs or transmits their data.

mod buffer;
mod entry;
mod error;

pub use buffer::RingBuffer;
pub use entry::{Entry, SensorKind};
pub use error::BufferError;
