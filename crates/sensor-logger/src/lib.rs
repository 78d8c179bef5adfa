//! Sensor Logger
//!
//! Runs simulated sensor sampling routines that push into a shared
//! [`ring_buffer::RingBuffer`] while a single consumer drains and logs it.

mod config;
mod error;
mod sampler;
mod scenario;
mod session;

pub use config::{LoggerConfig, OnFull};
pub use error::LoggerError;
pub use sampler::SensorSampler;
pub use scenario::{run_reference_scenario, ScenarioReport, ScenarioStep};
pub use session::{run_session, SessionSummary, LOGGER_SLOTS};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging(level: Level) -> Result<(), LoggerError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
