//! Sensor Logger - Main Entry Point
//!
//! Usage: `sensor-logger [CONFIG_FILE]`

use anyhow::Context;
use sensor_logger::{init_logging, run_reference_scenario, run_session, LoggerConfig};
use std::path::PathBuf;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = LoggerConfig::load(config_path.as_deref())
        .context("failed to load sensor logger configuration")?;

    init_logging(config.level()?)?;

    info!("=== Sensor Logger v{} ===", env!("CARGO_PKG_VERSION"));

    let report = run_reference_scenario();
    info!(
        "Reference scenario: {} steps, {} rejected",
        report.steps.len(),
        report.rejected()
    );

    run_session(&config)?;

    Ok(())
}
