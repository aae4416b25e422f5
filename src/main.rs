//! powercircuit — Main Entry Point
//!
//! Hexagonal architecture around a single blocking observation cycle.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                Adapters (outer ring)                 │
//! │                                                      │
//! │  GpioAlertPin     ShutdownCommand    LogEventSink    │
//! │  (AlertPinPort)   (HostPowerPort)    (EventSink)     │
//! │                                                      │
//! │  ────────────── Port Trait Boundary ──────────────   │
//! │                                                      │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │        PowerLossMonitor (pure logic)           │  │
//! │  │  check level · wait rising edge · halt once    │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use anyhow::Result;
use log::info;

use powercircuit::adapters::gpio::GpioAlertPin;
use powercircuit::adapters::host_power::ShutdownCommand;
use powercircuit::adapters::log_sink::LogEventSink;
use powercircuit::config::{DEFAULT_CONFIG_PATH, MonitorConfig};
use powercircuit::diagnostics;
use powercircuit::error::Error;
use powercircuit::monitor::PowerLossMonitor;

fn main() -> Result<()> {
    // ── 1. Bootstrap ──────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("powercircuit v{}", env!("CARGO_PKG_VERSION"));
    diagnostics::install_panic_handler();

    // ── 2. Load config (file or defaults) ─────────────────────
    let config = MonitorConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH));
    info!(
        "alert input: GPIO{} | halt: {} {}",
        config.alert_pin,
        config.shutdown_program,
        config.shutdown_args.join(" ")
    );

    // ── 3. Construct adapters ─────────────────────────────────
    let pin = GpioAlertPin::claim(config.alert_pin).map_err(Error::from)?;
    let mut host = ShutdownCommand::from_config(&config);
    let mut sink = LogEventSink::new();

    // ── 4. Observe — blocks until power loss, then halts ──────
    let outcome = PowerLossMonitor::new(pin, config.alert_pin).run(&mut host, &mut sink)?;
    info!("halt issued ({outcome:?}); exiting");

    Ok(())
}
