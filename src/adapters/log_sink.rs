//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured monitor events to the
//! process logger.  A future syslog or MQTT adapter would implement the
//! same trait.

use log::info;

use crate::events::MonitorEvent;
use crate::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Armed { pin } => {
                info!("ARM   | GPIO{pin} claimed as alert input");
            }
            MonitorEvent::AlertActiveAtStartup => {
                info!("ALERT | line low at startup — alert already active");
            }
            MonitorEvent::AwaitingRisingEdge => {
                info!("WAIT  | blocking on rising edge (no timeout)");
            }
            MonitorEvent::RisingEdgeDetected => {
                info!("ALERT | rising edge observed");
            }
            MonitorEvent::PinReleased => {
                info!("CLEAN | alert line released");
            }
            MonitorEvent::HaltRequested => {
                info!("HALT  | invoking host shutdown");
            }
        }
    }
}
