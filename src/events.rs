//! Outbound monitor events.
//!
//! The [`PowerLossMonitor`](crate::monitor::PowerLossMonitor) emits these
//! through the [`EventSink`](crate::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — the shipped adapter
//! writes them to the process log.

/// Structured events emitted by the monitor core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorEvent {
    /// The alert line has been claimed and configured as an input.
    Armed { pin: u8 },

    /// The line already read low at startup — the alert predates us.
    AlertActiveAtStartup,

    /// The line read high; blocking until a rising edge arrives.
    AwaitingRisingEdge,

    /// A rising edge was observed on the alert line.
    RisingEdgeDetected,

    /// The claimed line has been released back to the platform.
    PinReleased,

    /// The host shutdown facility is about to be invoked.
    HaltRequested,
}
