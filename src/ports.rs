//! Port traits — the hexagonal boundary between the monitor core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PowerLossMonitor (domain)
//! ```
//!
//! Driven adapters (the GPIO line, the host shutdown facility, event
//! sinks) implement these traits.  The
//! [`PowerLossMonitor`](crate::monitor::PowerLossMonitor) consumes them
//! via generics, so the core never touches hardware directly.

use crate::events::MonitorEvent;

// ───────────────────────────────────────────────────────────────
// Alert pin port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Logic level of the monitored line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// The supervisor alert line.  Constructing an implementation claims the
/// line from the platform GPIO layer; [`release`](AlertPinPort::release)
/// hands it back.
///
/// Implementations MUST make [`wait_rising_edge`](AlertPinPort::wait_rising_edge)
/// a genuine blocking call with **no timeout and no cancellation** — the
/// monitor relies on it returning only once a low→high transition has
/// been observed (or the hardware layer has failed).
pub trait AlertPinPort {
    /// Read the current logic level of the line.
    fn level(&mut self) -> Result<PinLevel, GpioError>;

    /// Block the calling thread until a rising edge is observed.
    fn wait_rising_edge(&mut self) -> Result<(), GpioError>;

    /// Release the claimed line, restoring its pre-claim state.
    /// Consumes the port: after release the pin cannot be touched again.
    fn release(self) -> Result<(), GpioError>;
}

// ───────────────────────────────────────────────────────────────
// Host power port (driven adapter: domain → operating system)
// ───────────────────────────────────────────────────────────────

/// The host's privileged shutdown facility.
///
/// Implementations invoke immediate halt-and-power-off semantics
/// (`shutdown -h now`).  The monitor calls this at most once per run,
/// and only after the alert pin has been released.
pub trait HostPowerPort {
    /// Request an immediate halt of the host.
    fn halt(&mut self) -> Result<(), HostPowerError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The monitor emits structured [`MonitorEvent`]s through this port.
/// Adapters decide where they go (process log, syslog, test recorder).
pub trait EventSink {
    fn emit(&mut self, event: &MonitorEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`AlertPinPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpioError {
    /// The GPIO device could not be opened or the line is already in use.
    Claim(String),
    /// Reading the line level failed.
    Read(String),
    /// Arming or polling the edge interrupt failed.
    EdgeWait(String),
    /// Releasing the line failed.
    Release(String),
}

/// Errors from [`HostPowerPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPowerError {
    /// The shutdown binary could not be spawned.
    Spawn(String),
    /// The shutdown command ran but reported failure.
    CommandFailed(Option<i32>),
}

impl core::fmt::Display for GpioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Claim(msg) => write!(f, "pin claim failed: {msg}"),
            Self::Read(msg) => write!(f, "level read failed: {msg}"),
            Self::EdgeWait(msg) => write!(f, "edge wait failed: {msg}"),
            Self::Release(msg) => write!(f, "pin release failed: {msg}"),
        }
    }
}

impl core::fmt::Display for HostPowerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "shutdown spawn failed: {msg}"),
            Self::CommandFailed(Some(code)) => {
                write!(f, "shutdown command exited with status {code}")
            }
            Self::CommandFailed(None) => write!(f, "shutdown command killed by signal"),
        }
    }
}

impl std::error::Error for GpioError {}
impl std::error::Error for HostPowerError {}
