//! Power-loss monitor — the hexagonal core.
//!
//! [`PowerLossMonitor`] owns the claimed alert line and runs one
//! observation cycle.  All I/O flows through port traits injected at
//! call sites, making the whole cycle testable with mock adapters.
//!
//! ```text
//!  AlertPinPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                   │    PowerLossMonitor     │
//!  HostPowerPort ◀──│  check · wait · halt    │
//!                   └────────────────────────┘
//! ```
//!
//! ## Observation cycle
//!
//! | Line at start | Behaviour                                        |
//! |---------------|--------------------------------------------------|
//! | Low           | Alert already active — halt without waiting      |
//! | High          | Block on a rising edge, then halt                |
//!
//! The edge wait has **no timeout and no cancellation**; the process is
//! suspended until the hardware layer reports the transition.  On both
//! paths the line is released before the halt is requested, and the
//! halt is requested exactly once.

use log::{info, warn};

use crate::events::MonitorEvent;
use crate::ports::{AlertPinPort, EventSink, HostPowerPort, PinLevel};

/// Which path of the observation cycle triggered the halt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// The line already read low when the monitor started.
    AlertAtStartup,
    /// A rising edge was observed after an arbitrary wait.
    RisingEdge,
}

/// One-shot supervisor of the power-alert line.
///
/// Constructed around an already-claimed pin; [`run`](Self::run)
/// consumes the monitor, so a second cycle on the same pin is
/// unrepresentable.
pub struct PowerLossMonitor<P: AlertPinPort> {
    pin: P,
    pin_number: u8,
}

impl<P: AlertPinPort> PowerLossMonitor<P> {
    /// Wrap a claimed alert line.  `pin_number` is only used for
    /// event reporting.
    pub fn new(pin: P, pin_number: u8) -> Self {
        Self { pin, pin_number }
    }

    /// Run one full observation cycle: check level → wait for the edge
    /// if needed → release the line → request the halt.
    ///
    /// Returns which path fired.  Any port failure aborts the cycle and
    /// propagates; in particular the halt is never requested after a
    /// failed read, wait, or release.
    pub fn run(
        self,
        host: &mut impl HostPowerPort,
        sink: &mut impl EventSink,
    ) -> crate::error::Result<AlertOutcome> {
        let Self { mut pin, pin_number } = self;

        sink.emit(&MonitorEvent::Armed { pin: pin_number });

        let outcome = match pin.level()? {
            PinLevel::Low => {
                // Fail-safe shortcut: never wait on a condition that
                // has already occurred.
                warn!("alert line already low at startup — skipping edge wait");
                sink.emit(&MonitorEvent::AlertActiveAtStartup);
                AlertOutcome::AlertAtStartup
            }
            PinLevel::High => {
                sink.emit(&MonitorEvent::AwaitingRisingEdge);
                info!("alert line high — blocking until rising edge");
                pin.wait_rising_edge()?;
                sink.emit(&MonitorEvent::RisingEdgeDetected);
                AlertOutcome::RisingEdge
            }
        };

        // Release strictly precedes the halt so the line is back in its
        // pre-claim state when the OS goes down.
        pin.release()?;
        sink.emit(&MonitorEvent::PinReleased);

        sink.emit(&MonitorEvent::HaltRequested);
        info!("power loss confirmed ({outcome:?}) — requesting host halt");
        host.halt()?;

        Ok(outcome)
    }
}
