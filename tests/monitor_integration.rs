//! Integration tests: PowerLossMonitor → ports.
//!
//! The pin and host mocks share one call trace so the tests can assert
//! on cross-port ordering (release before halt) as well as per-port
//! counts.

use std::cell::RefCell;
use std::rc::Rc;

use powercircuit::events::MonitorEvent;
use powercircuit::monitor::{AlertOutcome, PowerLossMonitor};
use powercircuit::ports::{
    AlertPinPort, EventSink, GpioError, HostPowerError, HostPowerPort, PinLevel,
};

// ── Mock implementations ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    ReadLevel,
    WaitRisingEdge,
    Release,
    Halt,
}

type Trace = Rc<RefCell<Vec<Call>>>;

struct MockPin {
    trace: Trace,
    level: PinLevel,
    edge_result: Result<(), GpioError>,
    release_result: Result<(), GpioError>,
}

impl MockPin {
    fn new(trace: &Trace, level: PinLevel) -> Self {
        Self {
            trace: trace.clone(),
            level,
            edge_result: Ok(()),
            release_result: Ok(()),
        }
    }
}

impl AlertPinPort for MockPin {
    fn level(&mut self) -> Result<PinLevel, GpioError> {
        self.trace.borrow_mut().push(Call::ReadLevel);
        Ok(self.level)
    }

    fn wait_rising_edge(&mut self) -> Result<(), GpioError> {
        self.trace.borrow_mut().push(Call::WaitRisingEdge);
        self.edge_result.clone()
    }

    fn release(self) -> Result<(), GpioError> {
        self.trace.borrow_mut().push(Call::Release);
        self.release_result
    }
}

struct MockHost {
    trace: Trace,
    result: Result<(), HostPowerError>,
}

impl MockHost {
    fn new(trace: &Trace) -> Self {
        Self {
            trace: trace.clone(),
            result: Ok(()),
        }
    }
}

impl HostPowerPort for MockHost {
    fn halt(&mut self) -> Result<(), HostPowerError> {
        self.trace.borrow_mut().push(Call::Halt);
        self.result.clone()
    }
}

struct RecordingSink {
    events: Vec<MonitorEvent>,
}

impl RecordingSink {
    fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &MonitorEvent) {
        self.events.push(event.clone());
    }
}

fn run_with(level: PinLevel) -> (Result<AlertOutcome, powercircuit::error::Error>, Trace, RecordingSink) {
    let trace: Trace = Rc::new(RefCell::new(Vec::new()));
    let pin = MockPin::new(&trace, level);
    let mut host = MockHost::new(&trace);
    let mut sink = RecordingSink::new();
    let result = PowerLossMonitor::new(pin, 15).run(&mut host, &mut sink);
    (result, trace, sink)
}

fn halt_count(trace: &Trace) -> usize {
    trace.borrow().iter().filter(|c| **c == Call::Halt).count()
}

// ── Startup-level shortcut ────────────────────────────────────

#[test]
fn alert_low_at_startup_halts_without_edge_wait() {
    let (result, trace, _) = run_with(PinLevel::Low);
    assert_eq!(result.unwrap(), AlertOutcome::AlertAtStartup);
    assert_eq!(
        *trace.borrow(),
        vec![Call::ReadLevel, Call::Release, Call::Halt],
        "low at startup must skip the edge wait entirely"
    );
}

#[test]
fn high_line_halts_only_after_edge() {
    let (result, trace, _) = run_with(PinLevel::High);
    assert_eq!(result.unwrap(), AlertOutcome::RisingEdge);
    assert_eq!(
        *trace.borrow(),
        vec![Call::ReadLevel, Call::WaitRisingEdge, Call::Release, Call::Halt],
    );
}

// ── Release-before-halt, both paths ───────────────────────────

#[test]
fn pin_released_before_halt_on_both_paths() {
    for level in [PinLevel::Low, PinLevel::High] {
        let (result, trace, _) = run_with(level);
        assert!(result.is_ok());
        let trace = trace.borrow();
        let release_at = trace.iter().position(|c| *c == Call::Release).unwrap();
        let halt_at = trace.iter().position(|c| *c == Call::Halt).unwrap();
        assert!(
            release_at < halt_at,
            "release must precede halt (path: {level:?})"
        );
    }
}

// ── Exactly one halt ──────────────────────────────────────────

#[test]
fn halt_invoked_exactly_once_on_both_paths() {
    for level in [PinLevel::Low, PinLevel::High] {
        let (result, trace, _) = run_with(level);
        assert!(result.is_ok());
        assert_eq!(halt_count(&trace), 1, "path: {level:?}");
    }
}

// ── No halt while the line has not transitioned ───────────────

#[test]
fn no_halt_when_edge_wait_never_completes() {
    let trace: Trace = Rc::new(RefCell::new(Vec::new()));
    let mut pin = MockPin::new(&trace, PinLevel::High);
    pin.edge_result = Err(GpioError::EdgeWait("interrupt poll aborted".into()));
    let mut host = MockHost::new(&trace);
    let mut sink = RecordingSink::new();

    let result = PowerLossMonitor::new(pin, 15).run(&mut host, &mut sink);
    assert!(result.is_err());
    assert_eq!(halt_count(&trace), 0, "halt must wait for the transition");
}

#[test]
fn failed_release_suppresses_halt() {
    let trace: Trace = Rc::new(RefCell::new(Vec::new()));
    let mut pin = MockPin::new(&trace, PinLevel::Low);
    pin.release_result = Err(GpioError::Release("line busy".into()));
    let mut host = MockHost::new(&trace);
    let mut sink = RecordingSink::new();

    let result = PowerLossMonitor::new(pin, 15).run(&mut host, &mut sink);
    assert!(result.is_err());
    assert_eq!(halt_count(&trace), 0);
}

// ── Event stream ──────────────────────────────────────────────

#[test]
fn event_stream_narrates_the_edge_path() {
    let (_, _, sink) = run_with(PinLevel::High);
    assert_eq!(
        sink.events,
        vec![
            MonitorEvent::Armed { pin: 15 },
            MonitorEvent::AwaitingRisingEdge,
            MonitorEvent::RisingEdgeDetected,
            MonitorEvent::PinReleased,
            MonitorEvent::HaltRequested,
        ],
    );
}

#[test]
fn event_stream_narrates_the_startup_shortcut() {
    let (_, _, sink) = run_with(PinLevel::Low);
    assert_eq!(
        sink.events,
        vec![
            MonitorEvent::Armed { pin: 15 },
            MonitorEvent::AlertActiveAtStartup,
            MonitorEvent::PinReleased,
            MonitorEvent::HaltRequested,
        ],
    );
}
