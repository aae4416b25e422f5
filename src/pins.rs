//! GPIO pin assignment for the power-supervisor header.
//!
//! Single source of truth — the config default references this module
//! rather than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Power supervisor circuit
// ---------------------------------------------------------------------------

/// Digital input: power-loss alert from the supervisor circuit.
///
/// BCM numbering; this is physical pin 10 on the 40-pin header.
///
/// Polarity matches the supervisor board wiring and must not be
/// changed in software: a line reading low at boot is an
/// already-latched alert, and afterwards the alert is signalled by a
/// low→high transition.
pub const POWER_ALERT_GPIO: u8 = 15;
