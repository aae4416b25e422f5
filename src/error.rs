//! Unified error types for the monitor.
//!
//! A single `Error` enum that every subsystem converts into, keeping
//! the binary's error handling uniform: port adapters return their own
//! typed errors, which funnel into this type via `From` on the way up
//! to `main`.

use std::fmt;

use crate::ports::{GpioError, HostPowerError};

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the monitor funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The GPIO layer failed (claim, read, edge wait, or release).
    Gpio(GpioError),
    /// The host shutdown facility failed.
    Power(HostPowerError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Power(e) => write!(f, "power: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

impl From<HostPowerError> for Error {
    fn from(e: HostPowerError) -> Self {
        Self::Power(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Monitor-wide `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
