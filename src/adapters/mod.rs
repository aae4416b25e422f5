//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements    | Connects to                    |
//! |--------------|---------------|--------------------------------|
//! | `gpio`       | AlertPinPort  | Raspberry Pi GPIO (`rpi` only) |
//! | `host_power` | HostPowerPort | `/sbin/shutdown` via exec      |
//! | `log_sink`   | EventSink     | Process log output             |

#[cfg(feature = "rpi")]
pub mod gpio;
pub mod host_power;
pub mod log_sink;
