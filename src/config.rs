//! Monitor configuration parameters
//!
//! All tunable parameters for the power-loss monitor.
//! Values can be overridden via an optional JSON file; defaults
//! reproduce the shipped supervisor-board wiring.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::pins;

/// Default location of the optional config file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/powercircuit/config.json";

/// Core monitor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    // --- Alert input ---
    /// BCM number of the power-alert input line.
    pub alert_pin: u8,

    // --- Host shutdown ---
    /// Program invoked to halt the host.
    pub shutdown_program: String,
    /// Arguments passed to the shutdown program.
    pub shutdown_args: Vec<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            alert_pin: pins::POWER_ALERT_GPIO,
            shutdown_program: "/sbin/shutdown".to_string(),
            shutdown_args: vec!["-h".to_string(), "now".to_string()],
        }
    }
}

impl MonitorConfig {
    /// Range-check the configuration.  Invalid values are rejected, not
    /// clamped.
    pub fn validate(&self) -> Result<(), &'static str> {
        // BCM 0–27 covers the 40-pin header GPIO lines.
        if self.alert_pin > 27 {
            return Err("alert_pin outside the BCM 0-27 header range");
        }
        if self.shutdown_program.is_empty() {
            return Err("shutdown_program must not be empty");
        }
        Ok(())
    }

    /// Parse a config from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the config file at `path`.  A missing file silently yields
    /// the defaults; an unreadable, corrupt, or invalid file yields the
    /// defaults with a warning.  Validation failures fall back rather
    /// than clamp: a bad pin number must not re-route the monitor.
    pub fn load_or_default(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(e) => {
                warn!("config read failed ({e}), using defaults");
                return Self::default();
            }
        };

        match Self::from_json(&raw) {
            Ok(cfg) => match cfg.validate() {
                Ok(()) => cfg,
                Err(msg) => {
                    warn!("config rejected ({msg}), using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!("config parse failed ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = MonitorConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.alert_pin, pins::POWER_ALERT_GPIO);
        assert_eq!(c.shutdown_program, "/sbin/shutdown");
        assert_eq!(c.shutdown_args, ["-h", "now"]);
    }

    #[test]
    fn out_of_range_pin_is_rejected() {
        let c = MonitorConfig {
            alert_pin: 40,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn empty_shutdown_program_is_rejected() {
        let c = MonitorConfig {
            shutdown_program: String::new(),
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let c = MonitorConfig::from_json(r#"{ "alert_pin": 4 }"#).unwrap();
        assert_eq!(c.alert_pin, 4);
        assert_eq!(c.shutdown_program, "/sbin/shutdown");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let c = MonitorConfig::load_or_default(Path::new("/nonexistent/powercircuit.json"));
        assert_eq!(c, MonitorConfig::default());
    }
}
