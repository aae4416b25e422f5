//! Host shutdown adapter — invokes the OS halt command.
//!
//! Implements [`HostPowerPort`] by spawning the configured shutdown
//! program (by default `/sbin/shutdown -h now`) and waiting for it to
//! report back.  Needs root, or a sudoers/polkit rule covering the
//! shutdown binary.

use std::process::Command;

use log::info;

use crate::config::MonitorConfig;
use crate::ports::{HostPowerError, HostPowerPort};

/// Adapter that halts the host through an external privileged command.
pub struct ShutdownCommand {
    program: String,
    args: Vec<String>,
}

impl ShutdownCommand {
    /// Build the adapter from the configured program and arguments.
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self {
            program: config.shutdown_program.clone(),
            args: config.shutdown_args.clone(),
        }
    }
}

impl HostPowerPort for ShutdownCommand {
    fn halt(&mut self) -> Result<(), HostPowerError> {
        info!("exec: {} {}", self.program, self.args.join(" "));
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|e| HostPowerError::Spawn(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(HostPowerError::CommandFailed(status.code()))
        }
    }
}
