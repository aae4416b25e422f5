//! Power-loss monitor library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. Raspberry-Pi-specific code lives in `adapters::gpio`,
//! guarded by the `rpi` feature.

#![deny(unused_must_use)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod events;
pub mod monitor;
pub mod pins;
pub mod ports;

pub mod adapters;
