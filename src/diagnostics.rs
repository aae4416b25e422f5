//! Runtime diagnostics.
//!
//! The monitor has no persistent store, so the panic hook's only job is
//! to make sure a panic reaches the log (the default hook writes to
//! stderr, which is lost under some service managers) before the
//! process aborts.

/// Install a panic hook that routes the panic payload through the
/// logger.  Must be called once during init, after the logger is ready.
pub fn install_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        let reason = if let Some(msg) = info.payload().downcast_ref::<&str>() {
            *msg
        } else if let Some(msg) = info.payload().downcast_ref::<String>() {
            msg.as_str()
        } else {
            "unknown panic"
        };

        log::error!("PANIC: {}", reason);
    }));
}
