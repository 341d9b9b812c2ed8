use log::{debug, error, info, warn, Level};

/// Component-tagged logging on top of the `log` facade.
///
/// The component name becomes the log target, so the browser console shows
/// which part of the client produced each line.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        error!(target: component, "{}", message);
    }

    /// Install the browser console logger. Call once at startup.
    pub fn init(level: Level) {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
}
