use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under the `basket_api` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "basket_api", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "basket_api", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "basket_api", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "basket_api", "{}", message);
    }
}
