use log::{debug, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Safe to call more than once; only the first call installs the logger
pub fn init_logger() {
    INIT.call_once(|| {
        let result = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("premium_services", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        // Another logger (e.g. from a host application) may already be installed
        if result.is_ok() {
            info!("Logging system initialized");
        }
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log the start of a provider API call
    pub fn api_start(provider: &str, endpoint: &str) {
        debug!("API: Starting {} {}", provider, endpoint);
    }

    /// Log a completed provider API call
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: u64) {
        info!(
            "API: {} {} {} in {}ms",
            provider, endpoint, status, duration_ms
        );
    }

    /// Log catalogue mutations
    pub fn catalogue_change(operation: &str, added: usize, total: usize) {
        info!(
            "Catalogue: {} added {} service(s), {} total",
            operation, added, total
        );
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: &str) {
        debug!(
            "Performance: {} took {}ms ({})",
            operation, duration_ms, additional_info
        );
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, info);
        duration
    }
}
