pub mod discovery_config;
pub mod discovery_report;

pub use discovery_config::DiscoveryConfig;
pub use discovery_report::{DiscoveryReport, ProviderOutcome};
