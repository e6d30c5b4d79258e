pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use application::ServiceDiscovery;
pub use domain::{DiscoveryConfig, DiscoveryReport, ProviderOutcome};
pub use infrastructure::HttpProviderClient;
pub use traits::{ProviderClient, ProviderEndpoint};
