pub mod service;

pub use service::ServiceDiscovery;
