pub mod http_provider_client;

pub use http_provider_client::HttpProviderClient;
