use crate::modules::discovery::{
    domain::{DiscoveryConfig, DiscoveryReport, ProviderOutcome},
    infrastructure::HttpProviderClient,
    traits::{ProviderClient, ProviderEndpoint},
};
use crate::shared::{domain::ServiceRecord, errors::AppResult};
use std::sync::Arc;

/// Discovers premium services offered by the configured providers
///
/// Provider failures never escape this type: they are logged and reported as
/// [`ProviderOutcome::Failed`]. Providers are asked one after another, each once.
pub struct ServiceDiscovery {
    client: Arc<dyn ProviderClient>,
    providers: Vec<String>,
}

impl ServiceDiscovery {
    pub fn new(config: &DiscoveryConfig) -> AppResult<Self> {
        let client = Arc::new(HttpProviderClient::new(config)?);
        Ok(Self::with_client(client, config.providers.clone()))
    }

    pub fn with_client(client: Arc<dyn ProviderClient>, providers: Vec<String>) -> Self {
        Self { client, providers }
    }

    pub fn providers(&self) -> &[String] {
        &self.providers
    }

    /// Run one discovery pass and keep the outcome of every provider
    pub async fn discover(&self) -> DiscoveryReport {
        let mut report = DiscoveryReport::new();

        for provider in &self.providers {
            let outcome = match self
                .client
                .fetch_records(provider, ProviderEndpoint::Services)
                .await
            {
                Ok(services) => {
                    log::debug!(
                        "Discovered {} services from {}",
                        services.len(),
                        provider
                    );
                    ProviderOutcome::Fetched {
                        provider: provider.clone(),
                        services,
                    }
                }
                Err(e) => {
                    log::error!("Failed to fetch services from {}: {}", provider, e);
                    ProviderOutcome::Failed {
                        provider: provider.clone(),
                        reason: e.to_string(),
                    }
                }
            };
            report.push(outcome);
        }

        if report.is_empty() {
            log::warn!("No services discovered across all providers.");
        }

        report
    }

    /// Flat list of every service the providers returned, in provider order
    pub async fn discover_services(&self) -> Vec<ServiceRecord> {
        self.discover().await.into_services()
    }

    /// Full catalogue of one provider, `None` when it could not be fetched
    pub async fn fetch_provider_catalogue(&self, provider: &str) -> Option<Vec<ServiceRecord>> {
        match self
            .client
            .fetch_records(provider, ProviderEndpoint::Catalogue)
            .await
        {
            Ok(services) => Some(services),
            Err(e) => {
                log::error!("Request failed to provider {}: {}", provider, e);
                None
            }
        }
    }
}
