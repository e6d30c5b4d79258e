use crate::modules::discovery::ServiceDiscovery;
use crate::shared::{domain::ServiceRecord, utils::LogContext};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory catalogue of premium services available to businesses
///
/// Insertion order is preserved and duplicates are kept. Records coming from
/// discovery are trusted as-is; records added one at a time must carry every
/// required field.
pub struct ServiceCatalogue {
    discovery: Arc<ServiceDiscovery>,
    services: RwLock<Vec<ServiceRecord>>,
}

impl ServiceCatalogue {
    pub fn new(discovery: Arc<ServiceDiscovery>) -> Self {
        Self {
            discovery,
            services: RwLock::new(Vec::new()),
        }
    }

    /// Append everything discovery returns, without validation
    pub async fn update_catalogue(&self) {
        log::info!("Starting service catalogue update.");
        let discovered = self.discovery.discover_services().await;
        let added = discovered.len();

        let mut services = self.services.write().await;
        services.extend(discovered);

        log::info!("Catalogue updated with {} new services.", added);
        LogContext::catalogue_change("update", added, services.len());
    }

    /// Add a single record; invalid records are logged and dropped
    pub async fn add_service(&self, service: ServiceRecord) {
        if !Self::is_valid(&service) {
            log::error!(
                "Invalid service data (missing {}). Service not added.",
                service.missing_required_fields().join(", ")
            );
            return;
        }

        let name = service.display_name();
        self.services.write().await.push(service);
        log::info!("Service {} added to catalogue.", name);
    }

    /// A record is valid when every required key is present, whatever its value
    pub fn is_valid(service: &ServiceRecord) -> bool {
        service.has_required_fields()
    }

    /// Snapshot of the catalogue; changes to it never reach the catalogue
    pub async fn services(&self) -> Vec<ServiceRecord> {
        self.services.read().await.clone()
    }

    /// First record whose identifier equals `service_id`
    pub async fn find_by_id(&self, service_id: &str) -> Option<ServiceRecord> {
        self.services
            .read()
            .await
            .iter()
            .find(|service| service.matches_id(service_id))
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.services.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.services.read().await.is_empty()
    }
}
