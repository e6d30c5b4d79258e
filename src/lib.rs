pub mod modules;
pub mod shared;

use modules::{
    catalogue::ServiceCatalogue,
    discovery::{DiscoveryConfig, ServiceDiscovery},
    quality::QualityAssessor,
};
use std::sync::Arc;

pub use shared::{AppError, AppResult, ServiceRecord};

/// Discovery, catalogue and quality assessment wired together
pub struct PremiumServices {
    pub discovery: Arc<ServiceDiscovery>,
    pub catalogue: Arc<ServiceCatalogue>,
    pub quality: QualityAssessor,
}

impl PremiumServices {
    /// Logging is left to the caller, see [`shared::utils::init_logger`]
    pub fn new(config: &DiscoveryConfig) -> AppResult<Self> {
        let discovery = Arc::new(ServiceDiscovery::new(config)?);
        Ok(Self::with_discovery(discovery))
    }

    pub fn with_discovery(discovery: Arc<ServiceDiscovery>) -> Self {
        // The assessor reads the same catalogue that discovery fills
        let catalogue = Arc::new(ServiceCatalogue::new(Arc::clone(&discovery)));
        let quality = QualityAssessor::new(Arc::clone(&catalogue));

        log::debug!(
            "Premium services initialized with providers: {}",
            discovery.providers().join(", ")
        );

        Self {
            discovery,
            catalogue,
            quality,
        }
    }
}
