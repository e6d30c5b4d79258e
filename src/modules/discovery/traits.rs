use crate::shared::{domain::ServiceRecord, errors::AppResult};
use async_trait::async_trait;
use std::fmt;

/// The two listings every provider exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderEndpoint {
    /// Services currently on offer, used for bulk discovery
    Services,
    /// The provider's full catalogue
    Catalogue,
}

impl ProviderEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ProviderEndpoint::Services => "services",
            ProviderEndpoint::Catalogue => "catalogue",
        }
    }
}

impl fmt::Display for ProviderEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// Fetches service listings from a single provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// One GET against `endpoint` of `provider`. Anything but a 200 with a
    /// JSON array of records is an error.
    async fn fetch_records(
        &self,
        provider: &str,
        endpoint: ProviderEndpoint,
    ) -> AppResult<Vec<ServiceRecord>>;
}
