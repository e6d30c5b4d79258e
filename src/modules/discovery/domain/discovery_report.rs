use serde::Serialize;

use crate::shared::domain::ServiceRecord;

/// What a single provider gave back during a discovery pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProviderOutcome {
    Fetched {
        provider: String,
        services: Vec<ServiceRecord>,
    },
    Failed {
        provider: String,
        reason: String,
    },
}

impl ProviderOutcome {
    pub fn provider(&self) -> &str {
        match self {
            ProviderOutcome::Fetched { provider, .. } | ProviderOutcome::Failed { provider, .. } => {
                provider
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProviderOutcome::Failed { .. })
    }
}

/// Per-provider outcomes of one discovery pass, in provider order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscoveryReport {
    pub outcomes: Vec<ProviderOutcome>,
}

impl DiscoveryReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ProviderOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn service_count(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                ProviderOutcome::Fetched { services, .. } => services.len(),
                ProviderOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.service_count() == 0
    }

    /// `(provider, reason)` for every provider that failed
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ProviderOutcome::Failed { provider, reason } => {
                    Some((provider.as_str(), reason.as_str()))
                }
                ProviderOutcome::Fetched { .. } => None,
            })
            .collect()
    }

    /// All fetched records flattened in provider order
    pub fn into_services(self) -> Vec<ServiceRecord> {
        self.outcomes
            .into_iter()
            .flat_map(|outcome| match outcome {
                ProviderOutcome::Fetched { services, .. } => services,
                ProviderOutcome::Failed { .. } => Vec::new(),
            })
            .collect()
    }
}
