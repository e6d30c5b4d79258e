use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_PROVIDERS: [&str; 2] = ["provider1", "provider2"];
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = "premium-services/0.1";

const PROVIDERS_VAR: &str = "PREMIUM_PROVIDERS";
const SCHEME_VAR: &str = "PREMIUM_PROVIDER_SCHEME";
const TIMEOUT_VAR: &str = "PREMIUM_HTTP_TIMEOUT_SECS";

/// Which providers to ask and how to reach them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Provider identifiers, used as the host part of each URL
    pub providers: Vec<String>,
    pub scheme: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            providers: DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect(),
            scheme: "https".to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl DiscoveryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_providers<I, S>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.providers = providers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Defaults overridden by the process environment (and `.env`, if any)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PROVIDERS_VAR) {
            let providers: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            if providers.is_empty() {
                return Err(AppError::ConfigurationError(format!(
                    "{} is set but lists no providers",
                    PROVIDERS_VAR
                )));
            }
            config.providers = providers;
        }

        if let Some(scheme) = lookup(SCHEME_VAR) {
            let scheme = scheme.trim().to_lowercase();
            if scheme != "http" && scheme != "https" {
                return Err(AppError::ConfigurationError(format!(
                    "{} must be http or https, got '{}'",
                    SCHEME_VAR, scheme
                )));
            }
            config.scheme = scheme;
        }

        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            let seconds = timeout.trim().parse::<u64>()?;
            if seconds == 0 {
                return Err(AppError::ConfigurationError(format!(
                    "{} must be greater than zero",
                    TIMEOUT_VAR
                )));
            }
            config.timeout_seconds = seconds;
        }

        Ok(config)
    }
}
