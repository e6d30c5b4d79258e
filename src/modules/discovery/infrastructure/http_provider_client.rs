use crate::modules::discovery::{
    domain::DiscoveryConfig,
    traits::{ProviderClient, ProviderEndpoint},
};
use crate::shared::{
    domain::ServiceRecord,
    errors::{AppError, AppResult},
    utils::{LogContext, TimedOperation},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// reqwest-backed provider client; every request is bounded by the configured timeout
pub struct HttpProviderClient {
    client: Client,
    scheme: String,
}

impl HttpProviderClient {
    pub fn new(config: &DiscoveryConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            scheme: config.scheme.clone(),
        })
    }

    pub fn endpoint_url(&self, provider: &str, endpoint: ProviderEndpoint) -> String {
        format!("{}://{}/{}", self.scheme, provider, endpoint.path())
    }
}

#[async_trait]
impl ProviderClient for HttpProviderClient {
    async fn fetch_records(
        &self,
        provider: &str,
        endpoint: ProviderEndpoint,
    ) -> AppResult<Vec<ServiceRecord>> {
        let url = self.endpoint_url(provider, endpoint);
        LogContext::api_start(provider, endpoint.path());
        let timer = TimedOperation::new(&format!("GET {}", url));

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        LogContext::api_call(
            provider,
            endpoint.path(),
            status.as_str(),
            timer.elapsed_ms(),
        );

        if status != StatusCode::OK {
            return Err(AppError::ApiError(format!(
                "Provider {} returned status code {}",
                provider,
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        let records = parse_listing(provider, endpoint, &body)?;

        timer.finish_with_info(&format!("{} records", records.len()));
        Ok(records)
    }
}

/// A listing must be a JSON array; entries that are not objects are skipped
fn parse_listing(
    provider: &str,
    endpoint: ProviderEndpoint,
    body: &str,
) -> AppResult<Vec<ServiceRecord>> {
    let entries: Vec<Value> = serde_json::from_str(body).map_err(|e| {
        AppError::SerializationError(format!(
            "Failed to parse {} response from {}: {}",
            endpoint, provider, e
        ))
    })?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match ServiceRecord::from_value(entry) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!(
                "Skipping entry {} of {} {}: {}",
                index, provider, endpoint, e
            ),
        }
    }
    Ok(records)
}
