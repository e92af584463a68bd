use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use super::models::{CustomerDetails, CustomerSummary};
use crate::core::config::ConsoleConfig;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Customer not found: {0}")]
    NotFound(String),
}

/// Read-side client for the customer store.
///
/// Deletion goes through [`DeletionFlow`](crate::deletion::DeletionFlow),
/// not through this client; the store is only the last of the three steps
/// there.
pub struct CustomerApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl CustomerApiClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        info!("Customer API client created for {}", config.customer_api_url);
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.customer_api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every customer that finished (or is mid-way through)
    /// onboarding, in the order the store returns them.
    pub async fn list_onboarded(&self) -> Result<Vec<CustomerSummary>, ApiError> {
        let url = format!("{}/customers/onboarded", self.base_url);
        debug!("Fetching onboarded customers: GET {url}");

        let customers = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CustomerSummary>>()
            .await?;

        debug!("Fetched {} onboarded customers", customers.len());
        Ok(customers)
    }

    /// Fetch one customer's full record by iqama id.
    pub async fn customer_details(&self, iqama_id: &str) -> Result<CustomerDetails, ApiError> {
        let url = format!("{}/customers/{}", self.base_url, iqama_id);
        debug!("Fetching customer details: GET {url}");

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(iqama_id.to_string()));
        }

        let details = response
            .error_for_status()?
            .json::<CustomerDetails>()
            .await?;
        Ok(details)
    }
}
