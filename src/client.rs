use crate::cache::{AddressCache, InMemoryCache};
use crate::error::{Error, ErrorKind};
use crate::postal_code::PostalCode;
use crate::schema::{Address, RawAddress};

use std::sync::Arc;
use tracing::{debug, warn};

const POSTCODE_ENDPOINT: &str = "https://postcode.teraren.com/postcodes";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(POSTCODE_ENDPOINT),
        }
    }
}

impl ClientConfig {
    /// Point the client at a mirror or a mock server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Postal code resolver. Each cache miss costs exactly one GET; nothing is retried.
pub struct Client {
    client: reqwest::Client,
    base_url: String,
    cache: Arc<dyn AddressCache>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_cache(config, Arc::new(InMemoryCache::new()))
    }
    pub fn with_cache(config: ClientConfig, cache: Arc<dyn AddressCache>) -> Self {
        Client {
            client: reqwest::Client::new(),
            base_url: config.base_url,
            cache,
        }
    }
    pub fn cache(&self) -> &Arc<dyn AddressCache> {
        &self.cache
    }
    /// Drops every cached address. A lookup already awaiting the service still
    /// stores its result once it completes.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
    /// Resolve `value` (`NNNNNNN` or `NNN-NNNN`) to an address, from the cache when
    /// possible.
    pub async fn yubin(&self, value: &str) -> Result<Address, Error> {
        let code = PostalCode::parse(value)?;
        if let Some(address) = self.cache.get(code.as_str()) {
            debug!(code = code.as_str(), "postal code served from cache");
            return Ok(address);
        }
        let address = match self.fetch(&code).await {
            Ok(address) => address,
            Err(err) => {
                warn!(code = code.as_str(), error = ?err, "postal code lookup failed");
                return Err(err);
            }
        };
        self.cache.set(code.as_str(), address.clone());
        Ok(address)
    }
    fn url(&self, code: &PostalCode) -> String {
        format!("{}/{}.json", self.base_url, code.as_str())
    }
    async fn fetch(&self, code: &PostalCode) -> Result<Address, Error> {
        let url = self.url(code);
        debug!(url = url.as_str(), "requesting postal code");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::new(
                ErrorKind::NotFound,
                Some(format!("Status code {}", status).into()),
            ));
        }
        let response_text = response.text().await?;
        let raw: RawAddress = serde_json::from_str(response_text.as_str())?;
        Ok(Address::from(raw))
    }
}
