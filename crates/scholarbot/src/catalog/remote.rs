use async_trait::async_trait;
use reqwest::Client;

use super::domain::ScholarshipRecord;
use super::store::{CatalogFetchError, CatalogSource};

/// REST reader for the hosted scholarship table. One GET per refresh; the
/// store decides what to do with the rows.
pub struct RestCatalogSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestCatalogSource {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl CatalogSource for RestCatalogSource {
    async fn fetch(&self) -> Result<Vec<ScholarshipRecord>, CatalogFetchError> {
        let url = format!("{}/rest/v1/scholarships?select=*", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|err| CatalogFetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status(status.as_u16()));
        }

        response
            .json::<Vec<ScholarshipRecord>>()
            .await
            .map_err(|err| CatalogFetchError::Malformed(err.to_string()))
    }
}
