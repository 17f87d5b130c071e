//! reqwest implementation of [`ResearchApi`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::ResearchApi;
use crate::config::ApiConfig;
use crate::domain::{AddDocumentResponse, NewDocument, SearchRequest, SearchResponse};
use crate::error::ApiError;

/// HTTP client for the search API
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|_| ApiError::InvalidUrl(config.base_url.clone()))?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL, keeping any base path.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|_| ApiError::InvalidUrl(format!("{}{}", base, path)))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ResearchApi for HttpApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let url = self.endpoint("api/process")?;
        tracing::debug!(query = %request.query, page = request.page, "POST {}", url);

        let response = self.client.post(url).json(request).send().await?;
        Self::decode(response).await
    }

    async fn autocomplete(&self, prefix: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint("api/autocomplete")?;
        tracing::debug!(prefix, "GET {}", url);

        let response = self
            .client
            .get(url)
            .query(&[("prefix", prefix)])
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn add_document(
        &self,
        document: &NewDocument,
    ) -> Result<AddDocumentResponse, ApiError> {
        let url = self.endpoint("api/add_document")?;
        tracing::debug!(title = %document.title, "POST {}", url);

        let response = self.client.post(url).json(document).send().await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> HttpApi {
        HttpApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let api = api("http://127.0.0.1:5000");
        assert_eq!(
            api.endpoint("api/process").unwrap().as_str(),
            "http://127.0.0.1:5000/api/process"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = api("https://example.org/research");
        assert_eq!(
            api.endpoint("/api/autocomplete").unwrap().as_str(),
            "https://example.org/research/api/autocomplete"
        );
    }

    #[test]
    fn test_rejects_invalid_base() {
        let err = HttpApi::new(&ApiConfig {
            base_url: "::nope".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
