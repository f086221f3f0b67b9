use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::company::{CompanyDataSource, CompanyError};

const REQUEST_TIMEOUT_SECS: u64 = 180;

/// HTTP client for the company search/format service.
///
/// `GET {base}/search?query=<name>` then `GET {base}/format?query=<json>`.
#[derive(Clone)]
pub struct HttpCompanyDataSource {
    client: Client,
    base_url: String,
}

impl HttpCompanyDataSource {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_text(
        &self,
        path: &str,
        query: &str,
        step: &'static str,
    ) -> Result<String, CompanyError> {
        let url = format!("{}/{}", self.base_url, path);
        let fetch_error = |reason: String| CompanyError::UpstreamFetch { step, reason };

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        debug!("GET {url} -> {status}");
        if !status.is_success() {
            return Err(fetch_error(status.to_string()));
        }

        response.text().await.map_err(|e| fetch_error(e.to_string()))
    }
}

#[async_trait]
impl CompanyDataSource for HttpCompanyDataSource {
    async fn search(&self, company_name: &str) -> Result<Value, CompanyError> {
        let body = self.get_text("search", company_name, "retrieve").await?;
        serde_json::from_str(&body).map_err(|e| CompanyError::UpstreamFetch {
            step: "retrieve",
            reason: format!("search response is not JSON: {e}"),
        })
    }

    async fn format(&self, raw: &Value) -> Result<Value, CompanyError> {
        let body = self.get_text("format", &raw.to_string(), "format").await?;
        serde_json::from_str(&body).map_err(|e| {
            CompanyError::MalformedResponse(format!("format response is not JSON: {e}"))
        })
    }
}
