use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use snafu::{ResultExt, ensure};

use super::config::SparcApiConfig;
use super::error::{
    BuildClientSnafu, DecodeResponseSnafu, EncodeQuerySnafu, MissingApiKeySnafu, ReadBodySnafu,
    ResponseStatusSnafu, SendRequestSnafu, SparcResult,
};
use super::types::{SparcSearchQuery, SparcSearchResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client for the SPARC `_search` endpoint.
///
/// Each call is a single request: there is no retry and no response cache.
#[derive(Debug, Clone)]
pub struct SparcApi {
    api_key: String,
    base_url: String,
    index: String,
    client: reqwest::Client,
}

impl SparcApi {
    pub fn new(config: SparcApiConfig) -> SparcResult<Self> {
        let api_key = config.api_key.trim().to_string();
        ensure!(
            !api_key.is_empty(),
            MissingApiKeySnafu {
                stage: "sparc-api-new",
            }
        );

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("sparc-chat/", env!("CARGO_PKG_VERSION")))
            .build()
            .context(BuildClientSnafu {
                stage: "build-http-client",
            })?;

        Ok(Self {
            base_url: config.resolved_base_url(),
            index: config.resolved_index(),
            api_key,
            client,
        })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Search endpoint without credentials, safe to log.
    pub fn search_url(&self) -> String {
        format!("{}/{}/_search", self.base_url, self.index)
    }

    pub async fn search(&self, query: &SparcSearchQuery) -> SparcResult<SparcSearchResponse> {
        let url = self.search_url();
        let body = serde_json::to_vec(query).context(EncodeQuerySnafu {
            stage: "encode-search-query",
        })?;

        tracing::debug!(
            url = %url,
            size = ?query.size,
            from = ?query.from,
            text = ?query.query_text(),
            "sending sparc search"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .context(SendRequestSnafu {
                stage: "send-search-request",
                url: url.clone(),
            })?;

        let status = response.status();
        let payload = response.text().await.context(ReadBodySnafu {
            stage: "read-search-response",
        })?;

        if !status.is_success() {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                "sparc search returned a non-success status"
            );
            return ResponseStatusSnafu {
                stage: "search-http-status",
                status: status.as_u16(),
                body: payload,
            }
            .fail();
        }

        let decoded: SparcSearchResponse =
            serde_json::from_str(&payload).context(DecodeResponseSnafu {
                stage: "decode-search-response",
            })?;

        tracing::info!(
            took_ms = decoded.took,
            returned = decoded.hits.hits.len(),
            total = decoded.total_hits(),
            "sparc search completed"
        );
        Ok(decoded)
    }

    /// Runs a free-text search returning at most `size` hits.
    pub async fn search_text(&self, text: &str, size: u32) -> SparcResult<SparcSearchResponse> {
        let query = SparcSearchQuery::text(text.trim()).with_size(size);
        self.search(&query).await
    }
}

/// Builds a [`SparcApi`] from its config.
pub fn create_sparc_api(config: SparcApiConfig) -> SparcResult<SparcApi> {
    SparcApi::new(config)
}
