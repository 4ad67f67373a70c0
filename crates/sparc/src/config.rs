use serde::{Deserialize, Serialize};

/// Public Elasticsearch proxy fronting the SPARC portal indices.
pub const DEFAULT_BASE_URL: &str = "https://scicrunch.org/api/1/elastic";

/// Index holding the published portal datasets.
pub const DEFAULT_INDEX: &str = "SPARC_PortalDatasets_pr";

/// Connection settings for [`crate::SparcApi`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparcApiConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
}

impl SparcApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            index: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Base URL with surrounding whitespace and trailing slashes removed.
    /// Blank values resolve to [`DEFAULT_BASE_URL`].
    pub fn resolved_base_url(&self) -> String {
        let base_url = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        base_url.trim_end_matches('/').to_string()
    }

    pub fn resolved_index(&self) -> String {
        self.index
            .as_deref()
            .map(|value| value.trim().trim_matches('/'))
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_INDEX)
            .to_string()
    }
}
