use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dataset::SparcDataset;

/// Body returned by the `_search` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparcSearchResponse {
    /// Server-side execution time in milliseconds.
    pub took: u64,
    pub timed_out: bool,
    #[serde(rename = "_shards")]
    pub shards: ShardStats,
    pub hits: SearchHits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Map<String, Value>>,
}

impl SparcSearchResponse {
    /// Number of documents matching the query, not just the returned page.
    pub fn total_hits(&self) -> u64 {
        self.hits.total.value
    }

    /// Dataset documents in rank order.
    pub fn datasets(&self) -> impl Iterator<Item = &SparcDataset> {
        self.hits.hits.iter().map(|hit| &hit.source)
    }

    pub fn is_empty(&self) -> bool {
        self.hits.hits.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShardStats {
    pub total: u32,
    pub successful: u32,
    #[serde(default)]
    pub skipped: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHits {
    pub total: TotalHits,
    /// `null` when the query is not scored.
    pub max_score: Option<f64>,
    pub hits: Vec<SparcDatasetHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalHits {
    pub value: u64,
    /// `eq` for an exact count, `gte` for a lower bound.
    pub relation: String,
}

impl TotalHits {
    pub fn is_exact(&self) -> bool {
        self.relation == "eq"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparcDatasetHit {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_type", default)]
    pub doc_type: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: SparcDataset,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SEARCH_RESPONSE: &str = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/search_response.json"
    ));

    #[test]
    fn decodes_portal_search_payload() {
        let response: SparcSearchResponse =
            serde_json::from_str(SEARCH_RESPONSE).expect("fixture decodes");

        assert_eq!(response.took, 12);
        assert!(!response.timed_out);
        assert_eq!(
            response.shards,
            ShardStats {
                total: 1,
                successful: 1,
                skipped: 0,
                failed: 0,
            }
        );
        assert_eq!(response.total_hits(), 2);
        assert!(response.hits.total.is_exact());
        assert_eq!(response.hits.max_score, Some(7.25));

        let first = &response.hits.hits[0];
        assert_eq!(first.id, "DOI:10.26275/pzek-91wx");
        assert_eq!(first.score, Some(7.25));
        assert_eq!(first.source.name(), "Vagus nerve stimulation in rat");
        assert_eq!(first.source.item.statistics.number_of_subjects, 12);
        assert_eq!(first.source.contributors[0].full_name(), "Ada Lovelace");
        assert_eq!(
            first.source.organisms[0].taxonomy.id,
            "NCBITaxon:10116".to_string()
        );
        assert_eq!(
            first.source.anatomy[0].organ.name.aggregate,
            "vagus nerve".to_string()
        );
        let species = first
            .source
            .attributes
            .subject
            .as_ref()
            .and_then(|subject| subject.species.as_ref())
            .map(|species| species.value.clone());
        assert_eq!(species, Some(vec!["Rattus norvegicus".to_string()]));
        assert_eq!(first.source.dates.published.as_deref(), Some("2020-06-01"));

        let names = response.datasets().map(SparcDataset::name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Vagus nerve stimulation in rat", "Colon motility atlas"]
        );

        let aggregations = response.aggregations.as_ref().expect("aggregations present");
        assert!(aggregations.contains_key("organs"));
    }

    #[test]
    fn sparse_documents_fall_back_to_defaults() {
        let payload = r#"{
            "took": 1,
            "timed_out": false,
            "_shards": {"total": 1, "successful": 1, "failed": 0},
            "hits": {
                "total": {"value": 1, "relation": "gte"},
                "max_score": null,
                "hits": [
                    {"_index": "idx", "_id": "42", "_score": null,
                     "_source": {"item": {"name": "Only a name"}}}
                ]
            }
        }"#;

        let response: SparcSearchResponse = serde_json::from_str(payload).expect("decodes");
        let hit = &response.hits.hits[0];

        assert!(!response.hits.total.is_exact());
        assert_eq!(response.shards.skipped, 0);
        assert_eq!(response.aggregations, None);
        assert_eq!(hit.doc_type, "");
        assert_eq!(hit.score, None);
        assert_eq!(hit.source.name(), "Only a name");
        assert!(hit.source.contributors.is_empty());
        assert_eq!(hit.source.attributes.subject, None);
    }
}
