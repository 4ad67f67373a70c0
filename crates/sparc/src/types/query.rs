use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for the `_search` endpoint.
///
/// Unset fields are left out of the serialized body so the server applies its
/// own defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SparcSearchQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryClause>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregations: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryClause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string: Option<QueryString>,
    #[serde(rename = "bool", default, skip_serializing_if = "Option::is_none")]
    pub bool_query: Option<BoolQuery>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryString {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoolQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Vec<Value>>,
}

impl SparcSearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text query in Lucene `query_string` syntax.
    pub fn text(query: impl Into<String>) -> Self {
        let mut search = Self::default();
        search.clause_mut().query_string = Some(QueryString {
            query: query.into(),
        });
        search
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_from(mut self, from: u32) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_must(mut self, clause: Value) -> Self {
        self.bool_mut().must.get_or_insert_with(Vec::new).push(clause);
        self
    }

    pub fn with_should(mut self, clause: Value) -> Self {
        self.bool_mut()
            .should
            .get_or_insert_with(Vec::new)
            .push(clause);
        self
    }

    pub fn with_filter(mut self, clause: Value) -> Self {
        self.bool_mut()
            .filter
            .get_or_insert_with(Vec::new)
            .push(clause);
        self
    }

    pub fn with_aggregation(mut self, name: impl Into<String>, aggregation: Value) -> Self {
        self.aggregations
            .get_or_insert_with(Map::new)
            .insert(name.into(), aggregation);
        self
    }

    pub fn with_sort(mut self, sort: Value) -> Self {
        self.sort.get_or_insert_with(Vec::new).push(sort);
        self
    }

    /// Free-text part of the query, if any.
    pub fn query_text(&self) -> Option<&str> {
        self.query
            .as_ref()
            .and_then(|clause| clause.query_string.as_ref())
            .map(|query_string| query_string.query.as_str())
    }

    fn clause_mut(&mut self) -> &mut QueryClause {
        self.query.get_or_insert_with(QueryClause::default)
    }

    fn bool_mut(&mut self) -> &mut BoolQuery {
        self.clause_mut()
            .bool_query
            .get_or_insert_with(BoolQuery::default)
    }
}
