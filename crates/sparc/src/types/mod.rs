pub mod dataset;
pub mod query;
pub mod response;

pub use dataset::{
    Anatomy, AnatomyName, AnatomyOrgan, AttributeValues, Contributor, DatasetAttributes,
    DatasetDates, DatasetItem, DatasetStatistics, Distribution, Organism, PennsieveInfo,
    Protocol, Provenance, SparcDataset, SubjectAttributes, SupportingAward, Taxonomy,
};
pub use query::{BoolQuery, QueryClause, QueryString, SparcSearchQuery};
pub use response::{SearchHits, ShardStats, SparcDatasetHit, SparcSearchResponse, TotalHits};
