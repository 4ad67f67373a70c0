//! Dataset documents as stored in the SPARC portal index.
//!
//! Every group defaults when absent so partially populated documents still
//! decode. Field names follow the camelCase keys served by the index.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SparcDataset {
    pub item: DatasetItem,
    pub supporting_awards: Vec<SupportingAward>,
    pub pennsieve: PennsieveInfo,
    pub contributors: Vec<Contributor>,
    pub distributions: Vec<Distribution>,
    pub protocols: Vec<Protocol>,
    pub organisms: Vec<Organism>,
    pub attributes: DatasetAttributes,
    pub dates: DatasetDates,
    pub anatomy: Vec<Anatomy>,
    pub provenance: Provenance,
}

impl SparcDataset {
    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn description(&self) -> &str {
        &self.item.description
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetItem {
    pub version: String,
    pub types: Vec<String>,
    pub content_types: Vec<String>,
    pub statistics: DatasetStatistics,
    pub keywords: Vec<String>,
    pub published: bool,
    pub name: String,
    pub description: String,
    pub readme: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetStatistics {
    pub number_of_files: u64,
    pub number_of_subjects: u64,
    pub number_of_samples: u64,
    pub number_of_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportingAward {
    pub award_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PennsieveInfo {
    pub identifier: String,
    pub version: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contributor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub affiliation: String,
    pub contributor_type: String,
}

impl Contributor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Distribution {
    pub uri: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Protocol {
    pub doi: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Organism {
    pub name: String,
    pub taxonomy: Taxonomy,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectAttributes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<AttributeValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<AttributeValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<AttributeValues>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeValues {
    pub value: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetDates {
    pub created: String,
    pub modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Anatomy {
    pub organ: AnatomyOrgan,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnatomyOrgan {
    pub name: AnatomyName,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnatomyName {
    pub aggregate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Provenance {
    pub origin: String,
    pub last_modified: String,
}
