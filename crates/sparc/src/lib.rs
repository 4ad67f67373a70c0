#![deny(unsafe_code)]

//! Typed bindings for the SPARC dataset search API.

pub mod client;
pub mod config;
pub mod error;
/// Request and response contracts of the `_search` endpoint.
pub mod types;

pub use client::{SparcApi, create_sparc_api};
pub use config::{DEFAULT_BASE_URL, DEFAULT_INDEX, SparcApiConfig};
pub use error::{SparcError, SparcResult};
pub use types::{SparcDataset, SparcDatasetHit, SparcSearchQuery, SparcSearchResponse};
