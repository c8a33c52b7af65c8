//! multiverse-core - Location records and query semantics
//!
//! This crate holds everything the location API needs that is not HTTP:
//! the record model, the immutable dataset, id-selector parsing, field
//! filters, pagination and the error taxonomy.

pub mod dataset;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod selector;

pub use dataset::{Dataset, Lookup};
pub use error::{DatasetError, LocationError, LocationResult};
pub use filter::{LocationFilter, FILTER_FIELDS};
pub use models::*;
pub use query::{ListQuery, PageLinks, LOCATION_PATH};
pub use selector::IdSelector;
