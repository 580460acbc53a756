//! Scholarship catalog: the record store, its built-in fallback data, the
//! remote sync source, and the catalog-side pipelines (search/filter and
//! deadline status derivation).

pub mod deadline;
pub mod domain;
pub mod fallback;
pub mod remote;
pub mod search;
pub mod store;

pub use deadline::{deadline_status, DeadlineStatus, DeadlineUrgency};
pub use domain::{ScholarshipId, ScholarshipRecord};
pub use remote::RestCatalogSource;
pub use search::{filter_records, NeedFilter};
pub use store::{
    CatalogError, CatalogFetchError, CatalogOrigin, CatalogSnapshot, CatalogSource, CatalogStore,
};
