//! Administrative region catalog for the ISP monitoring dashboard.
//!
//! One country root, N divisions, M districts per division. The catalog is
//! loaded once at session start and read-only thereafter; the selection
//! and filtering engine in `ispmon-filter` consumes it by reference.

pub mod catalog;
pub mod csv;
pub mod error;

pub use catalog::{CatalogSummary, District, Division, RegionCatalog, WHOLE_COUNTRY_ID};
pub use csv::parse_regions_csv;
pub use error::CatalogError;
