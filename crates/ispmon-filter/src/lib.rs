//! Region selection state and derived record filtering.
//!
//! The dashboard lets an operator select an arbitrary subset of districts
//! (grouped into divisions under one country root); every record
//! collection is then re-derived to the selected geography. This crate
//! owns the selection state machine, the location matcher, and the
//! shared filtering rule.

pub mod dashboard;
pub mod filter;
pub mod matcher;
pub mod metrics;
pub mod selection;

pub use dashboard::{DashboardData, FilteredView};
pub use filter::{RecordScope, filter_records, scope_included};
pub use matcher::{LocationMatch, match_location};
pub use metrics::compute_metrics;
pub use selection::{RegionSelection, TriState};
