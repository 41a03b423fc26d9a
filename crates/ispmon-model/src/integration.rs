//! Cross-system integration endpoints (NOC, SOC, NTTN operators, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{IntegrationKind, IntegrationStatus};

/// An external system the platform exchanges data with.
///
/// Integration endpoints have no geography; the region filter always
/// passes them through unfiltered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationPoint {
    pub id: String,
    pub name: String,
    pub kind: IntegrationKind,
    pub status: IntegrationStatus,
    pub last_sync: DateTime<Utc>,
    /// Data points exchanged since the last sync.
    pub data_points: u64,
    /// Error rate as a percentage.
    pub error_rate: f64,
}
