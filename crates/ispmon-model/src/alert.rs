//! Alert records raised by towers, nodes, and the platform itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{AlertKind, AlertSeverity};

/// Source value used for platform-wide alerts that have no originating
/// tower. Alerts with this source (or an empty source) bypass the region
/// filter entirely.
pub const SYSTEM_SOURCE: &str = "System";

/// A single alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    pub kind: AlertKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
    /// Id of the originating tower, or [`SYSTEM_SOURCE`] for platform
    /// alerts.
    pub source: String,
}

impl Alert {
    /// True for platform-wide alerts with no originating tower.
    pub fn is_system_scoped(&self) -> bool {
        self.source.is_empty() || self.source == SYSTEM_SOURCE
    }

    /// True if the alert still needs operator attention.
    pub fn is_active(&self) -> bool {
        !self.acknowledged
    }
}
