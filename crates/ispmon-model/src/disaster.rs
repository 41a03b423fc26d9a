//! Disaster events and the response teams assigned to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{DisasterKind, DisasterSeverity, DisasterStatus, TeamStatus};

/// The geographic area a disaster affects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectedRegion {
    /// Free-text region name, `"<District>, <Division>"` or `"<Division>"`.
    pub name: String,
    /// Polygon boundary as lat/lng pairs.
    pub boundary: Vec<(f64, f64)>,
}

/// A natural-disaster event tracked by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterEvent {
    pub id: String,
    pub kind: DisasterKind,
    pub severity: DisasterSeverity,
    pub affected_region: AffectedRegion,
    /// Ids of towers inside the affected area.
    pub affected_towers: Vec<String>,
    /// Ids of NTTN nodes inside the affected area.
    pub affected_nodes: Vec<String>,
    pub status: DisasterStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Ids of response teams assigned to this event.
    pub response_teams: Vec<String>,
}

/// Personnel and equipment available to a response team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResources {
    pub personnel: u32,
    pub vehicles: u32,
    pub equipment: Vec<String>,
}

/// A field response team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTeam {
    pub id: String,
    pub name: String,
    pub status: TeamStatus,
    /// Home station as a free-text location. Teams without one are never
    /// excluded by the region filter.
    pub base_location: Option<String>,
    /// Last reported GPS position, if the team is in the field.
    pub position: Option<(f64, f64)>,
    /// Id of the disaster event the team is assigned to, if any.
    pub assigned_disaster: Option<String>,
    pub resources: TeamResources,
}
