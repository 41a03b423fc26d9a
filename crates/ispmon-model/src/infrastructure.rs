//! Physical infrastructure records: towers and NTTN transmission nodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{NodeKind, NodeStatus, PowerSource, TowerStatus};

/// A geographic point with a free-text address.
///
/// The address is the field the region filter matches against; it follows
/// the `"<District>, <Division>"` convention used across the dashboard
/// (often with a neighborhood in place of the district).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Environmental sensor readings at a tower site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReadings {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

/// Health snapshot for a tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerHealth {
    /// Structural integrity as a percentage (0-100).
    pub structural: f64,
    pub power: PowerSource,
    pub environmental: EnvironmentalReadings,
}

/// A monitored telecom tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: String,
    pub name: String,
    pub location: GeoLocation,
    pub status: TowerStatus,
    pub health: TowerHealth,
    /// Backhaul connectivity as a percentage (0-100).
    pub connectivity: f64,
    pub last_update: DateTime<Utc>,
}

/// Bandwidth utilization of an NTTN node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bandwidth {
    /// Current throughput in Gbps.
    pub current: f64,
    /// Provisioned capacity in Gbps.
    pub capacity: f64,
}

/// A nationwide telecommunication transmission network (NTTN) node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NttnNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub status: NodeStatus,
    pub bandwidth: Bandwidth,
    /// Round-trip latency in milliseconds.
    pub latency_ms: f64,
    /// Packet loss as a percentage.
    pub packet_loss: f64,
    /// Utilization as a percentage (0-100).
    pub load: f64,
    /// Ids of towers backhauled through this node.
    pub connected_towers: Vec<String>,
    /// Free-text location. Core nodes predate location tracking and may
    /// not carry one; such nodes are never excluded by the region filter.
    pub location: Option<String>,
    pub last_update: DateTime<Utc>,
}
