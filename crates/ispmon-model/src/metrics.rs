//! Aggregate metrics shown on the dashboard overview cards.

use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

/// Counters and rates derived from the (filtered) record collections.
///
/// These are always recomputed from the filtered subsets, never from the
/// raw collections, so the cards stay consistent with the tables below
/// them when a region selection is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub total_towers: usize,
    pub operational_towers: usize,
    pub total_nttn_nodes: usize,
    pub operational_nttn_nodes: usize,
    /// Unacknowledged alerts.
    pub active_alerts: usize,
    /// Unacknowledged critical alerts.
    pub critical_alerts: usize,
    /// Share of towers that are operational, as a percentage.
    pub average_uptime: f64,
    /// Mean load across NTTN nodes, as a percentage.
    pub network_load: f64,
    pub disaster_risk: RiskLevel,
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self {
            total_towers: 0,
            operational_towers: 0,
            total_nttn_nodes: 0,
            operational_nttn_nodes: 0,
            active_alerts: 0,
            critical_alerts: 0,
            average_uptime: 0.0,
            network_load: 0.0,
            disaster_risk: RiskLevel::Low,
        }
    }
}
