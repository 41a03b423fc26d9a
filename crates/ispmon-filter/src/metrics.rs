//! Aggregate metrics recomputed from filtered collections.

use ispmon_model::{
    Alert, AlertSeverity, NodeStatus, NttnNode, RiskLevel, SystemMetrics, Tower, TowerStatus,
};

/// Compute dashboard metrics from the filtered collections.
///
/// Callers must pass the filtered subsets, never the raw collections, so
/// every counter agrees with the tables rendered next to it.
pub fn compute_metrics(towers: &[Tower], nodes: &[NttnNode], alerts: &[Alert]) -> SystemMetrics {
    let operational_towers = towers
        .iter()
        .filter(|t| t.status == TowerStatus::Operational)
        .count();
    let operational_nodes = nodes
        .iter()
        .filter(|n| n.status == NodeStatus::Operational)
        .count();
    let active_alerts = alerts.iter().filter(|a| a.is_active()).count();
    let critical_alerts = alerts
        .iter()
        .filter(|a| a.is_active() && a.severity == AlertSeverity::Critical)
        .count();

    let average_uptime = if towers.is_empty() {
        0.0
    } else {
        operational_towers as f64 / towers.len() as f64 * 100.0
    };
    let network_load = if nodes.is_empty() {
        0.0
    } else {
        nodes.iter().map(|n| n.load).sum::<f64>() / nodes.len() as f64
    };

    let disaster_risk = if critical_alerts > 5 {
        RiskLevel::High
    } else if critical_alerts > 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    SystemMetrics {
        total_towers: towers.len(),
        operational_towers,
        total_nttn_nodes: nodes.len(),
        operational_nttn_nodes: operational_nodes,
        active_alerts,
        critical_alerts,
        average_uptime,
        network_load,
        disaster_risk,
    }
}
