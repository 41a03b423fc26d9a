//! Derives the filtered dashboard view from the raw collections and the
//! current region selection.
//!
//! Each collection supplies its own location extraction; all of them
//! route through the shared inclusion rule in [`crate::filter`]. The view
//! is recomputed in full on every selection or data change; collections
//! are small enough that no debouncing is needed.

use std::collections::BTreeMap;

use tracing::warn;

use ispmon_model::{
    Alert, DisasterEvent, IntegrationPoint, NttnNode, ResponseTeam, SystemMetrics, Tower,
};

use crate::filter::{RecordScope, filter_records};
use crate::metrics::compute_metrics;
use crate::selection::RegionSelection;

/// The raw record collections as supplied by the data providers.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub towers: Vec<Tower>,
    pub nttn_nodes: Vec<NttnNode>,
    pub alerts: Vec<Alert>,
    pub disaster_events: Vec<DisasterEvent>,
    pub response_teams: Vec<ResponseTeam>,
    pub integration_points: Vec<IntegrationPoint>,
}

/// The filtered collections plus metrics recomputed from them.
///
/// Consumers must treat a view as immutable until the next recomputation.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub towers: Vec<Tower>,
    pub nttn_nodes: Vec<NttnNode>,
    pub alerts: Vec<Alert>,
    pub disaster_events: Vec<DisasterEvent>,
    pub response_teams: Vec<ResponseTeam>,
    /// Integration endpoints have no geography and always pass through.
    pub integration_points: Vec<IntegrationPoint>,
    pub metrics: SystemMetrics,
}

impl FilteredView {
    /// Recompute the view for the current selection.
    pub fn derive(data: &DashboardData, selection: &RegionSelection<'_>) -> Self {
        let towers = filter_records(&data.towers, selection, tower_scope);
        let nttn_nodes = filter_records(&data.nttn_nodes, selection, node_scope);

        // Alerts join through the raw tower list: an alert raised by a
        // tower belongs wherever that tower stands.
        let towers_by_id: BTreeMap<&str, &Tower> =
            data.towers.iter().map(|t| (t.id.as_str(), t)).collect();
        let alerts = filter_records(&data.alerts, selection, |alert| {
            alert_scope(alert, &towers_by_id)
        });

        let disaster_events = filter_records(&data.disaster_events, selection, event_scope);
        let response_teams = filter_records(&data.response_teams, selection, team_scope);

        let towers: Vec<Tower> = towers.into_iter().cloned().collect();
        let nttn_nodes: Vec<NttnNode> = nttn_nodes.into_iter().cloned().collect();
        let alerts: Vec<Alert> = alerts.into_iter().cloned().collect();
        let metrics = compute_metrics(&towers, &nttn_nodes, &alerts);

        Self {
            towers,
            nttn_nodes,
            alerts,
            disaster_events: disaster_events.into_iter().cloned().collect(),
            response_teams: response_teams.into_iter().cloned().collect(),
            integration_points: data.integration_points.clone(),
            metrics,
        }
    }
}

fn tower_scope(tower: &Tower) -> RecordScope {
    RecordScope::Location(tower.location.address.clone())
}

fn node_scope(node: &NttnNode) -> RecordScope {
    match &node.location {
        Some(location) => RecordScope::Location(location.clone()),
        None => RecordScope::Unknown,
    }
}

fn alert_scope(alert: &Alert, towers_by_id: &BTreeMap<&str, &Tower>) -> RecordScope {
    if alert.is_system_scoped() {
        return RecordScope::Global;
    }
    match towers_by_id.get(alert.source.as_str()) {
        Some(tower) => RecordScope::Location(tower.location.address.clone()),
        None => {
            warn!(alert = %alert.id, source = %alert.source, "alert references unknown tower");
            RecordScope::Unknown
        }
    }
}

fn event_scope(event: &DisasterEvent) -> RecordScope {
    let name = event.affected_region.name.trim();
    if name.is_empty() {
        RecordScope::Unknown
    } else {
        RecordScope::Location(name.to_string())
    }
}

fn team_scope(team: &ResponseTeam) -> RecordScope {
    match &team.base_location {
        Some(location) => RecordScope::Location(location.clone()),
        None => RecordScope::Unknown,
    }
}
