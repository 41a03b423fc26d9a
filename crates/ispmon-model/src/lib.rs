pub mod alert;
pub mod disaster;
pub mod enums;
pub mod infrastructure;
pub mod integration;
pub mod metrics;

pub use alert::{Alert, SYSTEM_SOURCE};
pub use disaster::{AffectedRegion, DisasterEvent, ResponseTeam, TeamResources};
pub use enums::{
    AlertKind, AlertSeverity, DisasterKind, DisasterSeverity, DisasterStatus, IntegrationKind,
    IntegrationStatus, NodeKind, NodeStatus, PowerSource, RiskLevel, TeamStatus, TowerStatus,
};
pub use infrastructure::{
    Bandwidth, EnvironmentalReadings, GeoLocation, NttnNode, Tower, TowerHealth,
};
pub use integration::IntegrationPoint;
pub use metrics::SystemMetrics;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn alert_scoping() {
        let mut alert = Alert {
            id: "alert-1".to_string(),
            severity: AlertSeverity::Critical,
            kind: AlertKind::Power,
            message: "Generator failure".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            acknowledged: false,
            source: SYSTEM_SOURCE.to_string(),
        };
        assert!(alert.is_system_scoped());
        assert!(alert.is_active());

        alert.source = "tower-1".to_string();
        alert.acknowledged = true;
        assert!(!alert.is_system_scoped());
        assert!(!alert.is_active());
    }

    #[test]
    fn enums_serialize_to_wire_values() {
        assert_eq!(
            serde_json::to_string(&TowerStatus::Operational).unwrap(),
            "\"operational\""
        );
        assert_eq!(
            serde_json::to_string(&TeamStatus::EnRoute).unwrap(),
            "\"en-route\""
        );
        assert_eq!(
            serde_json::to_string(&IntegrationKind::ThirdParty).unwrap(),
            "\"Third-Party\""
        );
    }

    #[test]
    fn tower_round_trips_through_json() {
        let tower = Tower {
            id: "tower-1".to_string(),
            name: "Dhaka-Tower-01".to_string(),
            location: GeoLocation {
                lat: 23.8103,
                lng: 90.4125,
                address: "Gulshan, Dhaka".to_string(),
            },
            status: TowerStatus::Warning,
            health: TowerHealth {
                structural: 92.5,
                power: PowerSource::Battery,
                environmental: EnvironmentalReadings {
                    temperature: 31.0,
                    humidity: 78.0,
                    wind_speed: 12.0,
                },
            },
            connectivity: 97.0,
            last_update: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_string(&tower).expect("serialize tower");
        let round: Tower = serde_json::from_str(&json).expect("deserialize tower");
        assert_eq!(round, tower);
    }
}
