//! Type-safe enumerations for dashboard record fields.
//!
//! The upstream data providers represent every status, severity, and kind
//! field as a lowercase string (kebab-case for multiword values). These
//! enums pin the permitted values at compile time; serde renames keep the
//! wire representation identical to what the providers emit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status of a tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TowerStatus {
    Operational,
    Warning,
    Critical,
    Offline,
}

impl TowerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TowerStatus::Operational => "operational",
            TowerStatus::Warning => "warning",
            TowerStatus::Critical => "critical",
            TowerStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for TowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Power source currently feeding a tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerSource {
    Normal,
    Battery,
    Generator,
    Offline,
}

impl PowerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerSource::Normal => "normal",
            PowerSource::Battery => "battery",
            PowerSource::Generator => "generator",
            PowerSource::Offline => "offline",
        }
    }
}

impl fmt::Display for PowerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of an NTTN node in the transmission network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Core,
    Edge,
    Access,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Core => "core",
            NodeKind::Edge => "edge",
            NodeKind::Access => "access",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational status of an NTTN node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Operational,
    Degraded,
    Critical,
    Offline,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Operational => "operational",
            NodeStatus::Degraded => "degraded",
            NodeStatus::Critical => "critical",
            NodeStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert severity. Ordering matters: `Critical` counts toward the
/// disaster-risk level in the derived metrics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subsystem an alert originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Power,
    Connectivity,
    Environmental,
    Structural,
    Disaster,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Power => "power",
            AlertKind::Connectivity => "connectivity",
            AlertKind::Environmental => "environmental",
            AlertKind::Structural => "structural",
            AlertKind::Disaster => "disaster",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a disaster event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterKind {
    Flood,
    Earthquake,
    Storm,
    Fire,
    Other,
}

impl DisasterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterKind::Flood => "flood",
            DisasterKind::Earthquake => "earthquake",
            DisasterKind::Storm => "storm",
            DisasterKind::Fire => "fire",
            DisasterKind::Other => "other",
        }
    }
}

impl fmt::Display for DisasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a disaster event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DisasterSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DisasterSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterSeverity::Low => "low",
            DisasterSeverity::Medium => "medium",
            DisasterSeverity::High => "high",
            DisasterSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for DisasterSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a disaster event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterStatus {
    Predicted,
    Active,
    Contained,
    Resolved,
}

impl DisasterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterStatus::Predicted => "predicted",
            DisasterStatus::Active => "active",
            DisasterStatus::Contained => "contained",
            DisasterStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for DisasterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment status of a response team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamStatus {
    Available,
    Deployed,
    EnRoute,
}

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Available => "available",
            TeamStatus::Deployed => "deployed",
            TeamStatus::EnRoute => "en-route",
        }
    }
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External system class an integration endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationKind {
    #[serde(rename = "NOC")]
    Noc,
    #[serde(rename = "SOC")]
    Soc,
    #[serde(rename = "TOC")]
    Toc,
    #[serde(rename = "TowerCo")]
    TowerCo,
    #[serde(rename = "NTTN")]
    Nttn,
    #[serde(rename = "Third-Party")]
    ThirdParty,
    #[serde(rename = "Disaster-Org")]
    DisasterOrg,
}

impl IntegrationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationKind::Noc => "NOC",
            IntegrationKind::Soc => "SOC",
            IntegrationKind::Toc => "TOC",
            IntegrationKind::TowerCo => "TowerCo",
            IntegrationKind::Nttn => "NTTN",
            IntegrationKind::ThirdParty => "Third-Party",
            IntegrationKind::DisasterOrg => "Disaster-Org",
        }
    }
}

impl fmt::Display for IntegrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection state of an integration endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
    Error,
}

impl IntegrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationStatus::Connected => "connected",
            IntegrationStatus::Disconnected => "disconnected",
            IntegrationStatus::Error => "error",
        }
    }
}

impl fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate disaster-risk level derived from the filtered alert set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
