//! Pipeline result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skilltrust_report::{AuditReport, RiskLevel, SummaryStats};

/// Verdict of the pre-install gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallCheck {
    pub skill_name: String,
    pub trust_score: f64,
    pub risk_level: RiskLevel,

    /// Anything short of high risk may be installed
    pub can_install: bool,

    /// The full report backing the verdict
    pub report: AuditReport,
}

/// Per-skill status snapshot, persisted next to the skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityStatus {
    pub skill_name: String,
    pub timestamp: DateTime<Utc>,
    pub trust_score: f64,
    pub risk_level: RiskLevel,
    pub compliant: bool,
    pub issues_found: usize,
}

/// One dashboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillStatus {
    pub name: String,
    pub trust_score: f64,
    pub risk_level: RiskLevel,
    pub compliant: bool,
}

/// Fleet snapshot for a host dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: SummaryStats,
    pub timestamp: DateTime<Utc>,
    pub skill_statuses: Vec<SkillStatus>,
}
