//! Report types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skilltrust_core::TrustScores;
use std::fmt;
use uuid::Uuid;

/// Three-tier risk label used in audit reports.
///
/// Thresholds differ from [`skilltrust_core::TrustLevel`] on purpose: risk
/// has no tier boundary at 80, and the two labels feed different report
/// fields. They are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    HighRisk,
    MediumRisk,
    LowRisk,
}

impl RiskLevel {
    /// Classify a total score: below 40 is high risk, below 60 medium,
    /// anything else low.
    pub fn from_score(total_score: f64) -> Self {
        if total_score < 40.0 {
            RiskLevel::HighRisk
        } else if total_score < 60.0 {
            RiskLevel::MediumRisk
        } else {
            RiskLevel::LowRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::HighRisk => "high-risk",
            RiskLevel::MediumRisk => "medium-risk",
            RiskLevel::LowRisk => "low-risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity subset of the metadata echoed in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub name: String,
    pub version: String,
    pub author: String,
    pub hash: String,
}

/// Risk findings for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityAssessment {
    /// Risk tier derived from the total score
    pub risk_level: RiskLevel,

    /// Total score the tier was derived from
    pub total_score: f64,

    /// One human-readable string per flagged sensitive permission
    pub permission_risks: Vec<String>,

    /// Advisory string when the trust chain is empty, otherwise empty
    pub trust_chain_issue: String,

    /// Count of permission risks plus one if there is a trust-chain issue
    pub issues_found: usize,
}

/// Pass/fail against the minimal compliance bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    /// Total score is at least 40
    pub min_score_requirement: bool,

    /// A content hash is present
    pub integrity_verification: bool,

    /// At least one permission is declared
    pub permission_manifest: bool,

    /// All three checks pass
    pub overall_compliance: bool,
}

/// Full audit report for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Unique per generation call
    pub report_id: Uuid,

    /// When the report was generated
    pub timestamp: DateTime<Utc>,

    pub skill_info: SkillInfo,
    pub trust_scores: TrustScores,
    pub security_assessment: SecurityAssessment,

    /// Advisory strings in a fixed order; the last two are always present
    pub recommendations: Vec<String>,

    pub compliance_status: ComplianceStatus,
}

/// Aggregate statistics over a batch of reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_skills: usize,
    pub high_risk_skills: usize,
    pub medium_risk_skills: usize,
    pub low_risk_skills: usize,

    /// Mean total score, rounded to 2 decimals; 0 when there are no reports
    pub average_trust_score: f64,

    /// Percentage of reports with overall compliance; 0 when empty
    pub compliance_rate: f64,
}

/// Fleet-wide summary embedding the detailed reports it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub report_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub summary: SummaryStats,
    pub detailed_reports: Vec<AuditReport>,
}
