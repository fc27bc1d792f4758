//! Audit report generation.
//!
//! Combines a metadata record and a score breakdown into a structured risk
//! assessment, advisory recommendations, and a compliance verdict. Apart
//! from `report_id` and `timestamp`, generation is deterministic in its
//! inputs.

use chrono::Utc;
use serde::Serialize;
use skilltrust_core::{SkillMetadata, TrustScores};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::ReportError;
use crate::types::{
    AuditReport, ComplianceStatus, RiskLevel, SecurityAssessment, SkillInfo, SummaryReport,
    SummaryStats,
};

/// Permissions flagged as sensitive in the risk assessment.
pub const SENSITIVE_PERMISSIONS: &[&str] = &["filesystem", "network", "api_keys", "system"];

/// Generate an audit report for one skill.
pub fn generate_audit_report(metadata: &SkillMetadata, scores: &TrustScores) -> AuditReport {
    AuditReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        skill_info: SkillInfo {
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            author: metadata.author.clone(),
            hash: metadata.content_hash.clone(),
        },
        trust_scores: scores.clone(),
        security_assessment: assess_security(metadata, scores),
        recommendations: generate_recommendations(metadata, scores),
        compliance_status: check_compliance(metadata, scores),
    }
}

/// Generate reports for a batch of already-scored skills, preserving order.
pub fn generate_batch_audit_reports(skills: &[(SkillMetadata, TrustScores)]) -> Vec<AuditReport> {
    skills
        .iter()
        .map(|(metadata, scores)| generate_audit_report(metadata, scores))
        .collect()
}

/// Aggregate a batch of reports into a fleet-wide summary.
///
/// An empty batch degrades to zeroed statistics rather than a division
/// error. The detailed reports are embedded verbatim for downstream
/// consumers.
pub fn generate_summary_report(reports: Vec<AuditReport>) -> SummaryReport {
    let total_skills = reports.len();
    let count_risk = |level: RiskLevel| {
        reports
            .iter()
            .filter(|r| r.security_assessment.risk_level == level)
            .count()
    };

    let average_trust_score = if total_skills > 0 {
        let sum: f64 = reports.iter().map(|r| r.trust_scores.total_score).sum();
        round2(sum / total_skills as f64)
    } else {
        0.0
    };

    let compliance_rate = if total_skills > 0 {
        let compliant = reports
            .iter()
            .filter(|r| r.compliance_status.overall_compliance)
            .count();
        compliant as f64 / total_skills as f64 * 100.0
    } else {
        0.0
    };

    SummaryReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        summary: SummaryStats {
            total_skills,
            high_risk_skills: count_risk(RiskLevel::HighRisk),
            medium_risk_skills: count_risk(RiskLevel::MediumRisk),
            low_risk_skills: count_risk(RiskLevel::LowRisk),
            average_trust_score,
            compliance_rate,
        },
        detailed_reports: reports,
    }
}

/// Save an audit report as pretty-printed JSON.
///
/// # Errors
///
/// Returns `ReportError` if serialization or the write fails.
pub fn save_report(report: &AuditReport, path: impl AsRef<Path>) -> Result<(), ReportError> {
    save_json(report, path.as_ref())
}

/// Save a summary report as pretty-printed JSON.
///
/// # Errors
///
/// Returns `ReportError` if serialization or the write fails.
pub fn save_summary_report(
    report: &SummaryReport,
    path: impl AsRef<Path>,
) -> Result<(), ReportError> {
    save_json(report, path.as_ref())
}

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn assess_security(metadata: &SkillMetadata, scores: &TrustScores) -> SecurityAssessment {
    let permission_risks: Vec<String> = metadata
        .permissions
        .iter()
        .filter(|perm| SENSITIVE_PERMISSIONS.contains(&perm.as_str()))
        .map(|perm| format!("permission '{}' may pose a security risk", perm))
        .collect();

    let trust_chain_issue = if metadata.trust_chain.is_empty() {
        "missing trust chain verification".to_string()
    } else {
        String::new()
    };

    let issues_found =
        permission_risks.len() + if trust_chain_issue.is_empty() { 0 } else { 1 };

    SecurityAssessment {
        risk_level: RiskLevel::from_score(scores.total_score),
        total_score: scores.total_score,
        permission_risks,
        trust_chain_issue,
        issues_found,
    }
}

/// Advisory strings in a fixed order. The first three are conditional; the
/// final two apply to every skill regardless of score.
fn generate_recommendations(metadata: &SkillMetadata, scores: &TrustScores) -> Vec<String> {
    let mut recommendations = Vec::new();

    if scores.total_score < 60.0 {
        recommendations.push("conduct a code review and security testing".to_string());
    }

    if metadata.permissions.len() > 5 {
        recommendations.push("reduce unnecessary permissions".to_string());
    }

    if metadata.trust_chain.is_empty() {
        recommendations.push("establish trust chain verification".to_string());
    }

    recommendations.push("update the skill regularly to patch security vulnerabilities".to_string());
    recommendations.push("use encrypted transport for sensitive data".to_string());

    recommendations
}

fn check_compliance(metadata: &SkillMetadata, scores: &TrustScores) -> ComplianceStatus {
    let min_score_requirement = scores.total_score >= 40.0;
    let integrity_verification = !metadata.content_hash.is_empty();
    let permission_manifest = !metadata.permissions.is_empty();

    ComplianceStatus {
        min_score_requirement,
        integrity_verification,
        permission_manifest,
        overall_compliance: min_score_requirement && integrity_verification && permission_manifest,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
