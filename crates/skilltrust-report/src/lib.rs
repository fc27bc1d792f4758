//! # Skilltrust Report: Security Audit Reports
//!
//! Turns a scored skill into a structured audit report: risk assessment,
//! advisory recommendations, and a compliance verdict. Also aggregates
//! batches of reports into fleet-wide summaries.
//!
//! # Example
//!
//! ```
//! use skilltrust_core::{calculate_trust_score, SkillMetadata};
//! use skilltrust_report::{generate_audit_report, RiskLevel};
//!
//! let metadata = SkillMetadata::new("weather")
//!     .with_permissions(vec!["network".to_string()])
//!     .with_content_hash("deadbeef");
//! let scores = calculate_trust_score(&metadata);
//!
//! let report = generate_audit_report(&metadata, &scores);
//! assert_eq!(report.security_assessment.risk_level, RiskLevel::MediumRisk);
//! assert_eq!(report.security_assessment.issues_found, 2);
//! ```

mod error;
mod report;
mod types;

pub use error::ReportError;
pub use report::{
    generate_audit_report, generate_batch_audit_reports, generate_summary_report, save_report,
    save_summary_report, SENSITIVE_PERMISSIONS,
};
pub use types::{
    AuditReport, ComplianceStatus, RiskLevel, SecurityAssessment, SkillInfo, SummaryReport,
    SummaryStats,
};
