//! The audit pipeline.
//!
//! Composes the collector, the scoring engine, the report generator, and
//! the isnad ledger into the operations a host platform actually calls.
//! The three core components never call each other; all wiring lives here.

use isnad_chain::{create_skill_hash, ChainError, ChainStore, IsnadLedger};
use skilltrust_collector::SkillCollector;
use skilltrust_core::{calculate_trust_score, SkillMetadata, TrustLevel, TrustScores};
use skilltrust_report::{
    generate_audit_report, generate_batch_audit_reports, generate_summary_report,
    save_summary_report, AuditReport, ReportError, RiskLevel, SummaryReport,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::types::{DashboardData, InstallCheck, SecurityStatus, SkillStatus};

/// Host-facing pipeline over a set of skill root directories.
pub struct TrustPipeline {
    skill_directories: Vec<PathBuf>,
    collector: SkillCollector,
}

impl TrustPipeline {
    pub fn new(skill_directories: Vec<PathBuf>) -> Self {
        let collector = SkillCollector::new(skill_directories.clone());
        Self {
            skill_directories,
            collector,
        }
    }

    /// Audit one skill by name. `None` means the skill could not be found,
    /// so it cannot be assessed.
    pub fn audit_skill(&self, skill_name: &str) -> Option<AuditReport> {
        let metadata = self.collector.collect(skill_name)?;
        let scores = calculate_trust_score(&metadata);
        Some(generate_audit_report(&metadata, &scores))
    }

    /// Audit every skill under every root into a fleet summary.
    pub fn audit_all(&self) -> SummaryReport {
        let scored: Vec<(SkillMetadata, TrustScores)> = self
            .collector
            .collect_all()
            .into_iter()
            .map(|metadata| {
                let scores = calculate_trust_score(&metadata);
                (metadata, scores)
            })
            .collect();

        let reports = generate_batch_audit_reports(&scored);
        generate_summary_report(reports)
    }

    /// Audit one skill and append the outcome to the isnad ledger, keyed by
    /// the skill's identity hash.
    ///
    /// The appended payload is a compact summary carrying the total score,
    /// risk level, issue count, and compliance verdict, so chain
    /// verification can aggregate it later.
    ///
    /// # Errors
    ///
    /// Returns `ChainError` if the ledger append fails. An unknown skill is
    /// not an error; it yields `Ok(None)` and leaves the ledger untouched.
    pub fn audit_and_record<S: ChainStore>(
        &self,
        skill_name: &str,
        auditor: &str,
        ledger: &IsnadLedger<S>,
    ) -> Result<Option<AuditReport>, ChainError> {
        let metadata = match self.collector.collect(skill_name) {
            Some(metadata) => metadata,
            None => return Ok(None),
        };

        let scores = calculate_trust_score(&metadata);
        let report = generate_audit_report(&metadata, &scores);

        let skill_hash = create_skill_hash(&metadata);
        let audit_result = serde_json::json!({
            "total_score": report.trust_scores.total_score,
            "risk_level": report.security_assessment.risk_level,
            "issues_found": report.security_assessment.issues_found,
            "compliance_status": report.compliance_status.overall_compliance,
        });
        ledger.add_audit(&skill_hash, auditor, audit_result)?;

        Ok(Some(report))
    }

    /// Gate an unpacked skill directory before it is installed.
    ///
    /// `skill_path` points at the staged directory itself; it does not have
    /// to live under the configured roots. Returns `None` when no metadata
    /// can be collected from the path.
    pub fn check_before_install(
        &self,
        skill_name: &str,
        skill_path: &Path,
    ) -> Option<InstallCheck> {
        let parent = skill_path.parent()?;
        let dir_name = skill_path.file_name()?.to_str()?;

        let staged = SkillCollector::new(vec![parent.to_path_buf()]);
        let metadata = staged.collect(dir_name)?;

        let scores = calculate_trust_score(&metadata);
        let report = generate_audit_report(&metadata, &scores);
        let risk_level = report.security_assessment.risk_level;

        Some(InstallCheck {
            skill_name: skill_name.to_string(),
            trust_score: scores.total_score,
            risk_level,
            can_install: risk_level != RiskLevel::HighRisk,
            report,
        })
    }

    /// Trust label for one skill. `None` when the skill could not be found.
    pub fn trust_level_for(&self, skill_name: &str) -> Option<TrustLevel> {
        let metadata = self.collector.collect(skill_name)?;
        let scores = calculate_trust_score(&metadata);
        Some(TrustLevel::from_score(scores.total_score))
    }

    /// Re-audit a skill and persist a status snapshot into its directory.
    ///
    /// The snapshot write is best-effort: a failure is logged and the
    /// status is still returned.
    pub fn update_security_status(&self, skill_name: &str) -> Option<SecurityStatus> {
        let report = self.audit_skill(skill_name)?;

        let status = SecurityStatus {
            skill_name: skill_name.to_string(),
            timestamp: report.timestamp,
            trust_score: report.trust_scores.total_score,
            risk_level: report.security_assessment.risk_level,
            compliant: report.compliance_status.overall_compliance,
            issues_found: report.security_assessment.issues_found,
        };

        self.save_security_status(skill_name, &status);
        Some(status)
    }

    /// Audit all skills and project the result for a host dashboard.
    pub fn dashboard_data(&self) -> DashboardData {
        let summary_report = self.audit_all();

        let skill_statuses = summary_report
            .detailed_reports
            .iter()
            .map(|report| SkillStatus {
                name: report.skill_info.name.clone(),
                trust_score: report.trust_scores.total_score,
                risk_level: report.security_assessment.risk_level,
                compliant: report.compliance_status.overall_compliance,
            })
            .collect();

        DashboardData {
            summary: summary_report.summary,
            timestamp: summary_report.timestamp,
            skill_statuses,
        }
    }

    /// Audit all skills and write the summary report to a file.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the summary cannot be written.
    pub fn write_summary_file(&self, path: impl AsRef<Path>) -> Result<SummaryReport, ReportError> {
        let summary = self.audit_all();
        save_summary_report(&summary, path)?;
        Ok(summary)
    }

    fn save_security_status(&self, skill_name: &str, status: &SecurityStatus) {
        for root in &self.skill_directories {
            let skill_path = root.join(skill_name);
            if !skill_path.is_dir() {
                continue;
            }

            let status_file = skill_path.join("security_status.json");
            match serde_json::to_string_pretty(status) {
                Ok(json) => {
                    if let Err(e) = fs::write(&status_file, json) {
                        warn!(path = %status_file.display(), error = %e, "failed to save security status");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to serialize security status");
                }
            }
            break;
        }
    }
}
