//! End-to-end pipeline tests over real skill directories and a real
//! file-backed ledger.

use isnad_chain::{create_skill_hash, FileStore, IsnadLedger};
use pretty_assertions::assert_eq;
use skilltrust_integration::TrustPipeline;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_audit_and_record_appends_to_ledger() {
    let root = tempdir().unwrap();
    write(
        &root.path().join("weather/skill.json"),
        r#"{"permissions": ["network"]}"#,
    );
    write(&root.path().join("weather/main.py"), "print('weather')\n");

    let ledger_dir = tempdir().unwrap();
    let store = FileStore::open(ledger_dir.path().join("ledger.json")).unwrap();
    let ledger = IsnadLedger::new(store);

    let pipeline = TrustPipeline::new(vec![root.path().to_path_buf()]);
    let report = pipeline
        .audit_and_record("weather", "security-team", &ledger)
        .unwrap()
        .unwrap();

    assert_eq!(report.trust_scores.total_score, 58.5);

    // Recompute the ledger key from the audited identity fields.
    let info = &report.skill_info;
    let lookup = skilltrust_core::SkillMetadata::new(info.name.clone())
        .with_version(info.version.clone())
        .with_author(info.author.clone());
    let skill_hash = create_skill_hash(&lookup);

    let verification = ledger.verify(&skill_hash).unwrap();
    assert!(verification.verified);
    assert_eq!(verification.chain_length, 1);
    assert_eq!(verification.average_trust_score, 58.5);
    assert_eq!(verification.auditors, vec!["security-team"]);
}

#[test]
fn test_audit_and_record_unknown_skill_leaves_ledger_empty() {
    let root = tempdir().unwrap();
    let ledger_dir = tempdir().unwrap();
    let store = FileStore::open(ledger_dir.path().join("ledger.json")).unwrap();
    let ledger = IsnadLedger::new(store);

    let pipeline = TrustPipeline::new(vec![root.path().to_path_buf()]);
    let outcome = pipeline
        .audit_and_record("ghost", "security-team", &ledger)
        .unwrap();

    assert!(outcome.is_none());
    assert!(ledger.entries().unwrap().is_empty());
}

#[test]
fn test_repeated_audits_grow_one_chain() {
    let root = tempdir().unwrap();
    write(
        &root.path().join("notes/skill.json"),
        r#"{"author": "verified", "permissions": []}"#,
    );
    write(&root.path().join("notes/app.js"), "export default {};\n");

    let ledger_dir = tempdir().unwrap();
    let store = FileStore::open(ledger_dir.path().join("ledger.json")).unwrap();
    let ledger = IsnadLedger::new(store);

    let pipeline = TrustPipeline::new(vec![root.path().to_path_buf()]);
    let report = pipeline
        .audit_and_record("notes", "alice", &ledger)
        .unwrap()
        .unwrap();
    pipeline
        .audit_and_record("notes", "bob", &ledger)
        .unwrap()
        .unwrap();

    let lookup = skilltrust_core::SkillMetadata::new("notes").with_author("verified");
    let skill_hash = create_skill_hash(&lookup);

    let verification = ledger.verify(&skill_hash).unwrap();
    assert_eq!(verification.chain_length, 2);
    assert_eq!(verification.auditors, vec!["alice", "bob"]);
    // Both audits scored the same tree, so the mean equals either score.
    assert_eq!(verification.average_trust_score, report.trust_scores.total_score);
}

#[test]
fn test_write_summary_file_round_trips() {
    let root = tempdir().unwrap();
    write(
        &root.path().join("weather/skill.json"),
        r#"{"permissions": ["network"]}"#,
    );
    write(&root.path().join("weather/main.py"), "print('weather')\n");

    let out = tempdir().unwrap();
    let summary_path = out.path().join("summary.json");

    let pipeline = TrustPipeline::new(vec![root.path().to_path_buf()]);
    let summary = pipeline.write_summary_file(&summary_path).unwrap();

    assert_eq!(summary.summary.total_skills, 1);

    let raw = fs::read_to_string(&summary_path).unwrap();
    let persisted: skilltrust_report::SummaryReport = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.report_id, summary.report_id);
    assert_eq!(persisted.summary, summary.summary);
    assert_eq!(persisted.detailed_reports.len(), 1);
}
