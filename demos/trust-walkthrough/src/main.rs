//! Walkthrough of the skill trust toolkit against a sample skill tree.
//!
//! Seeds `demo-skills/` with two sample skills, audits them, records one
//! audit to `demo-ledger.json`, and verifies the resulting isnad chain.
//!
//! Run with: `cargo run -p trust-walkthrough`

use anyhow::{Context, Result};
use isnad_chain::{create_skill_hash, FileStore, IsnadLedger};
use skilltrust_core::SkillMetadata;
use skilltrust_integration::TrustPipeline;
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let root = Path::new("demo-skills");
    seed_sample_skills(root)?;

    let pipeline = TrustPipeline::new(vec![root.to_path_buf()]);

    // Audit a specific skill
    let skill_name = "weather";
    let report = pipeline
        .audit_skill(skill_name)
        .context("weather skill not found under demo-skills")?;

    println!("Security audit report for {}:", skill_name);
    println!("Risk level: {}", report.security_assessment.risk_level);
    println!("Trust score: {}", report.trust_scores.total_score);
    println!("Compliance: {}", report.compliance_status.overall_compliance);

    // Audit all skills
    let summary = pipeline.audit_all();
    println!();
    println!("Total skills audited: {}", summary.summary.total_skills);
    println!("Average trust score: {}", summary.summary.average_trust_score);

    // Record the audit to a ledger and verify the chain
    let store = FileStore::open("demo-ledger.json")?;
    let ledger = IsnadLedger::new(store);
    pipeline.audit_and_record(skill_name, "demo-auditor", &ledger)?;

    let identity = SkillMetadata::new(report.skill_info.name.clone())
        .with_version(report.skill_info.version.clone())
        .with_author(report.skill_info.author.clone());
    let verification = ledger.verify(&create_skill_hash(&identity))?;
    println!();
    println!("Ledger: {}", verification.message);
    println!("Chain length: {}", verification.chain_length);

    Ok(())
}

fn seed_sample_skills(root: &Path) -> Result<()> {
    let weather = root.join("weather");
    fs::create_dir_all(&weather)?;
    fs::write(
        weather.join("skill.json"),
        r#"{"version": "1.2.0", "permissions": ["network"]}"#,
    )?;
    fs::write(weather.join("main.py"), "print('weather skill')\n")?;

    let translate = root.join("translate");
    fs::create_dir_all(&translate)?;
    fs::write(
        translate.join("skill.json"),
        r#"{"author": "verified", "permissions": ["network"], "trust_chain": ["audit-2024"]}"#,
    )?;
    fs::write(translate.join("index.js"), "module.exports = {};\n")?;

    Ok(())
}
