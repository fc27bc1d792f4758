//! Skill Trust Command Line Tool
//!
//! Provides commands for scoring and auditing platform skills:
//! - hash: Compute the identity hash of a skill metadata file
//! - score: Score a skill metadata file
//! - audit: Audit one collected skill, optionally recording to a ledger
//! - audit-all: Audit every skill under the given roots into a summary
//! - chain verify: Verify the isnad chain recorded for a skill hash
//! - check-install: Gate a staged skill directory before installation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use isnad_chain::{create_skill_hash, FileStore, IsnadLedger};
use skilltrust_core::{calculate_trust_score, SkillMetadata, TrustLevel};
use skilltrust_integration::TrustPipeline;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skilltrust")]
#[command(version)]
#[command(about = "Skill Trust Command Line Tool - Score, audit, and attest platform skills")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the identity hash of a skill metadata file
    Hash {
        /// Path to the metadata JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Score a skill metadata file
    Score {
        /// Path to the metadata JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Audit one skill collected from the given root directories
    Audit {
        /// Name of the skill to audit
        #[arg(value_name = "NAME")]
        name: String,

        /// Skill root directory (can be repeated)
        #[arg(long, short, value_name = "DIR", required = true)]
        dir: Vec<PathBuf>,

        /// Record the audit to this ledger file
        #[arg(long, value_name = "FILE", requires = "auditor")]
        ledger: Option<PathBuf>,

        /// Auditor identity for the ledger record
        #[arg(long, value_name = "ID", requires = "ledger")]
        auditor: Option<String>,
    },

    /// Audit every skill under the given root directories
    AuditAll {
        /// Skill root directory (can be repeated)
        #[arg(long, short, value_name = "DIR", required = true)]
        dir: Vec<PathBuf>,

        /// Also write the summary report to this file
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Isnad chain operations
    #[command(subcommand)]
    Chain(ChainCommands),

    /// Gate a staged skill directory before installation
    CheckInstall {
        /// Path to the unpacked skill directory
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum ChainCommands {
    /// Verify the audit chain recorded for a skill hash
    Verify {
        /// Skill identity hash (see `skilltrust hash`)
        #[arg(value_name = "HASH")]
        hash: String,

        /// Path to the ledger file
        #[arg(long, short, value_name = "FILE")]
        ledger: PathBuf,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { file } => cmd_hash(&file),
        Commands::Score { file } => cmd_score(&file),
        Commands::Audit {
            name,
            dir,
            ledger,
            auditor,
        } => cmd_audit(&name, dir, ledger, auditor),
        Commands::AuditAll { dir, output } => cmd_audit_all(dir, output),
        Commands::Chain(ChainCommands::Verify { hash, ledger }) => cmd_chain_verify(&hash, &ledger),
        Commands::CheckInstall { path } => cmd_check_install(&path),
    }
}

fn read_metadata(file: &PathBuf) -> Result<SkillMetadata> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    let metadata: SkillMetadata = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse {} as skill metadata", file.display()))?;

    Ok(metadata)
}

fn cmd_hash(file: &PathBuf) -> Result<()> {
    let metadata = read_metadata(file)?;

    println!("{}", create_skill_hash(&metadata));

    Ok(())
}

fn cmd_score(file: &PathBuf) -> Result<()> {
    let metadata = read_metadata(file)?;

    let scores = calculate_trust_score(&metadata);
    let trust_level = TrustLevel::from_score(scores.total_score);

    let output = serde_json::json!({
        "skill_name": metadata.name,
        "scores": scores,
        "trust_level": trust_level,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn cmd_audit(
    name: &str,
    dirs: Vec<PathBuf>,
    ledger_path: Option<PathBuf>,
    auditor: Option<String>,
) -> Result<()> {
    let pipeline = TrustPipeline::new(dirs);

    let report = match (ledger_path, auditor) {
        (Some(path), Some(auditor)) => {
            let store = FileStore::open(&path)
                .with_context(|| format!("Failed to open ledger: {}", path.display()))?;
            let ledger = IsnadLedger::new(store);
            pipeline
                .audit_and_record(name, &auditor, &ledger)
                .with_context(|| "Failed to record audit to ledger")?
        }
        _ => pipeline.audit_skill(name),
    };

    match report {
        Some(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        None => {
            eprintln!("Skill not found: {}", name);
            std::process::exit(1);
        }
    }
}

fn cmd_audit_all(dirs: Vec<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let pipeline = TrustPipeline::new(dirs);

    let summary = match output {
        Some(path) => {
            let summary = pipeline
                .write_summary_file(&path)
                .with_context(|| format!("Failed to write summary to {}", path.display()))?;
            eprintln!("Summary report written to {}", path.display());
            summary
        }
        None => pipeline.audit_all(),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn cmd_chain_verify(hash: &str, ledger_path: &PathBuf) -> Result<()> {
    let store = FileStore::open(ledger_path)
        .with_context(|| format!("Failed to open ledger: {}", ledger_path.display()))?;
    let ledger = IsnadLedger::new(store);

    let verification = ledger
        .verify(hash)
        .with_context(|| "Failed to verify chain")?;

    println!("{}", serde_json::to_string_pretty(&verification)?);

    if !verification.verified {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_check_install(path: &PathBuf) -> Result<()> {
    let skill_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());

    let pipeline = TrustPipeline::new(Vec::new());

    match pipeline.check_before_install(&skill_name, path) {
        Some(check) => {
            println!("{}", serde_json::to_string_pretty(&check)?);
            if !check.can_install {
                eprintln!(
                    "Install blocked: {} is {}",
                    check.skill_name, check.risk_level
                );
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            eprintln!("Cannot assess skill at {}", path.display());
            std::process::exit(1);
        }
    }
}
