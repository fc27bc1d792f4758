//! Core types for the isnad audit ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One audit appended to a skill's chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Identity of the agent that performed the audit
    pub auditor: String,

    /// When the audit was recorded
    pub timestamp: DateTime<Utc>,

    /// Raw audit result payload, kept verbatim
    pub result: serde_json::Value,

    /// Trust score lifted out of the payload for aggregation
    pub trust_score: f64,
}

impl AuditRecord {
    /// Create a record from an auditor identity and a raw result payload.
    ///
    /// The trust score is extracted from the payload's `total_score` field,
    /// defaulting to 0 when absent or non-numeric.
    pub fn new(auditor: impl Into<String>, result: serde_json::Value) -> Self {
        let trust_score = result
            .get("total_score")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0);

        Self {
            auditor: auditor.into(),
            timestamp: Utc::now(),
            result,
            trust_score,
        }
    }
}

/// Per-skill ledger entry. `audit_chain` is append-only: records are never
/// reordered or truncated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainEntry {
    /// Ledger key, a digest of the skill's identity
    pub skill_hash: String,

    /// When the entry was first created
    pub created_at: DateTime<Utc>,

    /// Ordered audit records, oldest first
    pub audit_chain: Vec<AuditRecord>,
}

impl ChainEntry {
    /// Create an empty entry stamped with the current time.
    pub fn new(skill_hash: impl Into<String>) -> Self {
        Self {
            skill_hash: skill_hash.into(),
            created_at: Utc::now(),
            audit_chain: vec![],
        }
    }
}

/// Result of verifying one skill's chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainVerification {
    /// Whether a non-empty chain exists for the skill
    pub verified: bool,

    /// Human-readable outcome description
    pub message: String,

    /// Number of audit records in the chain
    pub chain_length: usize,

    /// Arithmetic mean of recorded trust scores, rounded to 2 decimals
    pub average_trust_score: f64,

    /// Auditor identities in append order, duplicates preserved
    pub auditors: Vec<String>,

    /// Timestamp of the most recent audit record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_audit: Option<DateTime<Utc>>,
}

impl ChainVerification {
    pub fn not_verified(message: impl Into<String>) -> Self {
        Self {
            verified: false,
            message: message.into(),
            chain_length: 0,
            average_trust_score: 0.0,
            auditors: vec![],
            latest_audit: None,
        }
    }
}
