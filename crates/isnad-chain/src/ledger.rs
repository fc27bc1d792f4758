//! Append-only audit ledger.
//!
//! # Concept
//!
//! An isnad chain records who audited a skill and what they concluded:
//!
//! ```text
//! Skill "weather" (hash 3f8a...)
//!   ├─ audited by xiaomi_cat   score 58.5
//!   ├─ audited by rufio        score 72.0
//!   └─ audited by xiaomi_cat   score 61.0
//! ```
//!
//! Verification answers: "How has this skill been judged over time?" The
//! chain is a sequential audit log keyed by identity hash, not a
//! cryptographically linked hash chain.

use skilltrust_core::SkillMetadata;

use crate::error::ChainError;
use crate::hash::hash_string;
use crate::store::ChainStore;
use crate::types::{AuditRecord, ChainEntry, ChainVerification};

/// Derive the ledger key for a skill.
///
/// The digest covers only the (name, version, author) triple. Two records
/// that agree on those three fields hash identically no matter how their
/// permissions or trust chain differ: ledger identity is who published
/// what at which version, not the current content.
pub fn create_skill_hash(metadata: &SkillMetadata) -> String {
    hash_string(&format!(
        "{}:{}:{}",
        metadata.name, metadata.version, metadata.author
    ))
}

/// Audit ledger over a pluggable [`ChainStore`] backend.
pub struct IsnadLedger<S: ChainStore> {
    store: S,
}

impl<S: ChainStore> IsnadLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append one audit result under a skill hash.
    ///
    /// The chain entry is created on first append, stamped with the current
    /// time. The backing store persists the change before this returns.
    ///
    /// # Errors
    ///
    /// Returns `ChainError` if persistence fails.
    pub fn add_audit(
        &self,
        skill_hash: &str,
        auditor: &str,
        audit_result: serde_json::Value,
    ) -> Result<(), ChainError> {
        self.store
            .append(skill_hash, AuditRecord::new(auditor, audit_result))
    }

    /// Copy of the raw chain entry for a skill hash, if one exists.
    pub fn entry(&self, skill_hash: &str) -> Result<Option<ChainEntry>, ChainError> {
        self.store.get(skill_hash)
    }

    /// Snapshot of every entry in the ledger.
    pub fn entries(&self) -> Result<std::collections::HashMap<String, ChainEntry>, ChainError> {
        self.store.load()
    }

    /// Verify a skill's chain and aggregate its audit history.
    ///
    /// An unknown hash or an empty chain yields a not-verified result with
    /// zeroed statistics. Otherwise the result carries the chain length,
    /// the mean of all recorded trust scores, the auditor identities in
    /// append order (duplicates preserved, reflecting repeat audits), and
    /// the timestamp of the most recent record. The mean blends scores
    /// from possibly different audit runs over time; it is a running
    /// reputation signal, not a single authoritative score.
    ///
    /// # Errors
    ///
    /// Returns `ChainError` if the backing store fails.
    pub fn verify(&self, skill_hash: &str) -> Result<ChainVerification, ChainError> {
        let entry = match self.store.get(skill_hash)? {
            Some(entry) => entry,
            None => {
                return Ok(ChainVerification::not_verified(
                    "no isnad chain recorded for this skill",
                ))
            }
        };

        if entry.audit_chain.is_empty() {
            return Ok(ChainVerification::not_verified("isnad chain is empty"));
        }

        let total: f64 = entry.audit_chain.iter().map(|r| r.trust_score).sum();
        let average = total / entry.audit_chain.len() as f64;
        let auditors = entry
            .audit_chain
            .iter()
            .map(|r| r.auditor.clone())
            .collect();

        Ok(ChainVerification {
            verified: true,
            message: format!(
                "isnad chain verified with {} audit record(s)",
                entry.audit_chain.len()
            ),
            chain_length: entry.audit_chain.len(),
            average_trust_score: round2(average),
            auditors,
            latest_audit: entry.audit_chain.last().map(|r| r.timestamp),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
