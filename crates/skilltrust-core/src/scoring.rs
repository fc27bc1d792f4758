//! Trust-scoring engine.
//!
//! Converts a [`SkillMetadata`] record into a per-factor score breakdown and
//! a weighted total in [0, 100]. Scoring is pure and total: absent fields
//! already resolved to defaults when the record was constructed, so every
//! call returns a value.

use crate::types::{ScoredSkill, SkillMetadata, TrustLevel, TrustScores};

/// Factor weights. These sum to exactly 1.0.
pub const AUTHOR_REPUTATION_WEIGHT: f64 = 0.20;
pub const COMMUNITY_AUDIT_WEIGHT: f64 = 0.25;
pub const USAGE_HISTORY_WEIGHT: f64 = 0.20;
pub const PERMISSION_REASONABLENESS_WEIGHT: f64 = 0.20;
pub const CODE_QUALITY_WEIGHT: f64 = 0.15;

/// Authors granted the verified-tier reputation score.
///
/// A small fixed set rather than a lookup against an external reputation
/// store.
pub const VERIFIED_AUTHORS: &[&str] = &["verified", "trusted"];

/// Calculate the trust score breakdown for one skill.
pub fn calculate_trust_score(metadata: &SkillMetadata) -> TrustScores {
    let author_reputation = author_reputation_score(metadata);
    let community_audit = community_audit_score(metadata);
    let usage_history = usage_history_score(metadata);
    let permission_reasonableness = permission_reasonableness_score(metadata);
    let code_quality = code_quality_score(metadata);

    let total = author_reputation * AUTHOR_REPUTATION_WEIGHT
        + community_audit * COMMUNITY_AUDIT_WEIGHT
        + usage_history * USAGE_HISTORY_WEIGHT
        + permission_reasonableness * PERMISSION_REASONABLENESS_WEIGHT
        + code_quality * CODE_QUALITY_WEIGHT;

    TrustScores {
        author_reputation,
        community_audit,
        usage_history,
        permission_reasonableness,
        code_quality,
        total_score: round2(total),
    }
}

/// Score every skill in order, pairing each breakdown with its trust level.
pub fn calculate_batch_trust_scores(skills: &[SkillMetadata]) -> Vec<ScoredSkill> {
    skills
        .iter()
        .map(|metadata| {
            let scores = calculate_trust_score(metadata);
            let trust_level = TrustLevel::from_score(scores.total_score);
            ScoredSkill {
                skill_name: metadata.name.clone(),
                scores,
                trust_level,
            }
        })
        .collect()
}

/// Three-tier heuristic: unknown author, verified set, any other name.
fn author_reputation_score(metadata: &SkillMetadata) -> f64 {
    if metadata.author == "unknown" {
        50.0
    } else if VERIFIED_AUTHORS.contains(&metadata.author.as_str()) {
        90.0
    } else {
        70.0
    }
}

fn community_audit_score(metadata: &SkillMetadata) -> f64 {
    match metadata.trust_chain.len() {
        0 => 40.0,
        n if n >= 3 => 90.0,
        n => 60.0 + 10.0 * n as f64,
    }
}

/// Constant placeholder until real usage telemetry is wired in.
fn usage_history_score(_metadata: &SkillMetadata) -> f64 {
    60.0
}

/// Fewer requested permissions score higher.
fn permission_reasonableness_score(metadata: &SkillMetadata) -> f64 {
    match metadata.permissions.len() {
        0 => 90.0,
        1..=2 => 80.0,
        3..=5 => 60.0,
        _ => 40.0,
    }
}

fn code_quality_score(metadata: &SkillMetadata) -> f64 {
    if metadata.content_hash.is_empty() {
        40.0
    } else {
        70.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
