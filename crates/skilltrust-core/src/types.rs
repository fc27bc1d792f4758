//! Core types for the skill trust network.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Normalized description of one installable skill.
///
/// Produced once per audit request by a metadata collector and treated as
/// immutable for the duration of a scoring/audit call. Fields missing from
/// a serialized record resolve to the documented defaults, so scoring never
/// has to handle absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMetadata {
    /// Skill name
    pub name: String,

    /// Skill version
    #[serde(default = "default_version")]
    pub version: String,

    /// Declared author identity
    #[serde(default = "default_author")]
    pub author: String,

    /// Declared capabilities requested by the skill
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Prior trust references; opaque to scoring beyond length/presence
    #[serde(default)]
    pub trust_chain: Vec<String>,

    /// Hex SHA-256 digest of the skill's file contents, or empty when
    /// unknown/unverifiable
    #[serde(default)]
    pub content_hash: String,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_author() -> String {
    "unknown".to_string()
}

impl SkillMetadata {
    /// Create a metadata record with the documented defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            author: default_author(),
            permissions: Vec::new(),
            trust_chain: Vec::new(),
            content_hash: String::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_trust_chain(mut self, trust_chain: Vec<String>) -> Self {
        self.trust_chain = trust_chain;
        self
    }

    pub fn with_content_hash(mut self, content_hash: impl Into<String>) -> Self {
        self.content_hash = content_hash.into();
        self
    }
}

/// Per-factor score breakdown with the derived weighted total.
///
/// Every sub-score lies in [0, 100]; `total_score` is the weighted sum of
/// the five factors, rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustScores {
    pub author_reputation: f64,
    pub community_audit: f64,
    pub usage_history: f64,
    pub permission_reasonableness: f64,
    pub code_quality: f64,
    pub total_score: f64,
}

/// Four-tier qualitative trust label derived from the total score.
///
/// Boundaries are inclusive lower bounds at 40/60/80, so every score in
/// [0, 100] maps to exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    High,
    Medium,
    Low,
    Untrusted,
}

impl TrustLevel {
    /// Map a total score to its trust level.
    pub fn from_score(total_score: f64) -> Self {
        if total_score >= 80.0 {
            TrustLevel::High
        } else if total_score >= 60.0 {
            TrustLevel::Medium
        } else if total_score >= 40.0 {
            TrustLevel::Low
        } else {
            TrustLevel::Untrusted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::High => "high",
            TrustLevel::Medium => "medium",
            TrustLevel::Low => "low",
            TrustLevel::Untrusted => "untrusted",
        }
    }
}

impl Display for TrustLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a batch scoring result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSkill {
    pub skill_name: String,
    pub scores: TrustScores,
    pub trust_level: TrustLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_metadata_defaults() {
        let metadata = SkillMetadata::new("weather");
        assert_eq!(metadata.version, "1.0.0");
        assert_eq!(metadata.author, "unknown");
        assert!(metadata.permissions.is_empty());
        assert!(metadata.trust_chain.is_empty());
        assert!(metadata.content_hash.is_empty());
    }

    #[test]
    fn test_metadata_missing_fields_deserialize_to_defaults() {
        let metadata: SkillMetadata = serde_json::from_str(r#"{"name": "weather"}"#).unwrap();
        assert_eq!(metadata, SkillMetadata::new("weather"));
    }

    #[test]
    fn test_metadata_serialization_roundtrip() {
        let metadata = SkillMetadata::new("weather")
            .with_version("2.1.0")
            .with_author("acme")
            .with_permissions(vec!["network".to_string(), "filesystem".to_string()])
            .with_trust_chain(vec!["auditor-a".to_string()])
            .with_content_hash("ab".repeat(32));

        let json = serde_json::to_string(&metadata).unwrap();
        let parsed: SkillMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, parsed);
    }

    #[test]
    fn test_metadata_preserves_utf8() {
        let metadata = SkillMetadata::new("天气").with_author("小米猫");
        let json = serde_json::to_string(&metadata).unwrap();
        assert!(json.contains("天气"));
        assert!(json.contains("小米猫"));
    }

    #[test]
    fn test_trust_level_boundaries() {
        assert_eq!(TrustLevel::from_score(100.0), TrustLevel::High);
        assert_eq!(TrustLevel::from_score(80.0), TrustLevel::High);
        assert_eq!(TrustLevel::from_score(79.99), TrustLevel::Medium);
        assert_eq!(TrustLevel::from_score(60.0), TrustLevel::Medium);
        assert_eq!(TrustLevel::from_score(59.99), TrustLevel::Low);
        assert_eq!(TrustLevel::from_score(40.0), TrustLevel::Low);
        assert_eq!(TrustLevel::from_score(39.99), TrustLevel::Untrusted);
        assert_eq!(TrustLevel::from_score(0.0), TrustLevel::Untrusted);
    }

    #[test]
    fn test_trust_level_serialization() {
        assert_eq!(serde_json::to_string(&TrustLevel::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&TrustLevel::Untrusted).unwrap(),
            "\"untrusted\""
        );
    }

    #[test]
    fn test_trust_level_display() {
        assert_eq!(TrustLevel::Medium.to_string(), "medium");
        assert_eq!(TrustLevel::Low.to_string(), "low");
    }
}
