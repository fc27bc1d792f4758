//! Metadata validation.
//!
//! Scoring accepts any [`SkillMetadata`] record, so validation is a separate
//! opt-in step for boundaries that want to reject malformed records before
//! scoring or recording them.

use crate::types::SkillMetadata;
use thiserror::Error;

/// Errors that can occur during metadata validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Skill name must not be empty")]
    EmptyName,

    #[error("Invalid content hash '{0}': must be 64 hex characters")]
    InvalidContentHash(String),
}

/// Validate a metadata record.
///
/// An empty `content_hash` passes: absence of a hash is an allowed state that
/// scoring penalizes rather than an error. A non-empty hash must be a full
/// SHA-256 hex digest.
///
/// # Errors
///
/// Returns `ValidationError` if the record is invalid.
pub fn validate_metadata(metadata: &SkillMetadata) -> Result<(), ValidationError> {
    if metadata.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if !metadata.content_hash.is_empty() && !is_valid_content_hash(&metadata.content_hash) {
        return Err(ValidationError::InvalidContentHash(
            metadata.content_hash.clone(),
        ));
    }

    Ok(())
}

/// Check whether a string is a well-formed SHA-256 hex digest.
pub fn is_valid_content_hash(hash: &str) -> bool {
    hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_metadata() {
        let metadata = SkillMetadata::new("weather");
        assert!(validate_metadata(&metadata).is_ok());
    }

    #[test]
    fn test_empty_name() {
        let metadata = SkillMetadata::new("");
        assert!(matches!(
            validate_metadata(&metadata),
            Err(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_empty_hash_is_allowed() {
        let metadata = SkillMetadata::new("weather");
        assert!(metadata.content_hash.is_empty());
        assert!(validate_metadata(&metadata).is_ok());
    }

    #[test]
    fn test_full_hash_is_allowed() {
        let metadata = SkillMetadata::new("weather").with_content_hash("a".repeat(64));
        assert!(validate_metadata(&metadata).is_ok());
    }

    #[test]
    fn test_short_hash_rejected() {
        let metadata = SkillMetadata::new("weather").with_content_hash("deadbeef");
        assert!(matches!(
            validate_metadata(&metadata),
            Err(ValidationError::InvalidContentHash(_))
        ));
    }

    #[test]
    fn test_non_hex_hash_rejected() {
        let metadata = SkillMetadata::new("weather").with_content_hash("z".repeat(64));
        assert!(matches!(
            validate_metadata(&metadata),
            Err(ValidationError::InvalidContentHash(_))
        ));
    }

    #[test]
    fn test_is_valid_content_hash() {
        assert!(is_valid_content_hash(&"0123456789abcdef".repeat(4)));
        assert!(is_valid_content_hash(&"A".repeat(64)));
        assert!(!is_valid_content_hash(""));
        assert!(!is_valid_content_hash("abc"));
        assert!(!is_valid_content_hash(&"a".repeat(65)));
        assert!(!is_valid_content_hash(&"g".repeat(64)));
    }
}
