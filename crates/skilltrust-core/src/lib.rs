//! # Skilltrust Core
//!
//! Core types and trust scoring for the skill trust network.
//!
//! This crate provides:
//! - The metadata record describing one installable skill
//! - The trust-scoring engine (pure, total, no I/O)
//! - Trust levels derived from the numeric total score
//! - Boundary validation for metadata records
//!
//! ## Example
//!
//! ```rust
//! use skilltrust_core::{calculate_trust_score, SkillMetadata, TrustLevel};
//!
//! let metadata = SkillMetadata::new("weather")
//!     .with_permissions(vec!["network".to_string()])
//!     .with_content_hash("deadbeef");
//!
//! let scores = calculate_trust_score(&metadata);
//! assert_eq!(scores.total_score, 58.5);
//! assert_eq!(TrustLevel::from_score(scores.total_score), TrustLevel::Low);
//! ```

pub mod scoring;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use scoring::*;
pub use types::*;
pub use validation::*;
