//! # Isnad Chain: Append-Only Skill Audit Ledger
//!
//! A persistent audit trail for installable skills, keyed by identity hash.
//!
//! Named after the Islamic hadith authentication methodology where a saying
//! is only as trustworthy as its chain of transmission (isnad). Here the
//! chain records successive audit results for one skill, so callers can ask
//! how a skill has been judged over time.
//!
//! # Core Concepts
//!
//! - **Skill hash**: deterministic digest of (name, version, author), the
//!   ledger key
//! - **Audit record**: one auditor's result payload plus its extracted
//!   trust score
//! - **Chain verification**: aggregate view over a skill's full audit
//!   history
//!
//! # Example
//!
//! ```
//! use isnad_chain::{create_skill_hash, IsnadLedger, MemoryStore};
//! use skilltrust_core::SkillMetadata;
//!
//! let metadata = SkillMetadata::new("weather").with_author("trusted_author");
//! let skill_hash = create_skill_hash(&metadata);
//!
//! let ledger = IsnadLedger::new(MemoryStore::new());
//! ledger
//!     .add_audit(&skill_hash, "xiaomi_cat", serde_json::json!({"total_score": 85.0}))
//!     .unwrap();
//!
//! let verification = ledger.verify(&skill_hash).unwrap();
//! assert!(verification.verified);
//! assert_eq!(verification.chain_length, 1);
//! assert_eq!(verification.average_trust_score, 85.0);
//! ```

mod error;
mod hash;
mod ledger;
mod store;
mod types;

pub use error::ChainError;
pub use hash::{hash_bytes, hash_string};
pub use ledger::{create_skill_hash, IsnadLedger};
pub use store::{ChainStore, FileStore, MemoryStore};
pub use types::{AuditRecord, ChainEntry, ChainVerification};
