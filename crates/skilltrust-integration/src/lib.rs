//! Host platform integration for the skill trust toolkit.
//!
//! [`TrustPipeline`] wires the collector, the scoring engine, the report
//! generator, and the isnad ledger into the operations a skill platform
//! calls: auditing one skill or a whole fleet, gating installs, keeping
//! per-skill status snapshots, and feeding a dashboard.
//!
//! ```
//! use skilltrust_integration::TrustPipeline;
//! use std::path::PathBuf;
//!
//! let pipeline = TrustPipeline::new(vec![PathBuf::from("/no/skills/here")]);
//! assert!(pipeline.audit_skill("weather").is_none());
//! ```

mod pipeline;
mod types;

pub use pipeline::TrustPipeline;
pub use types::{DashboardData, InstallCheck, SecurityStatus, SkillStatus};
