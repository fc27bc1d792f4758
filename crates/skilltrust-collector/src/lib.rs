//! # Skilltrust Collector: Filesystem Metadata Collection
//!
//! Scans skill directories and produces normalized [`SkillMetadata`]
//! records: manifest files (`package.json`, `skill.json`, `manifest.json`)
//! merged over safe defaults, plus a content hash over the skill's code
//! files.
//!
//! Collection is best-effort: unreadable or malformed files are logged and
//! skipped rather than failing the whole scan.
//!
//! [`SkillMetadata`]: skilltrust_core::SkillMetadata

mod collector;
mod manifest;

pub use collector::SkillCollector;
pub use manifest::{SkillManifest, MANIFEST_FILES};
