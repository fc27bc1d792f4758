//! Manifest file parsing.

use serde::Deserialize;
use skilltrust_core::SkillMetadata;

/// Manifest filenames probed inside a skill directory, in merge order.
/// Fields set by a later file override the same fields from an earlier one.
pub const MANIFEST_FILES: &[&str] = &["package.json", "skill.json", "manifest.json"];

/// Partial metadata as declared by one manifest file.
///
/// Every field is optional; unknown fields (common in `package.json`) are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub trust_chain: Option<Vec<String>>,
}

impl SkillManifest {
    /// Overlay the fields this manifest declares onto a metadata record.
    pub fn apply(self, metadata: &mut SkillMetadata) {
        if let Some(name) = self.name {
            metadata.name = name;
        }
        if let Some(version) = self.version {
            metadata.version = version;
        }
        if let Some(author) = self.author {
            metadata.author = author;
        }
        if let Some(permissions) = self.permissions {
            metadata.permissions = permissions;
        }
        if let Some(trust_chain) = self.trust_chain {
            metadata.trust_chain = trust_chain;
        }
    }
}
