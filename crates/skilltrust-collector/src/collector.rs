//! Skill directory scanning.
//!
//! Builds a [`SkillMetadata`] record per skill directory: manifest files are
//! merged over the defaults, then the directory's code files are hashed into
//! the content hash. Per-file problems are logged and skipped; collection
//! itself never fails, it just returns what it could read.

use sha2::{Digest, Sha256};
use skilltrust_core::SkillMetadata;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::manifest::{SkillManifest, MANIFEST_FILES};

/// File extensions that participate in the content hash.
const HASHED_EXTENSIONS: &[&str] = &["py", "json", "js"];

/// Collects skill metadata from a list of skill root directories.
#[derive(Debug, Clone)]
pub struct SkillCollector {
    skill_directories: Vec<PathBuf>,
}

impl SkillCollector {
    pub fn new(skill_directories: Vec<PathBuf>) -> Self {
        Self { skill_directories }
    }

    /// Collect metadata for one skill by name.
    ///
    /// Roots are probed in order; the first one containing a directory with
    /// this name wins. Returns `None` when no root has the skill.
    pub fn collect(&self, skill_name: &str) -> Option<SkillMetadata> {
        for root in &self.skill_directories {
            let skill_path = root.join(skill_name);
            if skill_path.is_dir() {
                return Some(extract_metadata(&skill_path, skill_name));
            }
        }
        None
    }

    /// Collect metadata for every skill under every root.
    ///
    /// Entries are visited in name order per root so repeated runs over the
    /// same tree produce the same sequence. Roots that do not exist are
    /// skipped; unreadable roots are logged and skipped.
    pub fn collect_all(&self) -> Vec<SkillMetadata> {
        let mut all = Vec::new();

        for root in &self.skill_directories {
            if !root.is_dir() {
                continue;
            }

            let mut entries = match fs::read_dir(root) {
                Ok(entries) => entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .collect::<Vec<_>>(),
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "failed to read skill root");
                    continue;
                }
            };
            entries.sort();

            for path in entries {
                if !path.is_dir() {
                    continue;
                }
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    all.push(extract_metadata(&path, name));
                }
            }
        }

        all
    }
}

fn extract_metadata(skill_path: &Path, skill_name: &str) -> SkillMetadata {
    let mut metadata = SkillMetadata::new(skill_name);

    for manifest_name in MANIFEST_FILES {
        let manifest_path = skill_path.join(manifest_name);
        if !manifest_path.is_file() {
            continue;
        }

        let contents = match fs::read_to_string(&manifest_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %manifest_path.display(), error = %e, "failed to read manifest");
                continue;
            }
        };

        match serde_json::from_str::<SkillManifest>(&contents) {
            Ok(manifest) => manifest.apply(&mut metadata),
            Err(e) => {
                warn!(path = %manifest_path.display(), error = %e, "failed to parse manifest");
            }
        }
    }

    metadata.content_hash = hash_skill_tree(skill_path);
    metadata
}

/// Hash the skill's code files into one digest.
///
/// Only `.py`, `.json`, and `.js` files contribute. Files are visited in
/// name order at every level, so the digest is stable across runs and
/// filesystems. A directory with no matching files still yields the digest
/// of empty input, which is a valid non-empty hash.
fn hash_skill_tree(skill_path: &Path) -> String {
    let mut hasher = Sha256::new();

    let walker = WalkDir::new(skill_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| HASHED_EXTENSIONS.contains(&ext))
        });

    for entry in walker {
        match fs::read(entry.path()) {
            Ok(bytes) => hasher.update(&bytes),
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "failed to hash skill file");
            }
        }
    }

    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_collect_missing_skill_is_none() {
        let dir = tempdir().unwrap();
        let collector = SkillCollector::new(vec![dir.path().to_path_buf()]);
        assert!(collector.collect("no-such-skill").is_none());
    }

    #[test]
    fn test_collect_defaults_without_manifests() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("weather")).unwrap();

        let collector = SkillCollector::new(vec![dir.path().to_path_buf()]);
        let metadata = collector.collect("weather").unwrap();

        assert_eq!(metadata.name, "weather");
        assert_eq!(metadata.version, "1.0.0");
        assert_eq!(metadata.author, "unknown");
        assert!(metadata.permissions.is_empty());
        assert!(metadata.trust_chain.is_empty());
        // No code files: the digest of empty input.
        assert_eq!(
            metadata.content_hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_manifest_fields_override_defaults() {
        let dir = tempdir().unwrap();
        write(
            &dir.path().join("weather/package.json"),
            r#"{"name": "weather-pro", "version": "2.0.0", "author": "acme",
                "permissions": ["network"], "trust_chain": ["audit-1"]}"#,
        );

        let collector = SkillCollector::new(vec![dir.path().to_path_buf()]);
        let metadata = collector.collect("weather").unwrap();

        assert_eq!(metadata.name, "weather-pro");
        assert_eq!(metadata.version, "2.0.0");
        assert_eq!(metadata.author, "acme");
        assert_eq!(metadata.permissions, vec!["network"]);
        assert_eq!(metadata.trust_chain, vec!["audit-1"]);
    }

    #[test]
    fn test_manifest_merge_order() {
        let dir = tempdir().unwrap();
        write(
            &dir.path().join("weather/package.json"),
            r#"{"author": "package-author", "version": "1.5.0"}"#,
        );
        write(
            &dir.path().join("weather/skill.json"),
            r#"{"author": "skill-author"}"#,
        );

        let collector = SkillCollector::new(vec![dir.path().to_path_buf()]);
        let metadata = collector.collect("weather").unwrap();

        // skill.json is probed after package.json and wins on author, while
        // the version it does not declare survives from package.json.
        assert_eq!(metadata.author, "skill-author");
        assert_eq!(metadata.version, "1.5.0");
    }

    #[test]
    fn test_invalid_manifest_is_skipped() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("weather/package.json"), "not json at all{");
        write(
            &dir.path().join("weather/skill.json"),
            r#"{"author": "acme"}"#,
        );

        let collector = SkillCollector::new(vec![dir.path().to_path_buf()]);
        let metadata = collector.collect("weather").unwrap();

        assert_eq!(metadata.author, "acme");
        assert_eq!(metadata.version, "1.0.0");
    }

    #[test]
    fn test_hash_covers_code_files_only() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("weather/main.py"), "print('hi')\n");
        write(&dir.path().join("weather/README.md"), "docs v1");

        let collector = SkillCollector::new(vec![dir.path().to_path_buf()]);
        let before = collector.collect("weather").unwrap().content_hash;

        // Touching a non-code file leaves the hash alone.
        write(&dir.path().join("weather/README.md"), "docs v2");
        let after = collector.collect("weather").unwrap().content_hash;
        assert_eq!(before, after);

        // Touching a code file changes it.
        write(&dir.path().join("weather/main.py"), "print('bye')\n");
        let changed = collector.collect("weather").unwrap().content_hash;
        assert_ne!(before, changed);
    }

    #[test]
    fn test_hash_is_deterministic_across_collectors() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("weather/a.py"), "a = 1\n");
        write(&dir.path().join("weather/lib/b.js"), "let b = 2;\n");
        write(&dir.path().join("weather/config.json"), "{}");

        let collector = SkillCollector::new(vec![dir.path().to_path_buf()]);
        let first = collector.collect("weather").unwrap().content_hash;
        let second = collector.collect("weather").unwrap().content_hash;

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_first_root_wins() {
        let primary = tempdir().unwrap();
        let fallback = tempdir().unwrap();
        write(
            &primary.path().join("weather/skill.json"),
            r#"{"author": "primary"}"#,
        );
        write(
            &fallback.path().join("weather/skill.json"),
            r#"{"author": "fallback"}"#,
        );

        let collector = SkillCollector::new(vec![
            primary.path().to_path_buf(),
            fallback.path().to_path_buf(),
        ]);
        assert_eq!(collector.collect("weather").unwrap().author, "primary");
    }

    #[test]
    fn test_collect_all_visits_directories_in_name_order() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        write(&dir.path().join("stray.json"), "{}");

        let collector = SkillCollector::new(vec![dir.path().to_path_buf()]);
        let names: Vec<_> = collector
            .collect_all()
            .into_iter()
            .map(|m| m.name)
            .collect();

        // Plain files under the root are not skills.
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_collect_all_spans_multiple_roots() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        fs::create_dir(first.path().join("weather")).unwrap();
        fs::create_dir(second.path().join("translate")).unwrap();

        let collector = SkillCollector::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
            PathBuf::from("/does/not/exist"),
        ]);
        let names: Vec<_> = collector
            .collect_all()
            .into_iter()
            .map(|m| m.name)
            .collect();

        assert_eq!(names, vec!["weather", "translate"]);
    }
}
